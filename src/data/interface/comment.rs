use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::user::AuthContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: String,
    pub playlist_id: String,
    pub author_uid: String,
    pub text: String,
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Create a comment on a playlist and return its id.
    async fn create_comment(
        &self,
        author: &AuthContext,
        playlist_id: &str,
        text: &str,
    ) -> Result<String>;
}
