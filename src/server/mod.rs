use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

pub mod youtube;

/// The fields of a video a playlist track is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub title: String,
    pub channel_title: String,
    pub thumbnail: String,
}

/// Read-only video metadata provider.
#[async_trait]
pub trait VideoLookup: Send + Sync {
    /// Look a single video up by id. `Ok(None)` means the provider has no such video.
    async fn lookup_video(&self, video_id: &str) -> Result<Option<VideoMetadata>, LookupError>;
}
