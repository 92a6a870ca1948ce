use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::VideoMetadata;

use super::user::AuthContext;

/// One playlist track, built in a single step from a metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub title: String,
    pub channel_title: String,
    /// canonical watch url
    pub url: String,
    pub thumbnail: String,
}

impl VideoRef {
    pub fn from_metadata(url: String, metadata: VideoMetadata) -> Self {
        Self {
            title: metadata.title,
            channel_title: metadata.channel_title,
            url,
            thumbnail: metadata.thumbnail,
        }
    }
}

/// The full draft handed to the create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    pub title: String,
    pub tags: Vec<String>,
    pub video_list: Vec<VideoRef>,
    pub is_private: bool,
}

/// A playlist as read back from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    pub id: String,
    pub owner_uid: String,
    pub title: String,
    pub tags: Vec<String>,
    pub video_list: Vec<VideoRef>,
    pub is_private: bool,
}

/// Backend that persists finished playlists.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Create the playlist in one call and return its id.
    async fn create_playlist(&self, owner: &AuthContext, playlist: &NewPlaylist) -> Result<String>;

    /// Resolve the public profile id of an auth uid, if the user has one.
    async fn user_id_for_uid(&self, uid: &str) -> Result<Option<String>>;
}
