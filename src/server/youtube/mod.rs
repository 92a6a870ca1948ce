pub mod model;
pub mod web_api;

use anyhow::Result;
use async_trait::async_trait;

use crate::error::LookupError;
use crate::server::{VideoLookup, VideoMetadata};
use crate::CLIENT;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const BASE_URL_ENV: &str = "YOUTUBE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl YoutubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `YOUTUBE_API_KEY` and the optional `YOUTUBE_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(anyhow::anyhow!("{} is not set", API_KEY_ENV))?;
        let config = Self::new(api_key);
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

/// `VideoLookup` backed by the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    config: YoutubeConfig,
}

impl YoutubeClient {
    pub fn new(config: YoutubeConfig) -> Self {
        Self::with_client(CLIENT.clone(), config)
    }

    pub fn with_client(http: reqwest::Client, config: YoutubeConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &YoutubeConfig {
        &self.config
    }
}

#[async_trait]
impl VideoLookup for YoutubeClient {
    async fn lookup_video(&self, video_id: &str) -> Result<Option<VideoMetadata>, LookupError> {
        let resp = web_api::video::get_youtube_video(
            &self.http,
            &self.config.base_url,
            &self.config.api_key,
            video_id,
        )
        .await?;
        Ok(resp.into_metadata())
    }
}
