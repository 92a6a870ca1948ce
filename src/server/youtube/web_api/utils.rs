use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static YOUTUBE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:www|m|music)\.)?(?:youtube\.com/watch\?\S*v=[A-Za-z0-9_-]+|youtu\.be/[A-Za-z0-9_-]+)\S*$",
    )
    .expect("youtube link pattern is valid")
});

pub fn is_youtube_link(url: &str) -> bool {
    YOUTUBE_LINK.is_match(url.trim())
}

static WATCH_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("watch id pattern is valid")
});

static SHORT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").expect("short id pattern is valid")
});

/// The video id of a watch or short link, cut to the characters an id may hold.
pub fn find_youtube_video_id_from_share(url: &str) -> Option<String> {
    let url = url.trim();
    let url = url.split('#').next().unwrap_or(url);

    WATCH_ID
        .captures(url)
        // short links carry the id in the path
        .or_else(|| SHORT_ID.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

pub fn canonical_watch_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id)
    )
}

/// Check the link shape and pull the video id out of it.
pub fn parse_video_link(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if !is_youtube_link(trimmed) {
        return Err(ValidationError::MalformedLink(trimmed.to_string()));
    }
    find_youtube_video_id_from_share(trimmed)
        .ok_or_else(|| ValidationError::MalformedLink(trimmed.to_string()))
}
