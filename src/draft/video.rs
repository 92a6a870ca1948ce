use crate::data::interface::playlist::VideoRef;
use crate::error::ValidationError;
use crate::server::youtube::web_api::utils::{canonical_watch_url, parse_video_link};
use crate::server::VideoMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddVideoOutcome {
    Added(VideoRef),
    /// The lookup succeeded but the provider knows no such video.
    NotFound,
}

/// Ordered playlist tracks, the pending link input and the standing link warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCollector {
    videos: Vec<VideoRef>,
    input: String,
    warning: Option<ValidationError>,
}

impl VideoCollector {
    pub fn videos(&self) -> &[VideoRef] {
        &self.videos
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn warning(&self) -> Option<&ValidationError> {
        self.warning.as_ref()
    }

    fn contains_url(&self, url: &str) -> bool {
        self.videos.iter().any(|v| v.url == url)
    }

    /// Local half of adding a video: check the link and return the id to look up.
    ///
    /// Sets the standing warning on failure and clears it on success.
    pub fn validate(&mut self, raw: &str) -> Result<String, ValidationError> {
        let result = parse_video_link(raw).and_then(|video_id| {
            let url = canonical_watch_url(&video_id);
            if self.contains_url(&url) {
                Err(ValidationError::DuplicateLink(url))
            } else {
                Ok(video_id)
            }
        });
        self.warning = result.as_ref().err().cloned();
        result
    }

    /// Second half of adding a video, once the lookup for `video_id` has answered.
    ///
    /// Another lookup for the same video may have finished in between, so the
    /// duplicate check runs again before appending.
    pub fn apply_lookup(
        &mut self,
        raw: &str,
        video_id: &str,
        found: Option<VideoMetadata>,
    ) -> Result<AddVideoOutcome, ValidationError> {
        let Some(metadata) = found else {
            log::info!("No video found for id {}", video_id);
            return Ok(AddVideoOutcome::NotFound);
        };
        let url = canonical_watch_url(video_id);
        if self.contains_url(&url) {
            let err = ValidationError::DuplicateLink(url);
            self.warning = Some(err.clone());
            return Err(err);
        }

        let video = VideoRef::from_metadata(url, metadata);
        self.videos.push(video.clone());
        // leave the input alone if the user already typed something else
        if self.input.trim() == raw.trim() {
            self.input.clear();
        }
        Ok(AddVideoOutcome::Added(video))
    }

    /// Remove the video at `index`. Out of range is a no-op.
    pub fn delete(&mut self, index: usize) -> Option<VideoRef> {
        if index < self.videos.len() {
            Some(self.videos.remove(index))
        } else {
            None
        }
    }
}
