//! Draft playlist builder.
//!
//! A [`PlaylistBuilder`] accumulates a title, tags, an ordered track list and a
//! visibility flag from user input, gates submission on the draft being complete,
//! and hands the whole draft to a [`PlaylistStore`] in one create call.
//!
//! Adding a video is split into a local half ([`PlaylistBuilder::begin_add_video`])
//! and a half that applies the lookup answer ([`PlaylistBuilder::finish_add_video`]),
//! so a caller can run the lookup without holding the builder. [`session::BuilderSession`]
//! does exactly that.

pub mod session;
pub mod tag;
pub mod video;

use crate::data::interface::playlist::{NewPlaylist, PlaylistStore, VideoRef};
use crate::data::interface::user::AuthContext;
use crate::error::{DraftError, SubmitError, ValidationError};
use crate::route::Route;
use crate::server::{VideoLookup, VideoMetadata};

use tag::TagCollector;
use video::{AddVideoOutcome, VideoCollector};

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub playlist_id: String,
    /// Where to go next: the owner's profile, when it could be resolved.
    pub redirect: Option<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistBuilder {
    title: String,
    tags: TagCollector,
    videos: VideoCollector,
    is_private: bool,
}

impl PlaylistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn tags(&self) -> &[String] {
        self.tags.tags()
    }

    pub fn tag_input(&self) -> &str {
        self.tags.input()
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tags.set_input(text);
    }

    pub fn add_tag(&mut self, raw: &str) -> bool {
        self.tags.add(raw)
    }

    /// Commit the pending tag input. See [`TagCollector::commit`].
    pub fn commit_tag(&mut self, composing: bool) -> bool {
        self.tags.commit(composing)
    }

    pub fn delete_tag(&mut self, index: usize) -> Option<String> {
        self.tags.delete(index)
    }

    pub fn videos(&self) -> &[VideoRef] {
        self.videos.videos()
    }

    pub fn video_input(&self) -> &str {
        self.videos.input()
    }

    pub fn set_video_input(&mut self, text: impl Into<String>) {
        self.videos.set_input(text);
    }

    /// The standing warning left by the last rejected link, if any.
    pub fn link_warning(&self) -> Option<&ValidationError> {
        self.videos.warning()
    }

    pub fn begin_add_video(&mut self, raw: &str) -> Result<String, ValidationError> {
        self.videos.validate(raw)
    }

    pub fn finish_add_video(
        &mut self,
        raw: &str,
        video_id: &str,
        found: Option<VideoMetadata>,
    ) -> Result<AddVideoOutcome, ValidationError> {
        self.videos.apply_lookup(raw, video_id, found)
    }

    /// Validate `raw`, look the video up and append it.
    ///
    /// Holds the builder for the whole lookup; use [`session::BuilderSession`] to keep
    /// editing while a lookup is in flight.
    pub async fn add_video(
        &mut self,
        raw: &str,
        lookup: &dyn VideoLookup,
    ) -> Result<AddVideoOutcome, DraftError> {
        let video_id = self.begin_add_video(raw)?;
        let found = lookup
            .lookup_video(&video_id)
            .await
            .inspect_err(|e| log::error!("Failed to look up video {}: {}", video_id, e))?;
        Ok(self.finish_add_video(raw, &video_id, found)?)
    }

    pub fn delete_video(&mut self, index: usize) -> Option<VideoRef> {
        self.videos.delete(index)
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn toggle_private(&mut self) -> bool {
        self.is_private = !self.is_private;
        self.is_private
    }

    /// Submission gate: a non-blank title, at least one tag and at least one video.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.tags().is_empty() && !self.videos().is_empty()
    }

    /// Snapshot of the draft as the create call receives it.
    pub fn draft(&self) -> NewPlaylist {
        NewPlaylist {
            title: self.title.clone(),
            tags: self.tags().to_vec(),
            video_list: self.videos().to_vec(),
            is_private: self.is_private,
        }
    }

    /// Back to the empty draft, pending inputs and warnings included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hand the draft to `store` and reset on success. On failure the draft is left
    /// as it was so the user can retry.
    ///
    /// The gate is not re-checked here; whatever draft is present gets sent.
    pub async fn submit(
        &mut self,
        owner: &AuthContext,
        store: &dyn PlaylistStore,
    ) -> Result<SubmitReceipt, SubmitError> {
        let receipt = send_draft(store, owner, &self.draft()).await?;
        self.reset();
        Ok(receipt)
    }
}

/// The create call plus the profile lookup for the redirect.
pub(crate) async fn send_draft(
    store: &dyn PlaylistStore,
    owner: &AuthContext,
    draft: &NewPlaylist,
) -> Result<SubmitReceipt, SubmitError> {
    let playlist_id = store.create_playlist(owner, draft).await.map_err(|e| {
        log::error!("Error adding playlist: {}", e);
        SubmitError::Store(e)
    })?;
    log::info!(
        "Created playlist {} with {} videos",
        playlist_id,
        draft.video_list.len()
    );

    let redirect = match store.user_id_for_uid(&owner.uid).await {
        Ok(user_id) => user_id.map(|user_id| Route::Profile { user_id }),
        Err(e) => {
            log::warn!("Failed to resolve profile of {}: {}", owner.uid, e);
            None
        }
    };
    Ok(SubmitReceipt {
        playlist_id,
        redirect,
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;

    use crate::data::interface::playlist::{NewPlaylist, PlaylistStore};
    use crate::data::interface::user::AuthContext;
    use crate::error::LookupError;
    use crate::server::{VideoLookup, VideoMetadata};

    /// Lookup answering from a fixed table; unknown ids are "no match".
    #[derive(Default)]
    pub struct FakeLookup {
        pub videos: HashMap<String, VideoMetadata>,
        pub fail: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        pub fn with(ids: &[&str]) -> Self {
            let videos = ids
                .iter()
                .map(|id| {
                    (
                        id.to_string(),
                        VideoMetadata {
                            title: format!("title {}", id),
                            channel_title: format!("channel {}", id),
                            thumbnail: format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", id),
                        },
                    )
                })
                .collect();
            Self {
                videos,
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl VideoLookup for FakeLookup {
        async fn lookup_video(
            &self,
            video_id: &str,
        ) -> Result<Option<VideoMetadata>, LookupError> {
            self.calls.lock().unwrap().push(video_id.to_string());
            if self.fail {
                return Err(LookupError::Status {
                    status: 500,
                    message: "backend error".to_string(),
                });
            }
            Ok(self.videos.get(video_id).cloned())
        }
    }

    /// Store keeping created playlists in memory.
    #[derive(Default)]
    pub struct MemoryStore {
        pub created: Mutex<Vec<(AuthContext, NewPlaylist)>>,
        pub profiles: HashMap<String, String>,
        pub fail: Mutex<bool>,
    }

    impl MemoryStore {
        pub fn failing() -> Self {
            Self {
                fail: Mutex::new(true),
                ..Default::default()
            }
        }

        pub fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }
    }

    #[async_trait]
    impl PlaylistStore for MemoryStore {
        async fn create_playlist(
            &self,
            owner: &AuthContext,
            playlist: &NewPlaylist,
        ) -> Result<String> {
            if *self.fail.lock().unwrap() {
                return Err(anyhow::anyhow!("permission denied"));
            }
            let mut created = self.created.lock().unwrap();
            created.push((owner.clone(), playlist.clone()));
            Ok(format!("pl-{}", created.len()))
        }

        async fn user_id_for_uid(&self, uid: &str) -> Result<Option<String>> {
            Ok(self.profiles.get(uid).cloned())
        }
    }
}
