use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::data::interface::playlist::PlaylistStore;
use crate::data::interface::user::AuthContext;
use crate::error::{DraftError, LookupError, SubmitError};
use crate::server::VideoLookup;

use super::video::AddVideoOutcome;
use super::{send_draft, PlaylistBuilder, SubmitReceipt};

/// A [`PlaylistBuilder`] owned by one page, with its collaborators and lifetime.
///
/// The draft lock is only held for the local halves of an operation, never across
/// the lookup or the create call, so edits keep going while either is in flight.
/// Once the session is closed (or dropped) every pending call resolves to a
/// `Cancelled` error and its result is thrown away.
pub struct BuilderSession {
    state: Mutex<PlaylistBuilder>,
    auth: AuthContext,
    lookup: Arc<dyn VideoLookup>,
    store: Arc<dyn PlaylistStore>,
    cancel: CancellationToken,
}

impl BuilderSession {
    pub fn new(
        auth: AuthContext,
        lookup: Arc<dyn VideoLookup>,
        store: Arc<dyn PlaylistStore>,
    ) -> Self {
        Self {
            state: Mutex::new(PlaylistBuilder::new()),
            auth,
            lookup,
            store,
            cancel: CancellationToken::new(),
        }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub async fn snapshot(&self) -> PlaylistBuilder {
        self.state.lock().await.clone()
    }

    /// Run a synchronous edit against the draft. `None` once the session is closed.
    pub async fn edit<R>(&self, f: impl FnOnce(&mut PlaylistBuilder) -> R) -> Option<R> {
        if self.is_closed() {
            return None;
        }
        let mut state = self.state.lock().await;
        Some(f(&mut *state))
    }

    pub async fn can_submit(&self) -> bool {
        self.state.lock().await.can_submit()
    }

    pub async fn add_video(&self, raw: &str) -> Result<AddVideoOutcome, DraftError> {
        if self.is_closed() {
            return Err(LookupError::Cancelled.into());
        }
        let video_id = self.state.lock().await.begin_add_video(raw)?;

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(LookupError::Cancelled),
            result = self.lookup.lookup_video(&video_id) => result,
        };
        if self.is_closed() {
            log::debug!("Dropping lookup of {} for closed session", video_id);
            return Err(LookupError::Cancelled.into());
        }

        let found = result
            .inspect_err(|e| log::error!("Failed to look up video {}: {}", video_id, e))?;
        Ok(self
            .state
            .lock()
            .await
            .finish_add_video(raw, &video_id, found)?)
    }

    /// Send the current draft and reset it on success.
    ///
    /// Edits made while the create call is pending are discarded by that reset.
    pub async fn submit(&self) -> Result<SubmitReceipt, SubmitError> {
        if self.is_closed() {
            return Err(SubmitError::Cancelled);
        }
        let draft = self.state.lock().await.draft();

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(SubmitError::Cancelled),
            result = send_draft(self.store.as_ref(), &self.auth, &draft) => result,
        };
        if self.is_closed() {
            log::debug!("Dropping submit result for closed session");
            return Err(SubmitError::Cancelled);
        }

        let receipt = result?;
        self.state.lock().await.reset();
        Ok(receipt)
    }

    /// End the session. Pending lookups and submits resolve as cancelled.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for BuilderSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod session_test {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::data::interface::playlist::NewPlaylist;
    use crate::draft::test_support::{FakeLookup, MemoryStore};
    use crate::server::VideoMetadata;

    /// Lookup that only answers once the gate is opened.
    struct GatedLookup {
        gate: Arc<Notify>,
        inner: FakeLookup,
    }

    #[async_trait]
    impl VideoLookup for GatedLookup {
        async fn lookup_video(
            &self,
            video_id: &str,
        ) -> Result<Option<VideoMetadata>, LookupError> {
            self.gate.notified().await;
            self.inner.lookup_video(video_id).await
        }
    }

    /// Store whose create call only answers once the gate is opened.
    #[derive(Default)]
    struct GatedStore {
        gate: Notify,
        inner: MemoryStore,
    }

    #[async_trait]
    impl PlaylistStore for GatedStore {
        async fn create_playlist(
            &self,
            owner: &AuthContext,
            playlist: &NewPlaylist,
        ) -> anyhow::Result<String> {
            self.gate.notified().await;
            self.inner.create_playlist(owner, playlist).await
        }

        async fn user_id_for_uid(&self, uid: &str) -> anyhow::Result<Option<String>> {
            self.inner.user_id_for_uid(uid).await
        }
    }

    fn session_with(lookup: impl VideoLookup + 'static) -> (Arc<BuilderSession>, Arc<MemoryStore>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = Arc::new(MemoryStore::default());
        let session = BuilderSession::new(
            AuthContext::new("uid-1"),
            Arc::new(lookup),
            store.clone(),
        );
        (Arc::new(session), store)
    }

    #[tokio::test]
    async fn test_edits_continue_while_lookup_pending() {
        let gate = Arc::new(Notify::new());
        let (session, _) = session_with(GatedLookup {
            gate: gate.clone(),
            inner: FakeLookup::with(&["abc123"]),
        });

        let pending = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .add_video("https://www.youtube.com/watch?v=abc123")
                    .await
            })
        };
        tokio::task::yield_now().await;

        session
            .edit(|b| {
                b.set_title("Late night");
                b.add_tag("lofi");
            })
            .await
            .unwrap();

        gate.notify_one();
        let outcome = pending.await.unwrap().unwrap();
        assert!(matches!(outcome, AddVideoOutcome::Added(_)));

        let draft = session.snapshot().await;
        assert_eq!(draft.title(), "Late night");
        assert_eq!(draft.tags(), ["#lofi"]);
        assert_eq!(draft.videos().len(), 1);
        assert!(session.can_submit().await);
    }

    #[tokio::test]
    async fn test_close_cancels_pending_lookup() {
        let (session, _) = session_with(GatedLookup {
            gate: Arc::new(Notify::new()),
            inner: FakeLookup::with(&["abc123"]),
        });

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.add_video("https://youtu.be/abc123").await })
        };
        tokio::task::yield_now().await;
        session.close();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, DraftError::Lookup(LookupError::Cancelled)));
        assert!(session.snapshot().await.videos().is_empty());
        assert!(session.edit(|b| b.add_tag("x")).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_adds_keep_one_copy() {
        let (session, _) = session_with(FakeLookup::with(&["abc123", "def456"]));
        let results = futures::future::join_all([
            session.add_video("https://youtu.be/abc123"),
            session.add_video("https://www.youtube.com/watch?v=abc123"),
            session.add_video("https://youtu.be/def456"),
        ])
        .await;

        let added = results
            .iter()
            .filter(|r| matches!(r, Ok(AddVideoOutcome::Added(_))))
            .count();
        assert_eq!(added, 2);
        assert_eq!(session.snapshot().await.videos().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_resets_draft() {
        let (session, store) = session_with(FakeLookup::with(&["abc123"]));
        session
            .edit(|b| {
                b.set_title("Mix");
                b.add_tag("mix");
                b.toggle_private();
            })
            .await;
        session.add_video("https://youtu.be/abc123").await.unwrap();

        let receipt = session.submit().await.unwrap();
        assert_eq!(receipt.playlist_id, "pl-1");
        assert_eq!(session.snapshot().await, PlaylistBuilder::new());

        let created = store.created.lock().unwrap();
        assert_eq!(created[0].0.uid, "uid-1");
        assert_eq!(created[0].1.title, "Mix");
        assert!(created[0].1.is_private);
    }

    #[tokio::test]
    async fn test_closed_session_refuses_work() {
        let (session, store) = session_with(FakeLookup::with(&["abc123"]));
        session.close();
        assert!(session.is_closed());
        assert!(matches!(
            session.submit().await,
            Err(SubmitError::Cancelled)
        ));
        assert!(matches!(
            session.add_video("https://youtu.be/abc123").await,
            Err(DraftError::Lookup(LookupError::Cancelled))
        ));
        assert!(store.created.lock().unwrap().is_empty());
    }

    async fn gated_session() -> (Arc<BuilderSession>, Arc<GatedStore>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = Arc::new(GatedStore::default());
        let session = Arc::new(BuilderSession::new(
            AuthContext::new("uid-1"),
            Arc::new(FakeLookup::with(&["abc123"])),
            store.clone(),
        ));
        session
            .edit(|b| {
                b.set_title("Mix");
                b.add_tag("mix");
            })
            .await;
        session.add_video("https://youtu.be/abc123").await.unwrap();
        (session, store)
    }

    #[tokio::test]
    async fn test_close_cancels_pending_submit() {
        let (session, store) = gated_session().await;

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.submit().await })
        };
        tokio::task::yield_now().await;
        session.close();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, SubmitError::Cancelled));

        let draft = session.snapshot().await;
        assert_eq!(draft.title(), "Mix");
        assert_eq!(draft.videos().len(), 1);
        assert!(store.inner.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edits_during_submit_are_reset() {
        let (session, store) = gated_session().await;

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.submit().await })
        };
        tokio::task::yield_now().await;
        session
            .edit(|b| {
                b.set_title("Renamed");
                b.add_tag("late");
            })
            .await
            .unwrap();

        store.gate.notify_one();
        let receipt = pending.await.unwrap().unwrap();
        assert_eq!(receipt.playlist_id, "pl-1");
        assert_eq!(session.snapshot().await, PlaylistBuilder::new());

        // the draft was taken before the edit
        let created = store.inner.created.lock().unwrap();
        assert_eq!(created[0].1.title, "Mix");
        assert_eq!(created[0].1.tags, ["#mix"]);
    }
}
