pub mod comment;
pub mod data;
pub mod draft;
pub mod error;
pub mod route;
pub mod server;

use std::sync::LazyLock;

pub use comment::CommentForm;
pub use data::interface::{
    comment::CommentStore,
    playlist::{NewPlaylist, PlaylistStore, VideoRef},
    user::AuthContext,
};
pub use draft::{session::BuilderSession, video::AddVideoOutcome, PlaylistBuilder, SubmitReceipt};
pub use error::{CommentError, DraftError, LookupError, SubmitError, ValidationError};
pub use route::Route;
pub use server::{
    youtube::{YoutubeClient, YoutubeConfig},
    VideoLookup, VideoMetadata,
};

/// Shared HTTP client. Lookups are single best-effort calls, so no retry layer is installed.
pub static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("playlist_draft/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});
