use thiserror::Error;

/// Local input problems. Each one is shown as a standing warning until the next valid attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Not a recognised YouTube link: {0}")]
    MalformedLink(String),

    #[error("This video is already in the playlist: {0}")]
    DuplicateLink(String),

    #[error("Comments are limited to {max} characters ({len} entered)")]
    CommentTooLong { len: usize, max: usize },
}

/// Failures of the external video metadata lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Video lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Video lookup returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode video lookup response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The owning session was closed before the response arrived.
    #[error("Video lookup cancelled")]
    Cancelled,
}

/// Failures of the external playlist create call.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Failed to create playlist: {0}")]
    Store(anyhow::Error),

    #[error("Playlist submit cancelled")]
    Cancelled,
}

#[derive(Error, Debug)]
pub enum CommentError {
    #[error("Failed to create comment: {0}")]
    Store(anyhow::Error),
}

/// Anything the playlist builder can report back to its caller.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}
