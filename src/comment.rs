use crate::data::interface::comment::CommentStore;
use crate::data::interface::user::AuthContext;
use crate::error::{CommentError, ValidationError};

/// Longest comment accepted, in characters.
pub const COMMENT_MAX_LEN: usize = 400;

/// Comment box under a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    playlist_id: String,
    text: String,
    warning: Option<ValidationError>,
}

impl CommentForm {
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            text: String::new(),
            warning: None,
        }
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn warning(&self) -> Option<&ValidationError> {
        self.warning.as_ref()
    }

    /// Replace the text with an edited version.
    ///
    /// An edit longer than [`COMMENT_MAX_LEN`] is rejected whole and leaves a standing
    /// warning; the committed text keeps its previous value. The next accepted edit
    /// clears the warning.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        let len = text.chars().count();
        if len > COMMENT_MAX_LEN {
            let err = ValidationError::CommentTooLong {
                len,
                max: COMMENT_MAX_LEN,
            };
            self.warning = Some(err.clone());
            return Err(err);
        }
        self.warning = None;
        self.text = text;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Post the comment. Blank text is skipped without a warning and yields `Ok(None)`;
    /// otherwise the created comment id is returned and the box is cleared.
    pub async fn submit(
        &mut self,
        author: &AuthContext,
        store: &dyn CommentStore,
    ) -> Result<Option<String>, CommentError> {
        if !self.can_submit() {
            return Ok(None);
        }
        let id = store
            .create_comment(author, &self.playlist_id, &self.text)
            .await
            .map_err(|e| {
                log::error!("Error adding comment to {}: {}", self.playlist_id, e);
                CommentError::Store(e)
            })?;
        self.text.clear();
        Ok(Some(id))
    }
}
