pub const TAG_MARKER: char = '#';

/// Trim a raw token and make sure it starts with the tag marker.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with(TAG_MARKER) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}{}", TAG_MARKER, trimmed))
    }
}

/// Ordered tags plus the pending text of the tag input.
///
/// Duplicates are kept; only the input clearing after a commit stops the same
/// token from being added twice by one keypress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCollector {
    tags: Vec<String>,
    input: String,
}

impl TagCollector {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commit the pending input, as on Enter.
    ///
    /// `composing` is true while an input method is still assembling the text; such
    /// events are ignored so one committed word is not added twice.
    pub fn commit(&mut self, composing: bool) -> bool {
        if composing {
            return false;
        }
        let raw = self.input.clone();
        self.add(&raw)
    }

    /// Append `raw` as a tag and clear the pending input. Blank input is a no-op.
    pub fn add(&mut self, raw: &str) -> bool {
        match normalize_tag(raw) {
            Some(tag) => {
                self.tags.push(tag);
                self.input.clear();
                true
            }
            None => false,
        }
    }

    /// Remove the tag at `index`. Out of range is a no-op.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index < self.tags.len() {
            Some(self.tags.remove(index))
        } else {
            None
        }
    }
}
