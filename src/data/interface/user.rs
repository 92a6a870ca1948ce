use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, handed to every call that acts on their behalf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthContext {
    pub uid: String,
}

impl AuthContext {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}
