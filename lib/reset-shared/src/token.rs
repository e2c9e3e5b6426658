use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The opaque reset token the hosting page carries for the
/// duration of one reset flow.
///
/// The client never validates or interprets it, it only ends
/// up verbatim in the path of the reset endpoint. Whether the
/// token is (still) valid is decided by the backend alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetToken(String);

impl ResetToken {
    /// Wraps the raw attribute value of the page.
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The token exactly as the page delivered it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResetToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ResetToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl Display for ResetToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
