//! Language token: opaque identifier for a language.
//!
//! Tokens are compared only for equality and hashed; no structure (such as
//! ISO 639 validity) is assumed. Whatever a model descriptor declares is a
//! valid token.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An opaque language identifier (typically an ISO 639-1 code like "en").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageToken(String);

impl LanguageToken {
    /// Create a token from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the token is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets maps keyed by token be queried with a plain &str.
impl Borrow<str> for LanguageToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageToken {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageToken {
    fn from(code: String) -> Self {
        Self(code)
    }
}
