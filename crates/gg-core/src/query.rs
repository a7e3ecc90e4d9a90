//! # Query — Validated User Input
//!
//! A compliance question as typed by the user. The only validation is
//! non-emptiness. Whitespace-only text is a question like any other and is
//! answered by the fallback rule. The text is kept verbatim, never trimmed,
//! so the audit log records exactly what was asked.

use serde::{Deserialize, Serialize};

use crate::error::GraphGuardError;

/// A non-empty compliance question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query(String);

impl Query {
    /// Validate user input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphGuardError::EmptyQuery`] for the empty string.
    pub fn new(text: impl Into<String>) -> Result<Self, GraphGuardError> {
        let text = text.into();
        if text.is_empty() {
            return Err(GraphGuardError::EmptyQuery);
        }
        Ok(Self(text))
    }

    /// The raw query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query, returning the raw text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Query {
    type Error = GraphGuardError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Query> for String {
    fn from(query: Query) -> Self {
        query.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
