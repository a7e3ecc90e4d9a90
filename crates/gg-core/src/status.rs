//! # Status — Closed Outcome Enumeration
//!
//! Every answered query ends in exactly one of two outcomes. The labels are
//! case-sensitive and match the `Status` column of the audit table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GraphGuardError;

/// Outcome label recorded for each answered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The responder produced an answer from the policy corpus.
    Success,
    /// The question falls outside the corpus and was declined.
    Refusal,
}

impl Status {
    /// Returns both statuses in display order.
    pub fn all() -> &'static [Status] {
        &[Self::Success, Self::Refusal]
    }

    /// Returns the label stored in the audit table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Refusal => "Refusal",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = GraphGuardError;

    /// Parse a status from its table label. Unknown labels are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(Self::Success),
            "Refusal" => Ok(Self::Refusal),
            other => Err(GraphGuardError::UnknownStatus(other.to_string())),
        }
    }
}
