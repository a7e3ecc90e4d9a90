//! # Responder Trait
//!
//! The abstract interface for answering a compliance question. The keyword
//! placeholder and any future retrieval-backed implementation must satisfy
//! this trait, so they are interchangeable at compile time.
//!
//! The trait requires `Send + Sync` so a single responder can sit behind
//! shared server state.

use gg_core::{EvidenceSource, Status};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a responder that can fail.
///
/// The keyword placeholder never returns one; a retrieval-backed responder
/// reports index or model failures here.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// The backing evidence source could not be reached.
    #[error("evidence backend unavailable: {0}")]
    Unavailable(String),
    /// The backend answered with something unusable.
    #[error("responder failed: {0}")]
    Failed(String),
}

/// The `(answer, evidence, status)` triple produced for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Human-readable finding, may contain Markdown emphasis.
    pub text: String,
    /// Citation backing the finding, or the `"None"` sentinel.
    pub evidence: EvidenceSource,
    /// Outcome label.
    pub status: Status,
}

/// Abstract interface for a compliance-question responder.
pub trait Responder: Send + Sync {
    /// Answer a single query.
    fn answer(&self, query: &str) -> Result<Answer, ResponderError>;
}

impl<R: Responder + ?Sized> Responder for Box<R> {
    fn answer(&self, query: &str) -> Result<Answer, ResponderError> {
        (**self).answer(query)
    }
}

impl<R: Responder + ?Sized> Responder for std::sync::Arc<R> {
    fn answer(&self, query: &str) -> Result<Answer, ResponderError> {
        (**self).answer(query)
    }
}
