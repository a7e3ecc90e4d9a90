//! # gg-responder — Compliance Question Responder
//!
//! Defines the trait-based responder abstraction and the keyword-dispatch
//! placeholder used until an evidence-retrieval system is wired in.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): The `Responder` trait is the contract every
//!   answering backend satisfies: `answer(query) -> Result<Answer, _>`.
//!   The audit store and the presentation layers only ever see this trait.
//!
//! - **Keyword** (`keyword.rs`): `KeywordResponder` maps a query to a
//!   canned answer via an ordered list of substring rules. First match wins,
//!   with a generic fallback. Total over all inputs.
//!
//! - **Timing** (`timing.rs`): `answer_timed()` wraps any responder call in
//!   a wall-clock measurement and returns the rounded `Latency`.
//!
//! ## Crate Policy
//!
//! - Depends on `gg-core` only.
//! - No I/O in responders shipped from this crate.

pub mod keyword;
pub mod timing;
pub mod traits;

pub use keyword::{KeywordResponder, KeywordRule};
pub use timing::{answer_timed, TimedAnswer};
pub use traits::{Answer, Responder, ResponderError};
