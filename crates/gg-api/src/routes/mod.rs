//! # API Route Modules
//!
//! | Prefix        | Module     | Domain                 |
//! |---------------|------------|------------------------|
//! | `/v1/audits*` | [`audits`] | Query submission, log summary |

pub mod audits;
