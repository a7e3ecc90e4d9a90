//! # Timed Invocation
//!
//! Measures the wall-clock duration of a single responder call. The
//! latency covers only `Responder::answer`, not logging or persistence.

use std::time::Instant;

use gg_core::Latency;

use crate::traits::{Answer, Responder, ResponderError};

/// An answer together with the responder's measured latency.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedAnswer {
    /// The responder's output.
    pub answer: Answer,
    /// Duration of the call, rounded to four decimals.
    pub latency: Latency,
}

/// Invoke `responder` on `query` and time the call.
pub fn answer_timed<R: Responder + ?Sized>(
    responder: &R,
    query: &str,
) -> Result<TimedAnswer, ResponderError> {
    let started = Instant::now();
    let answer = responder.answer(query)?;
    let latency = Latency::from_duration(started.elapsed());
    tracing::debug!(latency = %latency, status = %answer.status, "responder answered");
    Ok(TimedAnswer { answer, latency })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordResponder;
    use gg_core::{EvidenceSource, Status};
    use std::time::Duration;

    struct SlowResponder;

    impl Responder for SlowResponder {
        fn answer(&self, _query: &str) -> Result<Answer, ResponderError> {
            std::thread::sleep(Duration::from_millis(20));
            Ok(Answer {
                text: "slow".to_string(),
                evidence: EvidenceSource::none(),
                status: Status::Success,
            })
        }
    }

    struct BrokenResponder;

    impl Responder for BrokenResponder {
        fn answer(&self, _query: &str) -> Result<Answer, ResponderError> {
            Err(ResponderError::Unavailable("index offline".to_string()))
        }
    }

    #[test]
    fn test_latency_non_negative() {
        let timed = answer_timed(&KeywordResponder::nist(), "password").unwrap();
        assert!(timed.latency.as_secs_f64() >= 0.0);
    }

    #[test]
    fn test_latency_measures_call() {
        let timed = answer_timed(&SlowResponder, "anything").unwrap();
        assert!(timed.latency.as_secs_f64() >= 0.02);
    }

    #[test]
    fn test_error_propagates() {
        let err = answer_timed(&BrokenResponder, "anything").unwrap_err();
        assert!(matches!(err, ResponderError::Unavailable(_)));
    }

    #[test]
    fn test_works_through_trait_object() {
        let boxed: Box<dyn Responder> = Box::new(KeywordResponder::nist());
        let timed = answer_timed(boxed.as_ref(), "cake").unwrap();
        assert_eq!(timed.answer.status, Status::Refusal);
    }
}
