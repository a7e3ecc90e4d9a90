//! # Keyword Responder (Placeholder)
//!
//! A deterministic stand-in for evidence retrieval. Each query is tested
//! against an ordered list of substring rules; the first rule with a
//! matching keyword supplies the canned answer. Queries that match no rule
//! receive a generic identity-proofing answer with `Success` status.
//!
//! Keyword tests are case-sensitive substring checks, so `"AAL3"` matches
//! but `"aal3"` does not.
//!
//! ## Notice
//!
//! Answers are fixed strings citing NIST SP 800-63B. Nothing is retrieved,
//! and the cited pages are not checked. Replace with a retrieval-backed
//! [`Responder`] before relying on the findings.

use gg_core::{EvidenceSource, Status};

use crate::traits::{Answer, Responder, ResponderError};

/// One substring rule: any keyword match selects this answer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Case-sensitive substrings; a single hit is enough.
    pub keywords: &'static [&'static str],
    /// Finding returned on match.
    pub answer: &'static str,
    /// Citation returned on match, `"None"` for no evidence.
    pub evidence: &'static str,
    /// Outcome returned on match.
    pub status: Status,
}

impl KeywordRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }

    fn to_answer(self) -> Answer {
        Answer {
            text: self.answer.to_string(),
            evidence: EvidenceSource::cited(self.evidence),
            status: self.status,
        }
    }
}

/// The NIST SP 800-63B rule set, in priority order.
pub const NIST_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["AAL3", "requirements"],
        answer: "According to NIST SP 800-63B (Table 5-1), AAL3 requires a **hardware-based authenticator** and cryptographic resistance to verifier impersonation.",
        evidence: "nist_guidelines.pdf (Page 42), aal_table.png (Chart)",
        status: Status::Success,
    },
    KeywordRule {
        keywords: &["password"],
        answer: "Passwords must be salted and hashed using a suitable one-way key derivation function (NIST SP 800-63B, Section 5.1.1.2).",
        evidence: "nist_guidelines.pdf (Page 18)",
        status: Status::Success,
    },
    KeywordRule {
        keywords: &["cake"],
        answer: "I cannot answer this as it is not in the provided banking policy documents.",
        evidence: gg_core::record::NO_EVIDENCE,
        status: Status::Refusal,
    },
];

/// Answer used when no rule matches.
pub const NIST_FALLBACK: KeywordRule = KeywordRule {
    keywords: &[],
    answer: "Based on the provided context, I found relevant guidelines regarding identity proofing.",
    evidence: "nist_guidelines.pdf (General Context)",
    status: Status::Success,
};

/// First-match-wins keyword dispatch over a fixed rule list.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: &'static [KeywordRule],
    fallback: KeywordRule,
}

impl KeywordResponder {
    /// Build a responder over custom rules.
    pub fn new(rules: &'static [KeywordRule], fallback: KeywordRule) -> Self {
        Self { rules, fallback }
    }

    /// The NIST SP 800-63B placeholder rule set.
    pub fn nist() -> Self {
        Self::new(NIST_RULES, NIST_FALLBACK)
    }

    /// Select the rule for a query. Never fails.
    pub fn select(&self, query: &str) -> &KeywordRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(query))
            .unwrap_or(&self.fallback)
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::nist()
    }
}

impl Responder for KeywordResponder {
    fn answer(&self, query: &str) -> Result<Answer, ResponderError> {
        let rule = self.select(query);
        tracing::trace!(status = %rule.status, "keyword rule selected");
        Ok(rule.to_answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(q: &str) -> Answer {
        KeywordResponder::nist().answer(q).unwrap()
    }

    #[test]
    fn test_aal3_question() {
        let a = answer("What are the requirements for AAL3?");
        assert_eq!(a.status, Status::Success);
        assert!(a.evidence.as_str().contains("nist_guidelines.pdf (Page 42)"));
        assert!(a.text.contains("hardware-based authenticator"));
    }

    #[test]
    fn test_requirements_alone_matches_first_rule() {
        let a = answer("list the requirements");
        assert!(a.evidence.as_str().contains("Page 42"));
    }

    #[test]
    fn test_password_question() {
        let a = answer("how should a password be stored?");
        assert_eq!(a.status, Status::Success);
        assert_eq!(a.evidence.as_str(), "nist_guidelines.pdf (Page 18)");
    }

    #[test]
    fn test_cake_refused() {
        let a = answer("cake recipe");
        assert_eq!(a.status, Status::Refusal);
        assert!(a.evidence.is_none());
        assert_eq!(a.evidence.as_str(), "None");
    }

    #[test]
    fn test_first_match_wins() {
        // Both the AAL3 and cake rules match; the earlier rule takes it.
        let a = answer("AAL3 cake");
        assert_eq!(a.status, Status::Success);
        // Both password and cake: password rule is earlier.
        let b = answer("password cake");
        assert_eq!(b.evidence.as_str(), "nist_guidelines.pdf (Page 18)");
    }

    #[test]
    fn test_case_sensitive() {
        let a = answer("aal3 Cake PASSWORD");
        assert_eq!(a.evidence.as_str(), "nist_guidelines.pdf (General Context)");
        assert_eq!(a.status, Status::Success);
    }

    #[test]
    fn test_fallback() {
        let a = answer("identity proofing for remote onboarding");
        assert_eq!(a.status, Status::Success);
        assert_eq!(a.evidence.as_str(), "nist_guidelines.pdf (General Context)");
    }

    #[test]
    fn test_custom_rules() {
        static RULES: &[KeywordRule] = &[KeywordRule {
            keywords: &["kyc"],
            answer: "KYC answer",
            evidence: "kyc.pdf",
            status: Status::Success,
        }];
        let responder = KeywordResponder::new(RULES, NIST_FALLBACK);
        assert_eq!(responder.answer("kyc?").unwrap().text, "KYC answer");
        assert_eq!(
            responder.answer("cake").unwrap().status,
            Status::Success,
            "custom rule set has no refusal rule"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The responder is total: every input yields an answer with a known status.
        #[test]
        fn responder_is_total(query in ".*") {
            let a = KeywordResponder::nist().answer(&query);
            prop_assert!(a.is_ok());
            let a = a.unwrap();
            prop_assert!(Status::all().contains(&a.status));
            prop_assert!(!a.evidence.as_str().is_empty());
        }

        /// Refusal happens exactly when "cake" is the first rule to match.
        #[test]
        fn refusal_only_for_cake(query in "[a-zA-Z0-9 ?]{0,40}") {
            let a = KeywordResponder::nist().answer(&query).unwrap();
            let earlier = query.contains("AAL3")
                || query.contains("requirements")
                || query.contains("password");
            let expect_refusal = query.contains("cake") && !earlier;
            prop_assert_eq!(a.status == Status::Refusal, expect_refusal);
        }
    }
}
