//! Match an observed failure signature against a policy set.

use super::policy::{Policy, RetryRule};

/// Returns the rule of the first policy matching the observed failure, or
/// `None` when nothing in `policies` applies.
///
/// A policy matches when its code and signature both equal the observed
/// values, or when the lowercased `text` contains the lowercased signature.
/// An empty signature is contained in every text, so such a policy matches
/// everything.
pub fn should_retry(policies: &[Policy], code: u16, text: &str) -> Option<RetryRule> {
    let lowered = text.to_lowercase();
    policies
        .iter()
        .find(|p| {
            (p.code() == code && p.signature() == text)
                || lowered.contains(&p.signature().to_lowercase())
        })
        .map(Policy::rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::{policies, PolicySetId};
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_set_never_matches() {
        assert_eq!(should_retry(&[], 503, "Service Unavailable"), None);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let set = policies(PolicySetId::Standard);
        let rule = should_retry(&set, 0, "dial tcp: Connection TIMED OUT").unwrap();
        assert_eq!(rule.delay, Duration::from_secs(2));
        assert_eq!(rule.retry_limit, 3);
        assert!(should_retry(&set, 0, "read: TimedOut").is_some());
        assert!(should_retry(&set, 0, "disk full").is_none());
    }

    #[test]
    fn first_matching_policy_wins() {
        let set = vec![
            Policy::new("refused", ms(10), 1),
            Policy::new("timed out", ms(20), 2),
            Policy::new("out", ms(30), 3),
        ];
        let rule = should_retry(&set, 0, "request timed out").unwrap();
        assert_eq!(rule, RetryRule { delay: ms(20), retry_limit: 2 });
    }

    #[test]
    fn http_set_matches_on_status_text() {
        let set = policies(PolicySetId::Http);
        assert!(should_retry(&set, 408, "Request Timeout").is_some());
        assert!(should_retry(&set, 503, "503 Service Unavailable").is_some());
        assert!(should_retry(&set, 500, "Internal Server Error").is_none());
    }

    #[test]
    fn code_alone_does_not_match() {
        let set = vec![Policy::with_code(503, "Service Unavailable", ms(5), 1)];
        assert!(should_retry(&set, 503, "Unavailable").is_none());
    }

    #[test]
    fn exact_code_and_text_match() {
        let set = vec![Policy::with_code(599, "", ms(5), 1)];
        assert!(should_retry(&set, 599, "").is_some());
    }

    #[test]
    fn empty_signature_matches_everything() {
        let set = vec![
            Policy::with_code(418, "", ms(1), 7),
            Policy::new("timed out", ms(2), 1),
        ];
        let rule = should_retry(&set, 0, "timed out").unwrap();
        assert_eq!(rule.retry_limit, 7);
        assert!(should_retry(&set, 200, "anything at all").is_some());
    }
}
