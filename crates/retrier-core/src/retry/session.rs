//! Attempt bookkeeping shared by the blocking and async engines.

use super::matcher::should_retry;
use super::policy::Policy;
use std::time::Duration;

/// Retry state for one engine invocation.
///
/// `attempt` starts at 1 and is bumped every time a retry is granted, so the
/// n-th call to [`RetrySession::next_delay`] compares `n` against the matched
/// policy's limit.
pub(crate) struct RetrySession<'p> {
    policies: &'p [Policy],
    attempt: u32,
}

impl<'p> RetrySession<'p> {
    pub(crate) fn new(policies: &'p [Policy]) -> Self {
        Self {
            policies,
            attempt: 1,
        }
    }

    /// Decide whether the observed failure earns another invocation.
    ///
    /// Returns the delay to wait before re-invoking, or `None` when the
    /// failure is final (no policy matched, or the limit is used up).
    pub(crate) fn next_delay(&mut self, code: u16, text: &str) -> Option<Duration> {
        let Some(rule) = should_retry(self.policies, code, text) else {
            tracing::debug!(code, text, "no retry policy matched");
            return None;
        };
        if self.attempt > rule.retry_limit {
            tracing::warn!(
                code,
                text,
                retries = rule.retry_limit,
                "retry limit exhausted"
            );
            return None;
        }
        tracing::debug!(
            attempt = self.attempt,
            limit = rule.retry_limit,
            delay_ms = rule.delay.as_millis() as u64,
            code,
            text,
            "retrying after failure"
        );
        self.attempt = self.attempt.saturating_add(1);
        Some(rule.delay)
    }
}
