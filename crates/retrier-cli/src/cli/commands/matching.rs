//! `retrier match <text>`: dry-run the matcher.

use anyhow::Result;
use retrier_core::config::RetrierConfig;
use retrier_core::retry::{should_retry, Policy, PolicySetId};

pub(crate) fn describe_match(policies: &[Policy], code: u16, text: &str) -> String {
    match should_retry(policies, code, text) {
        Some(rule) => format!(
            "retry: delay={:.3}s limit={}",
            rule.delay.as_secs_f64(),
            rule.retry_limit
        ),
        None => "no retry".to_string(),
    }
}

pub fn run_match(
    cfg: &RetrierConfig,
    policy: Option<PolicySetId>,
    code: u16,
    text: &str,
) -> Result<()> {
    let policies = cfg.resolve_policies(policy);
    println!("{}", describe_match(&policies, code, text));
    Ok(())
}
