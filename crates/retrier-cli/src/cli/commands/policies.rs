//! `retrier policies`: print the effective policy set.

use anyhow::Result;
use retrier_core::config::{PolicyConfig, RetrierConfig};
use retrier_core::retry::{Policy, PolicySetId};

pub(crate) fn format_table(policies: &[Policy]) -> String {
    let mut out = format!(
        "  {:>4}  {:<24}  {:>9}  {:>5}\n",
        "Code", "Signature", "Delay(s)", "Limit"
    );
    out.push_str(&format!(
        "  {}  {}  {}  {}\n",
        "----", "------------------------", "---------", "-----"
    ));
    for p in policies {
        let code = if p.code() == 0 {
            "-".to_string()
        } else {
            p.code().to_string()
        };
        out.push_str(&format!(
            "  {:>4}  {:<24}  {:>9.3}  {:>5}\n",
            code,
            format!("{:?}", p.signature()),
            p.delay().as_secs_f64(),
            p.retry_limit()
        ));
    }
    out
}

pub fn run_policies(cfg: &RetrierConfig, policy: Option<PolicySetId>, json: bool) -> Result<()> {
    let policies = cfg.resolve_policies(policy);
    if json {
        let entries: Vec<PolicyConfig> = policies.iter().map(PolicyConfig::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if policies.is_empty() {
        println!("(no policies: nothing will be retried)");
    } else {
        print!("{}", format_table(&policies));
    }
    Ok(())
}
