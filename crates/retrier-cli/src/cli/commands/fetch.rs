//! `retrier fetch <url>`: HTTP retry path over a libcurl GET.

use anyhow::{Context, Result};
use retrier_core::config::RetrierConfig;
use retrier_core::fetch;
use retrier_core::retry::{self, PolicySetId};
use std::io::Write;

pub fn run_fetch(cfg: &RetrierConfig, policy: Option<PolicySetId>, url: &str) -> Result<()> {
    let policies = cfg.resolve_policies(policy);
    let timeout = cfg.fetch_timeout();
    tracing::info!(url, policies = policies.len(), "fetch");

    let resp = retry::execute_http(&policies, || fetch::get(url, timeout))
        .with_context(|| format!("GET {}", url))?;
    tracing::info!(url, code = resp.code, bytes = resp.body.len(), "fetch succeeded");

    let mut out = std::io::stdout().lock();
    out.write_all(&resp.body)?;
    out.flush()?;
    Ok(())
}
