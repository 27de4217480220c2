//! `retrier exec -- <program> [args...]`: generic retry path over a child process.

use anyhow::{Context, Result};
use retrier_core::command;
use retrier_core::config::RetrierConfig;
use retrier_core::retry::{self, PolicySetId};
use std::io::Write;

pub fn run_exec(cfg: &RetrierConfig, policy: Option<PolicySetId>, argv: &[String]) -> Result<()> {
    let (program, args) = argv.split_first().context("missing program to run")?;
    let policies = cfg.resolve_policies(policy);
    tracing::info!(program = program.as_str(), policies = policies.len(), "exec");

    let stdout = retry::execute(&policies, || command::run_once(program, args))
        .with_context(|| format!("{} failed", program))?;

    let mut out = std::io::stdout().lock();
    out.write_all(&stdout)?;
    out.flush()?;
    Ok(())
}
