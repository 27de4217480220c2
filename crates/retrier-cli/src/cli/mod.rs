//! CLI for the retrier policy-driven retry engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use retrier_core::config;
use retrier_core::retry::PolicySetId;
use std::path::PathBuf;

use commands::{run_exec, run_fetch, run_match, run_policies};

/// Top-level CLI for retrier.
#[derive(Debug, Parser)]
#[command(name = "retrier")]
#[command(about = "retrier: re-run failing operations according to retry policies", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/retrier/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a program, retrying when its stderr matches a policy.
    Exec {
        /// Policy set to use ("standard" or "http"); defaults to the configured policies.
        #[arg(long, value_name = "SET")]
        policy: Option<PolicySetId>,
        /// Program and arguments (put them after `--`).
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// GET a URL, retrying on HTTP statuses that match a policy.
    Fetch {
        /// Policy set to use ("standard" or "http"); defaults to the configured policies.
        #[arg(long, value_name = "SET")]
        policy: Option<PolicySetId>,
        /// HTTP/HTTPS URL to fetch.
        url: String,
    },

    /// Print the policies that would be used.
    Policies {
        /// Policy set to print; defaults to the configured policies.
        #[arg(long, value_name = "SET")]
        policy: Option<PolicySetId>,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show which policy (if any) matches an observed failure.
    Match {
        /// Policy set to match against; defaults to the configured policies.
        #[arg(long, value_name = "SET")]
        policy: Option<PolicySetId>,
        /// Numeric code of the failure (e.g. HTTP status); 0 if none.
        #[arg(long, default_value_t = 0)]
        code: u16,
        /// Failure text (error message or status text).
        text: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Exec { policy, command } => run_exec(&cfg, policy, &command)?,
            CliCommand::Fetch { policy, url } => run_fetch(&cfg, policy, &url)?,
            CliCommand::Policies { policy, json } => run_policies(&cfg, policy, json)?,
            CliCommand::Match { policy, code, text } => run_match(&cfg, policy, code, &text)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
