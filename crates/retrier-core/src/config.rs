use crate::retry::{policies, Policy, PolicySetId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One custom policy (a `[[policies]]` table in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Numeric code (e.g. HTTP status); 0 or absent means text-only.
    #[serde(default)]
    pub code: u16,
    /// Case-insensitive substring looked for in the failure text.
    pub signature: String,
    /// Fixed delay before each retry, in seconds (e.g. 0.5 = 500ms).
    pub delay_secs: f64,
    /// Maximum number of retries after the first failure.
    pub retry_limit: u32,
}

impl PolicyConfig {
    /// Negative, NaN or out-of-range delays become zero.
    pub fn to_policy(&self) -> Policy {
        let delay = if self.delay_secs.is_finite() && self.delay_secs > 0.0 {
            Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        };
        Policy::with_code(self.code, self.signature.clone(), delay, self.retry_limit)
    }
}

impl From<&Policy> for PolicyConfig {
    fn from(p: &Policy) -> Self {
        Self {
            code: p.code(),
            signature: p.signature().to_string(),
            delay_secs: p.delay().as_secs_f64(),
            retry_limit: p.retry_limit(),
        }
    }
}

/// Global configuration loaded from `~/.config/retrier/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrierConfig {
    /// Catalog set used when no set is named on the command line.
    #[serde(default)]
    pub default_policy_set: PolicySetId,
    /// Overall libcurl timeout for one GET, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Custom policies; when non-empty they replace the default catalog set.
    #[serde(default)]
    pub policies: Vec<PolicyConfig>,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for RetrierConfig {
    fn default() -> Self {
        Self {
            default_policy_set: PolicySetId::Standard,
            fetch_timeout_secs: default_fetch_timeout_secs(),
            policies: Vec::new(),
        }
    }
}

impl RetrierConfig {
    /// Policy set to run with: an explicitly named catalog set wins, then the
    /// custom policies, then the configured default set.
    pub fn resolve_policies(&self, explicit: Option<PolicySetId>) -> Vec<Policy> {
        if let Some(id) = explicit {
            return policies(id);
        }
        if !self.policies.is_empty() {
            return self.policies.iter().map(PolicyConfig::to_policy).collect();
        }
        policies(self.default_policy_set)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrier")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RetrierConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RetrierConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<RetrierConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RetrierConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
