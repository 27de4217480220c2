use super::catalog::canonical_reason;
use super::error::UnknownPolicySet;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A single retry rule: an error signature paired with a fixed delay and a
/// retry limit.
///
/// A `code` of 0 means "no numeric code"; such a policy is only selected by
/// its text signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    code: u16,
    signature: String,
    delay: Duration,
    retry_limit: u32,
}

impl Policy {
    /// Policy matched on the failure text only.
    pub fn new(signature: impl Into<String>, delay: Duration, retry_limit: u32) -> Self {
        Self::with_code(0, signature, delay, retry_limit)
    }

    /// Policy carrying a numeric code (e.g. an HTTP status) and its text.
    pub fn with_code(
        code: u16,
        signature: impl Into<String>,
        delay: Duration,
        retry_limit: u32,
    ) -> Self {
        Self {
            code,
            signature: signature.into(),
            delay,
            retry_limit,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    pub(crate) fn rule(&self) -> RetryRule {
        RetryRule {
            delay: self.delay,
            retry_limit: self.retry_limit,
        }
    }
}

/// Delay and limit taken from the policy that matched a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryRule {
    pub delay: Duration,
    pub retry_limit: u32,
}

/// Predefined policy sets known to the catalog.
///
/// Adding a variant requires a matching arm in [`super::policies`].
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySetId {
    /// Matches HTTP status codes (503, 408).
    Http,
    /// Matches timeout phrases in an error message.
    #[default]
    Standard,
}

impl PolicySetId {
    pub const ALL: [PolicySetId; 2] = [PolicySetId::Http, PolicySetId::Standard];

    pub fn name(self) -> &'static str {
        match self {
            PolicySetId::Http => "http",
            PolicySetId::Standard => "standard",
        }
    }
}

impl fmt::Display for PolicySetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicySetId {
    type Err = UnknownPolicySet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" | "httppolicy" => Ok(PolicySetId::Http),
            "standard" | "standardpolicy" => Ok(PolicySetId::Standard),
            _ => Err(UnknownPolicySet(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PolicySetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Response shape inspected by the HTTP retry path.
pub trait HttpResponse {
    fn status_code(&self) -> u16;
    fn status_text(&self) -> &str;
}

/// Bare status line, for hosts that only need the code and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub code: u16,
    pub status: String,
}

impl StatusResponse {
    /// Status with its canonical reason phrase as text.
    pub fn from_code(code: u16) -> Self {
        Self {
            code,
            status: canonical_reason(code).to_string(),
        }
    }
}

impl HttpResponse for StatusResponse {
    fn status_code(&self) -> u16 {
        self.code
    }

    fn status_text(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_set_id_parses_short_and_long_names() {
        assert_eq!("http".parse::<PolicySetId>().unwrap(), PolicySetId::Http);
        assert_eq!("HTTPPolicy".parse::<PolicySetId>().unwrap(), PolicySetId::Http);
        assert_eq!(" Standard ".parse::<PolicySetId>().unwrap(), PolicySetId::Standard);
        assert_eq!(
            "standardpolicy".parse::<PolicySetId>().unwrap(),
            PolicySetId::Standard
        );
    }

    #[test]
    fn policy_set_id_rejects_unknown_names() {
        let err = "grpc".parse::<PolicySetId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown policy set: grpc");
    }

    #[test]
    fn policy_set_id_display_roundtrips() {
        for id in PolicySetId::ALL {
            assert_eq!(id.to_string().parse::<PolicySetId>().unwrap(), id);
        }
    }

    #[test]
    fn text_only_policy_has_no_code() {
        let p = Policy::new("timed out", Duration::from_millis(10), 2);
        assert_eq!(p.code(), 0);
        assert_eq!(p.signature(), "timed out");
        assert_eq!(p.rule(), RetryRule { delay: Duration::from_millis(10), retry_limit: 2 });
    }

    #[test]
    fn status_response_uses_canonical_text() {
        let r = StatusResponse::from_code(408);
        assert_eq!(r.status_code(), 408);
        assert_eq!(r.status_text(), "Request Timeout");
    }
}
