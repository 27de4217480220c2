//! Built-in policy sets and the HTTP reason-phrase table they are keyed on.

use super::policy::{Policy, PolicySetId};
use std::time::Duration;

const CATALOG_DELAY: Duration = Duration::from_secs(2);
const CATALOG_RETRY_LIMIT: u32 = 3;

/// Returns a fresh copy of the predefined policy set for `id`.
pub fn policies(id: PolicySetId) -> Vec<Policy> {
    match id {
        PolicySetId::Http => [503u16, 408]
            .into_iter()
            .map(|code| {
                Policy::with_code(code, canonical_reason(code), CATALOG_DELAY, CATALOG_RETRY_LIMIT)
            })
            .collect(),
        PolicySetId::Standard => ["timedout", "timed out"]
            .into_iter()
            .map(|sig| Policy::new(sig, CATALOG_DELAY, CATALOG_RETRY_LIMIT))
            .collect(),
    }
}

/// Looks up a policy set by name. Unknown names yield an empty set, so
/// nothing is ever retried.
pub fn policies_by_name(name: &str) -> Vec<Policy> {
    match name.parse::<PolicySetId>() {
        Ok(id) => policies(id),
        Err(e) => {
            tracing::debug!("{}; using empty policy set", e);
            Vec::new()
        }
    }
}

/// Canonical reason phrase for an HTTP status code, or "" if unknown.
pub fn canonical_reason(code: u16) -> &'static str {
    match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",

        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",

        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",

        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",

        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",

        _ => "",
    }
}
