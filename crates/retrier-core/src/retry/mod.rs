//! Policy-driven retry.
//!
//! A failed operation is matched against an ordered policy set (first match
//! wins) by numeric code and case-insensitive text signature. A matching
//! policy supplies a fixed delay and a retry limit; the engine sleeps and
//! re-invokes until the operation succeeds, no policy matches, or the limit
//! is exhausted.

mod catalog;
mod error;
mod matcher;
mod policy;
mod run;
mod session;
mod task;

pub use catalog::{canonical_reason, policies, policies_by_name};
pub use error::{HttpRetryError, UnknownPolicySet};
pub use matcher::should_retry;
pub use policy::{HttpResponse, Policy, PolicySetId, RetryRule, StatusResponse};
pub use run::{
    execute, execute_default, execute_http, execute_http_default, execute_http_with_policy_set,
    execute_with_policy_set,
};
pub use task::{
    execute_async, execute_default_async, execute_http_async, execute_http_default_async,
    execute_http_with_policy_set_async, execute_with_policy_set_async,
};
