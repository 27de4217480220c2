//! Blocking retry loops: re-invoke an operation until it succeeds or the
//! policy set says stop. Sleeps on the caller's thread between attempts.

use super::catalog::policies;
use super::error::HttpRetryError;
use super::policy::{HttpResponse, Policy, PolicySetId};
use super::session::RetrySession;
use std::fmt;
use std::time::Duration;

/// Runs `op`, retrying failures that match `policies`.
///
/// Every retry decision matches against the text of the *first* failure;
/// later failures only replace the error that is eventually returned.
pub fn execute<T, E, F>(policies: &[Policy], op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    run_with_sleep(policies, op, std::thread::sleep)
}

/// [`execute`] with a predefined policy set.
pub fn execute_with_policy_set<T, E, F>(id: PolicySetId, op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    execute(&policies(id), op)
}

/// [`execute`] with the standard (timeout phrase) policy set.
pub fn execute_default<T, E, F>(op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    execute_with_policy_set(PolicySetId::Standard, op)
}

/// Runs an HTTP-style `op`, retrying non-success statuses that match `policies`.
///
/// Transport errors are returned at once. Unlike [`execute`], each retry
/// decision looks at the most recent response.
pub fn execute_http<R, E, F>(policies: &[Policy], op: F) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Result<R, E>,
    R: HttpResponse,
{
    run_http_with_sleep(policies, op, std::thread::sleep)
}

/// [`execute_http`] with a predefined policy set.
pub fn execute_http_with_policy_set<R, E, F>(
    id: PolicySetId,
    op: F,
) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Result<R, E>,
    R: HttpResponse,
{
    execute_http(&policies(id), op)
}

/// [`execute_http`] with the standard policy set, which only retries statuses
/// whose text contains a timeout phrase.
pub fn execute_http_default<R, E, F>(op: F) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Result<R, E>,
    R: HttpResponse,
{
    execute_http_with_policy_set(PolicySetId::Standard, op)
}

pub(crate) fn run_with_sleep<T, E, F, S>(policies: &[Policy], mut op: F, mut sleep: S) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
    S: FnMut(Duration),
{
    let mut err = match op() {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };
    let first_text = err.to_string();
    let mut session = RetrySession::new(policies);
    while let Some(delay) = session.next_delay(0, &first_text) {
        sleep(delay);
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => err = e,
        }
    }
    Err(err)
}

pub(crate) fn run_http_with_sleep<R, E, F, S>(
    policies: &[Policy],
    mut op: F,
    mut sleep: S,
) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Result<R, E>,
    R: HttpResponse,
    S: FnMut(Duration),
{
    let mut resp = op().map_err(HttpRetryError::Transport)?;
    if resp.status_code() < 300 {
        return Ok(resp);
    }
    let mut session = RetrySession::new(policies);
    while let Some(delay) = session.next_delay(resp.status_code(), resp.status_text()) {
        sleep(delay);
        resp = op().map_err(HttpRetryError::Transport)?;
        if is_success(resp.status_code()) {
            return Ok(resp);
        }
    }
    Err(status_error(&resp))
}

/// Success range for re-invocations. The initial call also accepts 1xx.
pub(crate) fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

pub(crate) fn status_error<R: HttpResponse, E>(resp: &R) -> HttpRetryError<E> {
    HttpRetryError::Status {
        code: resp.status_code(),
        status: resp.status_text().to_string(),
    }
}
