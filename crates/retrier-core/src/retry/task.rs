//! Async retry loops. Same decisions as the blocking engine; the delay is a
//! `tokio::time::sleep` await point instead of a thread sleep, and attempts
//! never overlap.

use super::catalog::policies;
use super::error::HttpRetryError;
use super::policy::{HttpResponse, Policy, PolicySetId};
use super::run::{is_success, status_error};
use super::session::RetrySession;
use std::fmt;
use std::future::Future;

/// Async counterpart of [`super::execute`].
pub async fn execute_async<T, E, F, Fut>(policies: &[Policy], mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut err = match op().await {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };
    let first_text = err.to_string();
    let mut session = RetrySession::new(policies);
    while let Some(delay) = session.next_delay(0, &first_text) {
        tokio::time::sleep(delay).await;
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) => err = e,
        }
    }
    Err(err)
}

/// Async counterpart of [`super::execute_http`].
pub async fn execute_http_async<R, E, F, Fut>(
    policies: &[Policy],
    mut op: F,
) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: HttpResponse,
{
    let mut resp = op().await.map_err(HttpRetryError::Transport)?;
    if resp.status_code() < 300 {
        return Ok(resp);
    }
    let mut session = RetrySession::new(policies);
    while let Some(delay) = session.next_delay(resp.status_code(), resp.status_text()) {
        tokio::time::sleep(delay).await;
        resp = op().await.map_err(HttpRetryError::Transport)?;
        if is_success(resp.status_code()) {
            return Ok(resp);
        }
    }
    Err(status_error(&resp))
}

/// [`execute_async`] with a predefined policy set.
pub async fn execute_with_policy_set_async<T, E, F, Fut>(id: PolicySetId, op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    execute_async(&policies(id), op).await
}

/// [`execute_async`] with the standard (timeout phrase) policy set.
pub async fn execute_default_async<T, E, F, Fut>(op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    execute_with_policy_set_async(PolicySetId::Standard, op).await
}

/// [`execute_http_async`] with a predefined policy set.
pub async fn execute_http_with_policy_set_async<R, E, F, Fut>(
    id: PolicySetId,
    op: F,
) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: HttpResponse,
{
    execute_http_async(&policies(id), op).await
}

/// [`execute_http_async`] with the standard policy set, which only retries
/// statuses whose text contains a timeout phrase.
pub async fn execute_http_default_async<R, E, F, Fut>(op: F) -> Result<R, HttpRetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: HttpResponse,
{
    execute_http_with_policy_set_async(PolicySetId::Standard, op).await
}
