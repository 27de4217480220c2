//! Single HTTP GET via the curl crate (libcurl), shaped for the HTTP retry path.
//!
//! libcurl reports only the numeric status, so the status text is the
//! canonical reason phrase for that code.

use crate::retry::{canonical_reason, HttpResponse};
use std::time::Duration;

/// Status and body of one GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub code: u16,
    pub status: String,
    pub body: Vec<u8>,
}

impl HttpResponse for FetchResponse {
    fn status_code(&self) -> u16 {
        self.code
    }

    fn status_text(&self) -> &str {
        &self.status
    }
}

/// Performs one GET against `url`. Any curl failure (DNS, connect, timeout)
/// is returned as the error; HTTP error statuses are not errors here.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get(url: &str, timeout: Duration) -> Result<FetchResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(timeout.min(Duration::from_secs(15)))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = u16::try_from(easy.response_code()?).unwrap_or(0);
    tracing::debug!(url, code, bytes = body.len(), "GET finished");
    Ok(FetchResponse {
        code,
        status: canonical_reason(code).to_string(),
        body,
    })
}
