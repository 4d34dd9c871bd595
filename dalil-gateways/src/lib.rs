//! HTTP clients for the external services Dalil depends on.
//!
//! All clients are blocking and must be called from a context
//! that allows blocking, e.g. `tokio::task::spawn_blocking`.

pub mod audio_hosting;
pub mod image_hosting;
pub mod nominatim;
pub mod notify;
pub mod retry;
pub mod video_hosting;

use thiserror::Error;

/// An error response of a remote service.
#[derive(Debug, Error)]
#[error("{service} responded with status {status}: {body}")]
pub struct ResponseError {
    pub service: &'static str,
    pub status: reqwest::StatusCode,
    pub body: String,
}

fn check_response(
    service: &'static str,
    response: reqwest::blocking::Response,
) -> anyhow::Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    log::warn!("{service} request failed with status {status}");
    Err(ResponseError {
        service,
        status,
        body,
    }
    .into())
}
