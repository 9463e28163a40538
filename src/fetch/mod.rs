//! HTTP plumbing shared by upstream clients.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::TransitError;

/// Performs a GET and decodes the body with `decode`
/// (one of the [`crate::parser`] functions).
///
/// Anything other than `200 OK` is a failure; nothing is retried.
pub async fn fetch_json<C, T>(
    client: &C,
    url: Url,
    decode: fn(&[u8]) -> serde_json::Result<T>,
) -> Result<T, TransitError>
where
    C: HttpClient + ?Sized,
{
    let url_str = url.to_string();
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client
        .execute(req)
        .await
        .map_err(|source| TransitError::Transport {
            url: url_str.clone(),
            source,
        })?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(TransitError::Status {
            url: url_str,
            status: status.as_u16(),
        });
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|source| TransitError::Transport {
            url: url_str.clone(),
            source,
        })?;
    debug!(url = %url_str, bytes = bytes.len(), "Response received");

    decode(&bytes).map_err(|source| TransitError::Decode {
        url: url_str,
        source,
    })
}
