//! Generic HTTP fetching with authentication, retry and error classification

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{AUTH_HEADER, retry};
use crate::error::AppError;

/// Fetches `url` and decodes the body as `T`.
///
/// - Sends the API token in the `X-Auth-Token` header
/// - Retries timeouts, connection failures, 429 and 5xx responses with
///   exponential backoff, at most [`retry::MAX_RETRIES`] times
/// - Respects `Retry-After` on retryable responses, capped at
///   [`retry::MAX_DELAY_SECONDS`]
/// - Resolves to [`AppError::Cancelled`] as soon as `cancel` fires, including
///   while waiting between attempts
///
/// Exactly one value or one error is produced per call.
#[instrument(skip(client, token, cancel))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
    cancel: &CancellationToken,
) -> Result<T, AppError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("Request to {url} cancelled");
            Err(AppError::cancelled(url))
        }
        result = fetch_with_retry(client, url, token) => result,
    }
}

async fn fetch_with_retry<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let (err, wait) = match client.get(url).header(AUTH_HEADER, token).send().await {
            Ok(resp) if resp.status().is_success() => break resp,
            Ok(resp) => {
                let status = resp.status();
                let reason = status.canonical_reason().unwrap_or("Unknown error");
                let wait = retry_after(&resp).unwrap_or(backoff);
                (status_error(status.as_u16(), reason, url), wait)
            }
            Err(e) => (transport_error(e, url), backoff),
        };

        if !err.is_retryable() || attempt >= retry::MAX_RETRIES {
            error!("Request failed for URL {}: {}", url, err);
            return Err(err);
        }

        attempt += 1;
        warn!(
            "{}. Retrying in {:?} (attempt {}/{})",
            err,
            wait,
            attempt,
            retry::MAX_RETRIES
        );
        tokio::time::sleep(wait).await;
        backoff = backoff.saturating_mul(2);
    };

    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    decode_body(&response_text, url)
}

/// Maps a failed send onto the error taxonomy
fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs.min(retry::MAX_DELAY_SECONDS)))
}

/// Maps a non-2xx status onto the error taxonomy
pub(super) fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        401 | 403 => AppError::api_unauthorized(status_code, url),
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        500..=599 => AppError::api_server_error(status_code, reason, url),
        _ => AppError::api_client_error(status_code, reason, url),
    }
}

/// Decodes a response body, telling apart empty, non-JSON and wrongly shaped bodies
pub(super) fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
