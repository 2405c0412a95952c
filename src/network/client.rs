//! HTTP client wrapper - the transport boundary
//!
//! Takes a `RequestDescriptor`, performs the call and reports either the
//! response body or a transport error. The connection is scoped to the call.

use std::time::{Duration, Instant};

use reqwest::Method;

use crate::error::{Error, Result};
use crate::messages::NetworkResponse;
use crate::models::RequestDescriptor;

/// Build a reqwest request from a descriptor
pub fn build_request(client: &reqwest::Client, request: &RequestDescriptor) -> Result<reqwest::RequestBuilder> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|_| Error::Transport(format!("Invalid method: {}", request.method)))?;

    let mut req_builder = client.request(method, &request.url);

    for (key, value) in &request.headers {
        req_builder = req_builder.header(key, value);
    }

    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    Ok(req_builder)
}

/// Perform the call. Never fails outright; transport problems come back as
/// `NetworkResponse::Error` so the session can render them.
pub async fn execute_request(
    client: &reqwest::Client,
    request: RequestDescriptor,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    match send(client, &request).await {
        Ok((status, body)) => NetworkResponse::Success {
            id: request_id,
            status,
            body,
            time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => NetworkResponse::Error {
            id: request_id,
            message: e.to_string(),
            time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

async fn send(client: &reqwest::Client, request: &RequestDescriptor) -> Result<(u16, String)> {
    let resp = build_request(client, request)?
        .send()
        .await
        .map_err(transport_error)?;
    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| Error::Transport(format!("Error reading body: {}", e)))?;
    Ok((status, body))
}

fn transport_error(e: reqwest::Error) -> Error {
    let msg = if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    };
    Error::Transport(msg)
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(%e, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}
