//! Sends the status mutation and routes the outcome to a sink.

use reqwest::Client;
use serde_json::Value;

use crate::{InvokeError, MutationRequest, OutputSink};

/// Issues `request` once and parses the response body as JSON.
///
/// The HTTP status is not inspected: any body that parses as JSON is a
/// success, including GraphQL error documents returned with a 4xx/5xx.
pub async fn invoke(client: &Client, request: &MutationRequest) -> Result<Value, InvokeError> {
    tracing::debug!(endpoint = request.endpoint(), "sending changeUserStatus mutation");

    let response = client
        .post(request.endpoint())
        .headers(request.headers().clone())
        .body(request.body().to_owned())
        .send()
        .await?;

    tracing::info!(status = %response.status(), "received response");

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Runs the mutation and emits the parsed response, or the error, to `sink`.
///
/// Exactly one request is made. Errors stop here and are never retried.
pub async fn send_status_mutation<S>(client: &Client, request: &MutationRequest, sink: &S)
where
    S: OutputSink + ?Sized,
{
    match invoke(client, request).await {
        Ok(value) => sink.emit(&value),
        Err(e) => sink.emit_error(&e),
    }
}
