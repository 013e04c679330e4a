use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::config::{ProviderFlavor, UpstreamConfig};
use crate::providers::{anthropic, openai};
use crate::server::chat_request::ChatRequest;

// One outbound call per inbound request, whichever flavor is configured.
pub async fn call_upstream(
    client: &reqwest::Client,
    upstream: &UpstreamConfig,
    request: &ChatRequest,
) -> Result<Response, reqwest::Error> {
    match upstream.flavor {
        ProviderFlavor::Anthropic => call_anthropic(client, upstream, request).await,
        ProviderFlavor::OpenAI => call_openai(client, upstream, request).await,
    }
}

async fn call_anthropic(
    client: &reqwest::Client,
    upstream: &UpstreamConfig,
    request: &ChatRequest,
) -> Result<Response, reqwest::Error> {
    let upstream_request = anthropic::build_messages_request(request, &upstream.model);
    let upstream_response = anthropic::send_messages(
        client,
        &upstream.base_url,
        &upstream.api_key,
        &upstream_request,
    )
    .await?;

    Ok(Json(anthropic::normalize_response(upstream_response)).into_response())
}

async fn call_openai(
    client: &reqwest::Client,
    upstream: &UpstreamConfig,
    request: &ChatRequest,
) -> Result<Response, reqwest::Error> {
    let upstream_request = openai::build_chat_completion_request(request, &upstream.model);
    let body = openai::send_chat_completions(
        client,
        &upstream.base_url,
        &upstream.api_key,
        &upstream_request,
    )
    .await?;

    Ok(Json(body).into_response())
}
