use axum::{Json, extract::State, response::Response};
use std::sync::Arc;

use crate::error::RelayError;
use crate::server::AppState;
use crate::server::chat_request::ChatRequest;
use crate::server::provider_dispatch::call_upstream;

pub async fn ask_tessa(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, RelayError> {
    let response = call_upstream(
        &app_state.chat_client,
        &app_state.settings.upstream,
        &request,
    )
    .await?;
    Ok(response)
}
