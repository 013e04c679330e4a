use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;

use crate::server::AppState;

const FEED_USER_AGENT: &str = "TessaProxy/1.0";

pub async fn data_json(State(app_state): State<Arc<AppState>>) -> Json<Value> {
    Json(fetch_data_feed(&app_state.feed_client, &app_state.settings.data_feed.url).await)
}

// Degrades to an empty array on any upstream failure; this endpoint never
// returns an error status.
async fn fetch_data_feed(client: &reqwest::Client, url: &str) -> Value {
    tracing::info!("Fetching transfer tax data...");

    let response = match client
        .get(url)
        .header("User-Agent", FEED_USER_AGENT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Transfer tax data error: {}", e);
            return Value::Array(Vec::new());
        }
    };

    if !response.status().is_success() {
        tracing::error!("Transfer tax source returned {}", response.status().as_u16());
        return Value::Array(Vec::new());
    }

    match response.json::<Value>().await {
        Ok(data) => {
            if let Value::Array(entries) = &data {
                tracing::info!("Transfer tax data loaded: {} entries", entries.len());
            }
            data
        }
        Err(e) => {
            tracing::error!("Transfer tax data error: {}", e);
            Value::Array(Vec::new())
        }
    }
}
