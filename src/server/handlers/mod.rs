use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::server::AppState;

mod chat;
mod data_feed;
mod health;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ask-tessa", post(chat::ask_tessa))
        .route("/data.json", get(data_feed::data_json))
        .route("/health", get(health::health))
}
