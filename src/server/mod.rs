pub mod chat_request;
pub mod handlers;
pub(crate) mod provider_dispatch;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;

use crate::config::Settings;
use crate::error::Result as AppResult;
use crate::http_client;

// Matches the JSON body bound the frontend was built against.
const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub chat_client: reqwest::Client,
    pub feed_client: reqwest::Client,
}

pub(crate) fn build_app_state(settings: Settings) -> AppResult<AppState> {
    let feed_timeout = Duration::from_secs(settings.data_feed.timeout_secs);
    Ok(AppState {
        chat_client: http_client::chat_client(),
        feed_client: http_client::data_feed_client(feed_timeout)?,
        settings,
    })
}

pub fn create_app(settings: Settings) -> AppResult<Router> {
    let app_state = build_app_state(settings)?;

    let mut app = handlers::routes()
        .with_state(Arc::new(app_state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    // CORS is the reason this relay exists; reflect whatever origin the
    // frontend is served from.
    use axum::http::{Method, header};
    use tower_http::cors::{AllowOrigin, CorsLayer};
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::mirror_request());
    app = app.layer(cors);
    app = app.layer(tower_http::trace::TraceLayer::new_for_http());

    Ok(app)
}
