mod config;
mod error;
mod http_client;
mod providers;
mod server;

use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    fmt::init();

    let settings = config::Settings::load()?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let flavor = settings.upstream.flavor;
    let app = server::create_app(settings)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Tessa relay running on http://{} ({} upstream)", addr, flavor);

    axum::serve(listener, app).await?;

    Ok(())
}
