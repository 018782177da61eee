use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_recommendation::availability::PartnershipClient;
use trip_recommendation::config::Config;
use trip_recommendation::recommendation::RecommendationService;
use trip_recommendation::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env();

    let http = reqwest::Client::builder()
        .user_agent("trip-recommendation/0.1")
        .build()
        .context("failed to build http client")?;
    let partnerships = PartnershipClient::new(http, cfg.partner_base_url.clone())
        .context("failed to create partnership client")?;
    let svc = Arc::new(RecommendationService::new(partnerships));

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    tracing::info!(
        addr = %cfg.listen_addr,
        partner = %cfg.partner_base_url,
        "serving recommendations"
    );
    axum::serve(listener, server::router(svc))
        .await
        .context("server exited")?;

    Ok(())
}
