/// Leaderboard Service - HTTP Server
///
/// Seeds an in-memory leaderboard, keeps scores moving with the simulator job,
/// and serves ranked listing, search and stats over HTTP.
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use anyhow::Context;
use leaderboard_service::{
    handlers, jobs::spawn_score_simulator, middleware::Logging, seed_competitors, Config,
    Leaderboard, ScoreSimulatorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bind_address = config.bind_address();

    info!(
        service = %config.service_name,
        address = %bind_address,
        seed_count = config.seed_count,
        "Starting leaderboard service"
    );

    let leaderboard = Arc::new(Leaderboard::with_capacity(config.seed_count));
    seed_competitors(
        &leaderboard,
        config.seed_count,
        &mut StdRng::from_entropy(),
    );

    let simulator = spawn_score_simulator(
        ScoreSimulatorConfig::from_config(&config),
        leaderboard.clone(),
    );

    let app_leaderboard = web::Data::from(leaderboard.clone());
    let server = HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::ORIGIN,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logging)
            .wrap(actix_middleware::NormalizePath::trim())
            .app_data(app_leaderboard.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!(address = %bind_address, "HTTP server listening");
    let result = server.run().await;

    simulator.abort();
    info!(
        total_users = leaderboard.total_count(),
        "Leaderboard service shutting down"
    );

    result.context("HTTP server error")
}
