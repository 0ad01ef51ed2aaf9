mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    startup::{connect_to_database, init_tracing, setup_cors, shutdown_signal},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let db = connect_to_database(&config).await?;

    let app = router()
        .layer(setup_cors(&config))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db, config.avatar_base_url.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
