use std::sync::Arc;

use infobip_ext::server::{
    config::Config, data::store::SeaOrmStore, error::AppError, middleware::auth::AuthGuard,
    router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(
        Arc::new(SeaOrmStore::new(db)),
        AuthGuard::new(config.api_token),
    );
    let app = router::router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
