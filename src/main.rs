use anyhow::Result;
use publishing_core::application::{ports::time::Clock, services::ApplicationServices};
use publishing_core::config::AppConfig;
use publishing_core::domain::{
    content::{ContentReadRepository, ContentWriteRepository},
    review::{InstructorRepository, ReviewRepository},
    taxonomy::TermRepository,
};
use publishing_core::infrastructure::{
    database,
    repositories::{
        PostgresContentReadRepository, PostgresContentWriteRepository,
        PostgresInstructorRepository, PostgresReviewRepository, PostgresTermRepository,
    },
    time::SystemClock,
};
use publishing_core::presentation::http::{
    routes::{RouterOptions, build_router_with},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` as well, so RUST_LOG from that file reaches the filter.
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let content_write_repo: Arc<dyn ContentWriteRepository> =
        Arc::new(PostgresContentWriteRepository::new(pool.clone()));
    let content_read_repo: Arc<dyn ContentReadRepository> =
        Arc::new(PostgresContentReadRepository::new(pool.clone()));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(PostgresReviewRepository::new(pool.clone()));
    let instructor_repo: Arc<dyn InstructorRepository> =
        Arc::new(PostgresInstructorRepository::new(pool.clone()));
    let term_repo: Arc<dyn TermRepository> = Arc::new(PostgresTermRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        content_write_repo,
        content_read_repo,
        review_repo,
        instructor_repo,
        term_repo,
        clock,
        config.slug_max_attempts(),
    ));

    let state = HttpState { services };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };
    let app = build_router_with(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        rate_limit = options.rate_limit,
        slug_max_attempts = config.slug_max_attempts(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
