//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and Axum
//! server lifecycle.

use crate::application::services::{
    BadgeService, NoticeService, PassService, ReferenceService, StageService, UserService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgBadgeRepository, PgNoticeRepository, PgPassRepository, PgRecordStore, PgReferenceRepository,
    PgStageRepository, PgUserRepository,
};
use crate::infrastructure::storage::{DiskObjectStorage, ObjectStorage, UrlSigner};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Disk-backed media storage with URL signing
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let state = build_state(pool, &config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Wires repositories, storage, and services into the shared state.
pub fn build_state(pool: sqlx::PgPool, config: &Config) -> AppState {
    let pool = Arc::new(pool);

    let record_store: Arc<dyn crate::domain::repositories::RecordStore> =
        Arc::new(PgRecordStore::new(pool.clone()));

    let signer = UrlSigner::new(
        config.media_signing_secret.as_bytes().to_vec(),
        config.media_public_base.clone(),
    );
    let media: Arc<dyn ObjectStorage> =
        Arc::new(DiskObjectStorage::new(config.media_root.clone(), signer));

    let stage_repository = Arc::new(PgStageRepository::new(pool.clone()));
    let pass_repository = Arc::new(PgPassRepository::new(pool.clone()));
    let badge_repository = Arc::new(PgBadgeRepository::new(pool.clone()));
    let notice_repository = Arc::new(PgNoticeRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let reference_repository = Arc::new(PgReferenceRepository::new(pool.clone()));

    AppState {
        stage_service: Arc::new(StageService::new(stage_repository, record_store.clone())),
        pass_service: Arc::new(PassService::new(pass_repository, record_store.clone())),
        badge_service: Arc::new(BadgeService::new(
            badge_repository,
            record_store.clone(),
            media.clone(),
        )),
        notice_service: Arc::new(NoticeService::new(notice_repository, record_store.clone())),
        user_service: Arc::new(UserService::new(user_repository, record_store.clone())),
        reference_service: Arc::new(ReferenceService::new(reference_repository)),
        record_store,
        media,
        media_url_ttl: Duration::from_secs(config.media_url_ttl_seconds),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
