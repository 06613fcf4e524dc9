use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use catalog::{catalog_service::CatalogService, domain::Identity, store::SeaOrmCatalogRepository};
use configs::{AppConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Make sure the stub identity's organization and user rows exist so catalog writes
/// satisfy their foreign keys.
pub async fn seed_identity(db: &DatabaseConnection, identity: Identity) -> anyhow::Result<()> {
    models::organization::ensure(db, identity.organization_id, "Default Organization").await?;
    let email = format!("user_{}@catalog.local", identity.user_id);
    models::user::ensure(db, identity.user_id, identity.organization_id, &email, "Default User").await?;
    Ok(())
}

/// Connect with pool settings and apply all pending migrations.
pub async fn bootstrap_db(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_env(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    models::db::migrate(&db).await?;
    info!("migrations applied");
    Ok(db)
}

pub fn build_state(db: DatabaseConnection, identity: Identity) -> ServerState {
    let repo = Arc::new(SeaOrmCatalogRepository::new(db));
    ServerState { catalog: CatalogService::new(repo), identity }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: bootstrap storage, build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let identity = Identity {
        user_id: cfg.identity.user_id,
        organization_id: cfg.identity.organization_id,
    };

    let db = bootstrap_db(&cfg.database).await?;
    seed_identity(&db, identity).await?;

    let app: Router = routes::build_router(build_state(db, identity), build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting service catalog");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
