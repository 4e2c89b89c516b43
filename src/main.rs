use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use rollcall::logging::init_logging;
use rollcall::router::init_router;
use rollcall::state::AppState;
use rollcall_config::{CorsConfig, JwtConfig, PasswordConfig};
use rollcall_db::{ClassroomStore, MemoryStore, PgStore, init_db_pool, run_migrations};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "rollcall", version, about = "Classroom management API server")]
struct Cli {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    database_url: Option<String>,

    /// Keep all data in process memory instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,

    /// Apply pending migrations before serving
    #[arg(long)]
    migrate: bool,
}

async fn build_store(cli: &Cli) -> anyhow::Result<Arc<dyn ClassroomStore>> {
    if cli.in_memory {
        warn!("Using in-memory store; data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let database_url = cli
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;
    let pool = init_db_pool(database_url)
        .await
        .context("Failed to connect to database")?;

    if cli.migrate {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    Ok(Arc::new(PgStore::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    let jwt_config = JwtConfig::from_env()?;
    let state = AppState::new(
        build_store(&cli).await?,
        jwt_config,
        CorsConfig::from_env(),
        PasswordConfig::from_env(),
    );
    let app = init_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid HOST or PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Server running");
    info!("Swagger UI available at http://{addr}/swagger-ui");
    info!("Scalar UI available at http://{addr}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
