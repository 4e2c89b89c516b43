//! # Rollcall DB
//!
//! The [`ClassroomStore`] trait and its two implementations:
//!
//! - [`PgStore`]: PostgreSQL via SQLx, with uniqueness enforced by
//!   constraints and `ON CONFLICT DO NOTHING`
//! - [`MemoryStore`]: a lock-guarded in-process store for tests and demos
//!
//! # Example
//!
//! ```ignore
//! use rollcall_db::{PgStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let store = PgStore::new(pool);
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use sqlx::PgPool;
pub use store::{ClassroomStore, StoreError};

static MIGRATOR: Migrator = sqlx::migrate!();

/// Connects a PostgreSQL pool.
///
/// Should be called once at startup; the pool is cheaply cloneable.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Applies the embedded migrations in `crates/rollcall-db/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
