//! Schema migrations
//!
//! The SQL files under `migrations/` are compiled into the binary and applied
//! in version order by the sqlx migrator. Applied versions are tracked in
//! `_sqlx_migrations`, so running twice is a no-op.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::PgPool;

/// `(version, description, sql)` for every schema migration, oldest first
#[allow(clippy::unreadable_literal)]
const MIGRATIONS: &[(i64, &str, &str)] = &[
    (
        20240101000001,
        "create users",
        include_str!("../migrations/20240101000001_create_users.sql"),
    ),
    (
        20240101000002,
        "create blogs",
        include_str!("../migrations/20240101000002_create_blogs.sql"),
    ),
    (
        20240101000003,
        "create comments",
        include_str!("../migrations/20240101000003_create_comments.sql"),
    ),
    (
        20240101000004,
        "create reactions",
        include_str!("../migrations/20240101000004_create_reactions.sql"),
    ),
];

/// Migration source backed by the SQL embedded at compile time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

impl EmbeddedMigrations {
    /// Embedded migrations in version order
    pub fn migrations() -> Vec<Migration> {
        MIGRATIONS
            .iter()
            .map(|&(version, description, sql)| {
                Migration::new(
                    version,
                    Cow::Borrowed(description),
                    MigrationType::Simple,
                    Cow::Borrowed(sql),
                    false,
                )
            })
            .collect()
    }
}

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(self) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { Ok(Self::migrations()) })
    }
}

/// Apply all pending embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    tracing::info!(
        migrations = migrator.iter().count(),
        "Running database migrations"
    );

    migrator.run(pool).await?;

    tracing::info!("Database migrations complete");
    Ok(())
}
