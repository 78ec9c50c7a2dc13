//! PostgreSQL implementation of ReactionRepository
//!
//! Blog and comment reactions live in separate tables so each can cascade
//! from its own target. Identifiers below are static per [`TargetKind`]; only
//! values are bound.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use inkwell_core::entities::{Reaction, ReactionTally};
use inkwell_core::error::DomainError;
use inkwell_core::traits::{ReactionRepository, RepoResult, ToggleOutcome};
use inkwell_core::value_objects::{ReactionStatus, ReactionTarget, TargetKind};

use crate::mappers::reaction_from_model;
use crate::models::{ReactionModel, ReactionTallyModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// Table layout backing one target kind
struct ReactionTable {
    /// Reaction table
    table: &'static str,
    /// Column referencing the target
    target_column: &'static str,
    /// Table holding the targets
    target_table: &'static str,
}

const fn table_for(kind: TargetKind) -> ReactionTable {
    match kind {
        TargetKind::Blog => ReactionTable {
            table: "blog_reactions",
            target_column: "blog_id",
            target_table: "blogs",
        },
        TargetKind::Comment => ReactionTable {
            table: "comment_reactions",
            target_column: "comment_id",
            target_table: "comments",
        },
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_with_status(&self, target: ReactionTarget, status: ReactionStatus) -> RepoResult<i64> {
        let t = table_for(target.kind);
        let sql = format!(
            "SELECT COUNT(*) FROM {table} WHERE {col} = $1 AND status = $2",
            table = t.table,
            col = t.target_column,
        );

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(target.id)
            .bind(status.code())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self), fields(target = %target))]
    async fn toggle(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<ToggleOutcome> {
        let t = table_for(target.kind);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Hold the target for the rest of the transaction so a concurrent
        // delete cannot land between this check and the upsert
        let lock_sql = format!("SELECT 1 FROM {} WHERE id = $1 FOR KEY SHARE", t.target_table);
        let exists = sqlx::query_scalar::<_, i32>(&lock_sql)
            .bind(target.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if exists.is_none() {
            return Err(DomainError::target_not_found(target));
        }

        // Get-or-create and flip in one statement; the primary key on
        // (user_id, target) serializes concurrent first toggles
        let upsert_sql = format!(
            r"
            INSERT INTO {table} (user_id, {col}, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, {col}) DO UPDATE
            SET status = CASE WHEN {table}.status = $4 THEN $3 ELSE $4 END,
                updated_at = NOW()
            RETURNING status
            ",
            table = t.table,
            col = t.target_column,
        );
        let code = sqlx::query_scalar::<_, i16>(&upsert_sql)
            .bind(user_id)
            .bind(target.id)
            .bind(ReactionStatus::INITIAL.code())
            .bind(ReactionStatus::Neutral.code())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_foreign_key_violation(e, |_| DomainError::UserNotFound(user_id)))?;
        let status = ReactionStatus::try_from(code).map_err(DomainError::InvalidReactionStatus)?;

        let tally_sql = format!(
            r"
            SELECT $1::uuid AS target_id,
                   COUNT(*) FILTER (WHERE status = $2) AS likes,
                   COUNT(*) FILTER (WHERE status = $3) AS dislikes
            FROM {table}
            WHERE {col} = $1
            ",
            table = t.table,
            col = t.target_column,
        );
        let tally = sqlx::query_as::<_, ReactionTallyModel>(&tally_sql)
            .bind(target.id)
            .bind(ReactionStatus::Like.code())
            .bind(ReactionStatus::Dislike.code())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(%user_id, %status, like_count = tally.likes, "Reaction toggled");

        Ok(ToggleOutcome {
            status,
            tally: tally.into(),
        })
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn find(&self, user_id: Uuid, target: ReactionTarget) -> RepoResult<Option<Reaction>> {
        let t = table_for(target.kind);
        let sql = format!(
            r"
            SELECT user_id, {col} AS target_id, status, created_at, updated_at
            FROM {table}
            WHERE user_id = $1 AND {col} = $2
            ",
            table = t.table,
            col = t.target_column,
        );

        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(user_id)
            .bind(target.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result
            .map(|model| reaction_from_model(model, target.kind))
            .transpose()
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn count_likes(&self, target: ReactionTarget) -> RepoResult<i64> {
        self.count_with_status(target, ReactionStatus::Like).await
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn count_dislikes(&self, target: ReactionTarget) -> RepoResult<i64> {
        self.count_with_status(target, ReactionStatus::Dislike).await
    }

    #[instrument(skip(self, ids), fields(targets = ids.len()))]
    async fn tally_many(&self, kind: TargetKind, ids: &[Uuid]) -> RepoResult<Vec<ReactionTally>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let t = table_for(kind);
        let sql = format!(
            r"
            SELECT {col} AS target_id,
                   COUNT(*) FILTER (WHERE status = $2) AS likes,
                   COUNT(*) FILTER (WHERE status = $3) AS dislikes
            FROM {table}
            WHERE {col} = ANY($1)
            GROUP BY {col}
            ",
            table = t.table,
            col = t.target_column,
        );

        let rows = sqlx::query_as::<_, ReactionTallyModel>(&sql)
            .bind(ids)
            .bind(ReactionStatus::Like.code())
            .bind(ReactionStatus::Dislike.code())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let found: HashMap<Uuid, ReactionTally> = rows
            .into_iter()
            .map(|row| (row.target_id, ReactionTally::from(row)))
            .collect();

        Ok(ids
            .iter()
            .map(|id| found.get(id).copied().unwrap_or(ReactionTally::zero(*id)))
            .collect())
    }
}
