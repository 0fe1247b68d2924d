//! PostgreSQL praise store.
//!
//! One `praises` table holds every entry, keyed by the originating message
//! timestamp. Reaction events are correlated through that key instead of
//! scanning the whole collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::instrument;

use crate::core::config::AppConfig;
use crate::core::models::{
    LeaderboardRow, PraiseEntry, VoteDecision, VoteDirection, VoteOutcome, VoteUpdate,
    reconcile_vote,
};
use crate::core::store::{PraiseStore, StoreResult};

/// Row shape of the `praises` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PraiseRow {
    praise_ts: String,
    praised_id: String,
    praiser_id: String,
    reason: String,
    upvotes: i64,
    post_ts: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PraiseRow> for PraiseEntry {
    fn from(row: PraiseRow) -> Self {
        PraiseEntry {
            praise_ts: row.praise_ts,
            praised_id: row.praised_id,
            praiser_id: row.praiser_id,
            reason: row.reason,
            upvotes: row.upvotes,
            post_ts: row.post_ts,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct LeaderboardRowModel {
    user_id: String,
    total_upvotes: i64,
}

/// PostgreSQL implementation of `PraiseStore`
#[derive(Clone)]
pub struct PgPraiseStore {
    pool: PgPool,
}

impl PgPraiseStore {
    /// Connect a pool using the app configuration and bootstrap the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot connect or the schema statements
    /// fail.
    pub async fn connect(config: &AppConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .connect(&config.database_url)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool. The schema is assumed to exist.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS praises (
                praise_ts TEXT PRIMARY KEY,
                praised_id TEXT NOT NULL,
                praiser_id TEXT NOT NULL,
                reason TEXT NOT NULL,
                upvotes BIGINT NOT NULL,
                post_ts TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS praises_praised_id_idx ON praises (praised_id)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn total_upvotes(&self, user_id: &str) -> StoreResult<i64> {
        // SUM(bigint) comes back as NUMERIC, hence the cast
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(upvotes), 0)::BIGINT
            FROM praises
            WHERE praised_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn find_by_ts(&self, praise_ts: &str) -> StoreResult<Option<PraiseEntry>> {
        let row = sqlx::query_as::<_, PraiseRow>(
            r#"
            SELECT praise_ts, praised_id, praiser_id, reason, upvotes, post_ts, created_at
            FROM praises
            WHERE praise_ts = $1
            "#,
        )
        .bind(praise_ts)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PraiseEntry::from))
    }
}

#[async_trait]
impl PraiseStore for PgPraiseStore {
    #[instrument(skip(self))]
    async fn record_praise(
        &self,
        praise_ts: &str,
        praised_id: &str,
        praiser_id: &str,
        reason: &str,
    ) -> StoreResult<i64> {
        // A redelivered message event carries the same timestamp; the
        // conflict clause keeps it from appending a second entry.
        sqlx::query(
            r#"
            INSERT INTO praises (praise_ts, praised_id, praiser_id, reason, upvotes)
            VALUES ($1, $2, $3, $4, 1)
            ON CONFLICT (praise_ts) DO NOTHING
            "#,
        )
        .bind(praise_ts)
        .bind(praised_id)
        .bind(praiser_id)
        .bind(reason)
        .execute(&self.pool)
        .await?;

        self.total_upvotes(praised_id).await
    }

    #[instrument(skip(self))]
    async fn record_post(&self, praise_ts: &str, post_ts: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE praises SET post_ts = $2 WHERE praise_ts = $1
            "#,
        )
        .bind(praise_ts)
        .bind(post_ts)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_vote(
        &self,
        praise_ts: &str,
        reactor_id: &str,
        direction: VoteDirection,
    ) -> StoreResult<VoteOutcome> {
        let entry = self.find_by_ts(praise_ts).await?;

        match reconcile_vote(entry.as_ref(), reactor_id, direction) {
            VoteDecision::NotFound => Ok(VoteOutcome::NotFound),
            VoteDecision::Rejected => Ok(VoteOutcome::Rejected),
            VoteDecision::Apply { new_upvotes } => {
                let Some(entry) = entry else {
                    return Ok(VoteOutcome::NotFound);
                };

                sqlx::query(
                    r#"
                    UPDATE praises SET upvotes = $2 WHERE praise_ts = $1
                    "#,
                )
                .bind(praise_ts)
                .bind(new_upvotes)
                .execute(&self.pool)
                .await?;

                let total_upvotes = self.total_upvotes(&entry.praised_id).await?;

                Ok(VoteOutcome::Applied(VoteUpdate {
                    praised_id: entry.praised_id,
                    praiser_id: entry.praiser_id,
                    reason: entry.reason,
                    entry_upvotes: new_upvotes,
                    total_upvotes,
                    post_ts: entry.post_ts,
                }))
            }
        }
    }

    #[instrument(skip(self))]
    async fn top_users(&self, limit: i64) -> StoreResult<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRowModel>(
            r#"
            SELECT praised_id AS user_id, COALESCE(SUM(upvotes), 0)::BIGINT AS total_upvotes
            FROM praises
            GROUP BY praised_id
            ORDER BY total_upvotes DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LeaderboardRow {
                user_id: r.user_id,
                total_upvotes: r.total_upvotes,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn user_praises(&self, user_id: &str) -> StoreResult<Option<Vec<PraiseEntry>>> {
        let rows = sqlx::query_as::<_, PraiseRow>(
            r#"
            SELECT praise_ts, praised_id, praiser_id, reason, upvotes, post_ts, created_at
            FROM praises
            WHERE praised_id = $1
            ORDER BY upvotes DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(rows.into_iter().map(PraiseEntry::from).collect()))
    }
}
