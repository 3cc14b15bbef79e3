use crate::application::ports::{QuoteRepository, StoreError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use fx_core::{NewQuote, Quote};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS exchange (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    buy REAL NOT NULL,
    sell REAL NOT NULL,
    date_time TIMESTAMP NOT NULL
)";

#[derive(Debug, sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    buy: f64,
    sell: f64,
    date_time: NaiveDateTime,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        NewQuote::new(row.buy, row.sell, row.date_time).with_id(row.id)
    }
}

/// SQLite-backed quote store
///
/// Timestamps are stored as `YYYY-MM-DD HH:MM:SS[.fff]` text, which sorts
/// chronologically, so range queries compare them directly.
#[derive(Clone)]
pub struct SqliteQuoteRepository {
    pool: SqlitePool,
}

impl SqliteQuoteRepository {
    /// Open a pool for `url` and create the `exchange` table if missing.
    ///
    /// In-memory databases live only as long as their connection, so they
    /// are pinned to one connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        let repository = Self::from_pool(pool);
        repository.init_schema().await?;

        tracing::info!(url, "sqlite quote store ready");
        Ok(repository)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        SqliteQuoteRepository { pool }
    }

    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl QuoteRepository for SqliteQuoteRepository {
    async fn find_all(&self) -> Result<Vec<Quote>, StoreError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            "SELECT id, buy, sell, date_time FROM exchange ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn save(&self, quote: NewQuote) -> Result<Quote, StoreError> {
        let result = sqlx::query("INSERT INTO exchange (buy, sell, date_time) VALUES (?, ?, ?)")
            .bind(quote.buy)
            .bind(quote.sell)
            .bind(quote.date_time)
            .execute(&self.pool)
            .await?;

        Ok(quote.with_id(result.last_insert_rowid()))
    }

    async fn find_by_date_time_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Quote>, StoreError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            "SELECT id, buy, sell, date_time FROM exchange
             WHERE date_time BETWEEN ? AND ?
             ORDER BY id",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM exchange")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
