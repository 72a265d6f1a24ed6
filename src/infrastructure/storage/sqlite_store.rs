use crate::application::ports::BookingStore;
use crate::domain::entities::Booking;
use crate::domain::value_objects::StoreKey;
use crate::shared::config::DatabaseConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};

/// Sqlite-backed booking store. Each key maps to one row holding the full
/// JSON-encoded sequence, so `set` is a single upsert and therefore atomic
/// per key; `set_all` commits the whole batch in one transaction.
pub struct SqliteBookingStore {
    pool: Pool<Sqlite>,
}

impl SqliteBookingStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout))
            .connect(&config.url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    fn encode(bookings: &[Booking]) -> Result<String, AppError> {
        Ok(serde_json::to_string(bookings)?)
    }
}

#[async_trait]
impl BookingStore for SqliteBookingStore {
    async fn get(&self, key: &StoreKey) -> Result<Vec<Booking>, AppError> {
        let row = sqlx::query("SELECT payload FROM booking_lists WHERE list_key = ?1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let payload: String = row.try_get("payload")?;
                Ok(serde_json::from_str(&payload)?)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn set(&self, key: &StoreKey, bookings: &[Booking]) -> Result<(), AppError> {
        let payload = Self::encode(bookings)?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO booking_lists (list_key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(list_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key.as_str())
        .bind(&payload)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_all(&self, entries: &[(StoreKey, Vec<Booking>)]) -> Result<(), AppError> {
        let updated_at = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        for (key, bookings) in entries {
            let payload = Self::encode(bookings)?;
            sqlx::query(
                r#"
                INSERT INTO booking_lists (list_key, payload, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(list_key) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key.as_str())
            .bind(&payload)
            .bind(updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
