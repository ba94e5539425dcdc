//! Database backend implementation
//!
//! Persists translation records in a PostgreSQL `translations` table with a
//! unique (locale, key) constraint. Saves are upserts so that duplicate
//! placeholder saves from racing lookups converge to a single row.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, error};

use super::Backend;
use crate::models::Translation;
use crate::utils::errors::Result;

/// PostgreSQL-backed translation storage
#[derive(Clone, Debug)]
pub struct DatabaseBackend {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct TranslationRow {
    locale: String,
    key: String,
    value: String,
}

impl DatabaseBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the translations table and its unique index if they do not exist
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS translations (
                id BIGSERIAL PRIMARY KEY,
                locale VARCHAR(16) NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL,
                UNIQUE (locale, key)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Backend for DatabaseBackend {
    async fn load_translations(&self) -> Vec<Translation> {
        let rows = sqlx::query_as::<_, TranslationRow>(
            "SELECT locale, key, value FROM translations ORDER BY locale, key",
        )
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => {
                debug!(count = rows.len(), "Loaded translations from database backend");
                rows.into_iter()
                    .map(|row| Translation::new(row.locale, row.key, row.value))
                    .collect()
            }
            Err(e) => {
                error!(error = %e, "Failed to load translations from database backend");
                Vec::new()
            }
        }
    }

    async fn save_translation(&self, translation: &Translation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO translations (locale, key, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (locale, key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&translation.locale)
        .bind(&translation.key)
        .bind(&translation.value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(locale = %translation.locale, key = %translation.key,
               "Translation saved to database backend");
        Ok(())
    }

    async fn delete_translation(&self, translation: &Translation) -> Result<()> {
        let result = sqlx::query("DELETE FROM translations WHERE locale = $1 AND key = $2")
            .bind(&translation.locale)
            .bind(&translation.key)
            .execute(&self.pool)
            .await?;

        debug!(locale = %translation.locale, key = %translation.key,
               deleted = result.rows_affected() > 0,
               "Translation delete attempted on database backend");
        Ok(())
    }
}
