//! SQLite generated-bot repository implementation.
//!
//! Implements `GeneratedBotRepository` from `botforge-core` using sqlx with
//! split read/write pools. List columns (features, commands) are stored as
//! JSON text; timestamps as RFC 3339 text.

use botforge_core::repository::bot::GeneratedBotRepository;
use botforge_types::bot::{GeneratedBot, GeneratedBotId};
use botforge_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `GeneratedBotRepository`.
pub struct SqliteGeneratedBotRepository {
    pool: DatabasePool,
}

impl SqliteGeneratedBotRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain record.
struct GeneratedBotRow {
    id: String,
    name: String,
    description: String,
    features: String,
    commands: String,
    has_inline_buttons: bool,
    has_webhook: bool,
    has_database: bool,
    token_var_name: String,
    code: String,
    created_at: String,
}

impl GeneratedBotRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            features: row.try_get("features")?,
            commands: row.try_get("commands")?,
            has_inline_buttons: row.try_get("has_inline_buttons")?,
            has_webhook: row.try_get("has_webhook")?,
            has_database: row.try_get("has_database")?,
            token_var_name: row.try_get("token_var_name")?,
            code: row.try_get("code")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_bot(self) -> Result<GeneratedBot, RepositoryError> {
        let id = self
            .id
            .parse::<GeneratedBotId>()
            .map_err(|e| RepositoryError::Query(format!("invalid bot id: {e}")))?;

        let features: Vec<String> = serde_json::from_str(&self.features)
            .map_err(|e| RepositoryError::Query(format!("invalid features JSON: {e}")))?;
        let commands: Vec<String> = serde_json::from_str(&self.commands)
            .map_err(|e| RepositoryError::Query(format!("invalid commands JSON: {e}")))?;

        let created_at = parse_datetime(&self.created_at)?;

        Ok(GeneratedBot {
            id,
            name: self.name,
            description: self.description,
            features,
            commands,
            has_inline_buttons: self.has_inline_buttons,
            has_webhook: self.has_webhook,
            has_database: self.has_database,
            token_var_name: self.token_var_name,
            code: self.code,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl GeneratedBotRepository for SqliteGeneratedBotRepository {
    async fn insert(&self, bot: &GeneratedBot) -> Result<(), RepositoryError> {
        let features_json = serde_json::to_string(&bot.features)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        let commands_json = serde_json::to_string(&bot.commands)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query(
            "INSERT INTO generated_bots (id, name, description, features, commands, has_inline_buttons, has_webhook, has_database, token_var_name, code, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(bot.id.to_string())
        .bind(&bot.name)
        .bind(&bot.description)
        .bind(&features_json)
        .bind(&commands_json)
        .bind(bot.has_inline_buttons)
        .bind(bot.has_webhook)
        .bind(bot.has_database)
        .bind(&bot.token_var_name)
        .bind(&bot.code)
        .bind(format_datetime(&bot.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<GeneratedBot>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM generated_bots ORDER BY created_at DESC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                GeneratedBotRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_bot()
            })
            .collect()
    }

    async fn get_by_id(&self, id: &GeneratedBotId) -> Result<Option<GeneratedBot>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM generated_bots WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let bot_row = GeneratedBotRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(bot_row.into_bot()?))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &GeneratedBotId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM generated_bots WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
