use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Environment variable the generated bot reads its token from when the
/// caller does not supply one.
pub const DEFAULT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Unique identifier for a generated-bot record, wrapping a UUID v7
/// (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedBotId(pub Uuid);

impl GeneratedBotId {
    /// Create a new GeneratedBotId using UUID v7 (time-sortable, fresh per
    /// insert -- record uniqueness holds by construction).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a GeneratedBotId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for GeneratedBotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GeneratedBotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GeneratedBotId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Caller-supplied configuration describing the bot to generate.
///
/// All fields except the booleans are free text; there are no uniqueness or
/// cross-field invariants. `features` is descriptive metadata only and never
/// influences template selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Freeform display name.
    pub name: String,
    /// Short description (1-2 sentences for listings).
    pub description: String,
    /// Feature labels, kept in input order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Command names the bot should respond to, kept in input order.
    #[serde(default)]
    pub commands: Vec<String>,
    /// Whether the bot uses inline keyboard buttons.
    #[serde(default)]
    pub has_inline_buttons: bool,
    /// Whether the bot receives updates via webhook.
    #[serde(default)]
    pub has_webhook: bool,
    /// Whether the bot persists its own data.
    #[serde(default)]
    pub has_database: bool,
    /// Environment variable the generated code reads the bot token from.
    #[serde(default = "default_token_var")]
    pub token_var_name: String,
}

fn default_token_var() -> String {
    DEFAULT_TOKEN_VAR.to_string()
}

/// A persisted outcome of one generation request.
///
/// Created exactly once per successful generation, never mutated, deleted
/// only by an explicit removal request keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBot {
    pub id: GeneratedBotId,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub commands: Vec<String>,
    pub has_inline_buttons: bool,
    pub has_webhook: bool,
    pub has_database: bool,
    pub token_var_name: String,
    /// The generated bot source code.
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedBot {
    /// Build a record from a configuration and its generated code, stamping
    /// a fresh id and creation time.
    pub fn from_config(config: BotConfig, code: String) -> Self {
        Self {
            id: GeneratedBotId::new(),
            name: config.name,
            description: config.description,
            features: config.features,
            commands: config.commands,
            has_inline_buttons: config.has_inline_buttons,
            has_webhook: config.has_webhook,
            has_database: config.has_database,
            token_var_name: config.token_var_name,
            code,
            created_at: Utc::now(),
        }
    }

    /// Listing view of this record (no code field).
    pub fn summary(&self) -> GeneratedBotSummary {
        GeneratedBotSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            features: self.features.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing view of a generated-bot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBotSummary {
    pub id: GeneratedBotId,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Response returned to the caller of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub bot_id: GeneratedBotId,
    pub code: String,
    /// Runtime dependencies of the generated code (constant, independent of
    /// which template was chosen).
    pub requirements: Vec<String>,
    /// Human-readable setup steps (constant).
    pub setup_instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_bot_id_display_roundtrip() {
        let id = GeneratedBotId::new();
        let s = id.to_string();
        let parsed: GeneratedBotId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_bot_config_defaults_from_json() {
        let config: BotConfig =
            serde_json::from_str(r#"{"name": "Echo", "description": "repeats messages"}"#)
                .unwrap();
        assert!(config.features.is_empty());
        assert!(config.commands.is_empty());
        assert!(!config.has_inline_buttons);
        assert!(!config.has_webhook);
        assert!(!config.has_database);
        assert_eq!(config.token_var_name, DEFAULT_TOKEN_VAR);
    }

    #[test]
    fn test_from_config_copies_all_fields() {
        let config = BotConfig {
            name: "Luna".to_string(),
            description: "A helper".to_string(),
            features: vec!["echo".to_string()],
            commands: vec!["start".to_string(), "weather".to_string()],
            has_inline_buttons: true,
            has_webhook: false,
            has_database: true,
            token_var_name: "LUNA_TOKEN".to_string(),
        };
        let record = GeneratedBot::from_config(config.clone(), "print('hi')".to_string());

        assert_eq!(record.name, config.name);
        assert_eq!(record.description, config.description);
        assert_eq!(record.features, config.features);
        assert_eq!(record.commands, config.commands);
        assert!(record.has_inline_buttons);
        assert!(record.has_database);
        assert_eq!(record.token_var_name, "LUNA_TOKEN");
        assert_eq!(record.code, "print('hi')");
    }

    #[test]
    fn test_summary_drops_code() {
        let config = BotConfig {
            name: "Luna".to_string(),
            description: "A helper".to_string(),
            features: vec![],
            commands: vec![],
            has_inline_buttons: false,
            has_webhook: false,
            has_database: false,
            token_var_name: DEFAULT_TOKEN_VAR.to_string(),
        };
        let record = GeneratedBot::from_config(config, "code".to_string());
        let summary = record.summary();

        assert_eq!(summary.id, record.id);
        assert_eq!(summary.created_at, record.created_at);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("code").is_none());
    }
}
