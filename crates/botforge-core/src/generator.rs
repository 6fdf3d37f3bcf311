//! Bot code generation.
//!
//! Selects one of the catalog templates for a [`BotConfig`], substitutes the
//! token-variable placeholder, and (for the echo template) injects handler
//! stubs and registrations for the caller's custom commands.

use botforge_types::bot::BotConfig;
use botforge_types::error::BotError;
use botforge_types::template::{TemplateId, TemplateSummary};

use crate::catalog::{TOKEN_PLACEHOLDER, TemplateCatalog};

/// Runtime dependencies of the generated code. Constant, independent of
/// which template was chosen.
pub const REQUIREMENTS: &[&str] = &["python-telegram-bot==20.7", "python-dotenv==1.0.0"];

/// Setup steps shown to the caller alongside the generated code.
pub const SETUP_INSTRUCTIONS: &[&str] = &[
    "1. Create a bot via @BotFather on Telegram",
    "2. Copy the bot token",
    "3. Create a .env file with BOT_TOKEN=your_token",
    "4. Install the dependencies: pip install python-telegram-bot python-dotenv",
    "5. Run the bot: python bot.py",
];

/// Commands every template already handles; never synthesized.
pub const RESERVED_COMMANDS: &[&str] = &["start", "help"];

/// Output of one generation call.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Which template was selected.
    pub template: TemplateId,
    /// The generated source code (UTF-8).
    pub code: String,
    pub requirements: Vec<String>,
    pub setup_instructions: Vec<String>,
}

/// Stateless generator over an immutable template catalog.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    catalog: TemplateCatalog,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            catalog: TemplateCatalog::builtin(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Discovery listing of the available templates.
    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.catalog.list()
    }

    /// Template selection policy, first match wins:
    /// 1. inline buttons requested -> Buttons
    /// 2. more than 2 command names -> Commands
    /// 3. otherwise -> Echo
    ///
    /// The `> 2` threshold is inherited behavior and kept literal.
    pub fn select_template(config: &BotConfig) -> TemplateId {
        if config.has_inline_buttons {
            TemplateId::Buttons
        } else if config.commands.len() > 2 {
            TemplateId::Commands
        } else {
            TemplateId::Echo
        }
    }

    /// Generate bot source code for the given configuration.
    ///
    /// Custom command injection applies only to the echo template; the other
    /// templates render with empty slots.
    pub fn generate(&self, config: &BotConfig) -> Result<GeneratedArtifact, BotError> {
        let template_id = Self::select_template(config);
        let template = self.catalog.get(template_id).ok_or_else(|| {
            BotError::Render(format!("template '{template_id}' missing from catalog"))
        })?;

        let (extra_handlers, extra_registrations) = if template_id == TemplateId::Echo {
            custom_command_blocks(&config.commands)
        } else {
            (String::new(), String::new())
        };

        let raw = template.body.render(&extra_handlers, &extra_registrations);
        if !raw.contains(TOKEN_PLACEHOLDER) {
            return Err(BotError::Render(format!(
                "template '{template_id}' lost its token placeholder"
            )));
        }
        let code = raw.replace(TOKEN_PLACEHOLDER, &config.token_var_name);

        Ok(GeneratedArtifact {
            template: template_id,
            code,
            requirements: REQUIREMENTS.iter().map(|r| r.to_string()).collect(),
            setup_instructions: SETUP_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the handler-stub block and registration block for the caller's
/// custom commands.
///
/// Commands equal to `start` or `help` are skipped; repeated names produce a
/// single stub (first occurrence wins); input order is preserved otherwise.
fn custom_command_blocks(commands: &[String]) -> (String, String) {
    let mut handlers = String::new();
    let mut registrations = String::new();
    let mut seen: Vec<&str> = Vec::new();

    for cmd in commands {
        if RESERVED_COMMANDS.contains(&cmd.as_str()) || seen.contains(&cmd.as_str()) {
            continue;
        }
        seen.push(cmd);

        handlers.push_str(&format!(
            "async def {cmd}_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:\n\
             \x20   \"\"\"Custom /{cmd} command.\"\"\"\n\
             \x20   await update.message.reply_text(\"Command /{cmd} executed!\")\n\n\n"
        ));
        registrations.push_str(&format!(
            "    application.add_handler(CommandHandler(\"{cmd}\", {cmd}_command))\n"
        ));
    }

    (handlers, registrations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use botforge_types::bot::DEFAULT_TOKEN_VAR;

    fn config(commands: &[&str], has_inline_buttons: bool) -> BotConfig {
        BotConfig {
            name: "Test Bot".to_string(),
            description: "A bot under test".to_string(),
            features: vec![],
            commands: commands.iter().map(|c| c.to_string()).collect(),
            has_inline_buttons,
            has_webhook: false,
            has_database: false,
            token_var_name: DEFAULT_TOKEN_VAR.to_string(),
        }
    }

    #[test]
    fn test_buttons_flag_wins_regardless_of_command_count() {
        for commands in [&[][..], &["start", "help", "a", "b", "c"][..]] {
            let cfg = config(commands, true);
            assert_eq!(CodeGenerator::select_template(&cfg), TemplateId::Buttons);
            let artifact = CodeGenerator::new().generate(&cfg).unwrap();
            assert!(artifact.code.contains("InlineKeyboardButton"));
            assert!(artifact.code.contains("CallbackQueryHandler"));
        }
    }

    #[test]
    fn test_three_commands_select_commands_template() {
        // Boundary: 3 > 2, so the commands template wins over echo.
        let cfg = config(&["start", "help", "info"], false);
        assert_eq!(CodeGenerator::select_template(&cfg), TemplateId::Commands);
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();
        assert!(artifact.code.contains("async def ping"));
        assert!(!artifact.code.contains("InlineKeyboardButton"));
    }

    #[test]
    fn test_two_commands_select_echo_template() {
        let cfg = config(&["start", "help"], false);
        assert_eq!(CodeGenerator::select_template(&cfg), TemplateId::Echo);
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();
        assert!(artifact.code.contains("async def echo"));
        // Only start/help present, so the body gains no custom handlers.
        assert!(!artifact.code.contains("Custom /"));
    }

    #[test]
    fn test_single_custom_command_injected_at_count_two() {
        let cfg = config(&["start", "foo"], false);
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();

        assert_eq!(artifact.template, TemplateId::Echo);
        assert_eq!(artifact.code.matches("async def foo_command").count(), 1);
        assert_eq!(
            artifact
                .code
                .matches(r#"CommandHandler("foo", foo_command)"#)
                .count(),
            1
        );
    }

    #[test]
    fn test_injection_preserves_input_order() {
        let cfg = config(&["weather", "start", "news"], false);
        // 3 commands but start/help filtering happens after selection; 3 > 2
        // selects the commands template, so shrink to stay on echo.
        let cfg = BotConfig {
            commands: vec!["weather".to_string(), "news".to_string()],
            ..cfg
        };
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();

        let weather_handler = artifact.code.find("async def weather_command").unwrap();
        let news_handler = artifact.code.find("async def news_command").unwrap();
        assert!(weather_handler < news_handler);

        let weather_reg = artifact
            .code
            .find(r#"CommandHandler("weather", weather_command)"#)
            .unwrap();
        let news_reg = artifact
            .code
            .find(r#"CommandHandler("news", news_command)"#)
            .unwrap();
        assert!(weather_reg < news_reg);

        let help_reg = artifact
            .code
            .find(r#"CommandHandler("help", help_command)"#)
            .unwrap();
        assert!(help_reg < weather_reg, "registrations follow /help");
    }

    #[test]
    fn test_repeated_command_injected_once() {
        let cfg = config(&["foo", "foo"], false);
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();
        assert_eq!(artifact.code.matches("async def foo_command").count(), 1);
        assert_eq!(
            artifact
                .code
                .matches(r#"CommandHandler("foo", foo_command)"#)
                .count(),
            1
        );
    }

    #[test]
    fn test_token_variable_substituted_everywhere() {
        let mut cfg = config(&[], false);
        cfg.token_var_name = "MY_SECRET_TOKEN".to_string();
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();

        assert!(artifact.code.contains("os.getenv('MY_SECRET_TOKEN'"));
        assert!(!artifact.code.contains(TOKEN_PLACEHOLDER));
    }

    #[test]
    fn test_requirements_and_instructions_are_constant() {
        let generator = CodeGenerator::new();
        let echo = generator.generate(&config(&[], false)).unwrap();
        let buttons = generator.generate(&config(&[], true)).unwrap();

        assert_eq!(echo.requirements, buttons.requirements);
        assert_eq!(echo.requirements, vec![
            "python-telegram-bot==20.7".to_string(),
            "python-dotenv==1.0.0".to_string(),
        ]);
        assert_eq!(echo.setup_instructions.len(), 5);
        assert_eq!(echo.setup_instructions, buttons.setup_instructions);
    }

    #[test]
    fn test_injected_echo_code_keeps_structure() {
        let cfg = config(&["foo"], false);
        let artifact = CodeGenerator::new().generate(&cfg).unwrap();

        let handler = artifact.code.find("async def foo_command").unwrap();
        let entry = artifact.code.find("def main()").unwrap();
        let reg = artifact
            .code
            .find(r#"CommandHandler("foo", foo_command)"#)
            .unwrap();
        let message_handler = artifact.code.find("MessageHandler(filters.TEXT").unwrap();

        assert!(handler < entry, "handler stub sits before the entry point");
        assert!(entry < reg);
        assert!(reg < message_handler, "registration precedes the echo fallback");
    }
}
