//! Built-in template catalog.
//!
//! The catalog is an immutable mapping from [`TemplateId`] to a
//! [`Template`], registered once at process start from constant definitions.
//! Template bodies are structured into three segments with two named
//! insertion slots between them (extra handlers, extra registrations), so
//! code injection never depends on locating marker text inside the body.

use std::collections::BTreeMap;

use botforge_types::template::{TemplateId, TemplateSummary};

/// The single substitution placeholder every template body carries. Replaced
/// with the caller-supplied token environment-variable name at render time.
pub const TOKEN_PLACEHOLDER: &str = "{token_var}";

/// A template body split at its two insertion slots.
///
/// Rendering concatenates `prologue` + extra handlers + `interlude` + extra
/// registrations + `epilogue`. The handlers slot sits immediately before the
/// entry-point section; the registrations slot sits immediately after the
/// built-in `/help` registration.
#[derive(Debug, Clone)]
pub struct TemplateBody {
    pub prologue: &'static str,
    pub interlude: &'static str,
    pub epilogue: &'static str,
}

impl TemplateBody {
    /// Assemble the full body with the given slot contents (may be empty).
    pub fn render(&self, extra_handlers: &str, extra_registrations: &str) -> String {
        let mut out = String::with_capacity(
            self.prologue.len()
                + extra_handlers.len()
                + self.interlude.len()
                + extra_registrations.len()
                + self.epilogue.len(),
        );
        out.push_str(self.prologue);
        out.push_str(extra_handlers);
        out.push_str(self.interlude);
        out.push_str(extra_registrations);
        out.push_str(self.epilogue);
        out
    }
}

/// A static code template. Immutable after catalog construction.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Declared capability labels, shown in discovery listings only.
    pub features: &'static [&'static str],
    pub body: TemplateBody,
}

impl Template {
    /// Discovery listing entry for this template.
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Read-only registry of the built-in templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<TemplateId, Template>,
}

impl TemplateCatalog {
    /// Build the catalog from the constant template definitions.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        for template in [echo_template(), commands_template(), buttons_template()] {
            templates.insert(template.id, template);
        }
        Self { templates }
    }

    /// Look up a template by id.
    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        self.templates.get(&id)
    }

    /// List all templates in deterministic (id) order.
    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates.values().map(Template::summary).collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn echo_template() -> Template {
    Template {
        id: TemplateId::Echo,
        name: "Simple Echo Bot",
        description: "Bot that repeats every message it receives",
        features: &["echo", "commands"],
        body: TemplateBody {
            prologue: r#"import os
import logging
from telegram import Update
from telegram.ext import Application, CommandHandler, MessageHandler, filters, ContextTypes

logging.basicConfig(
    format='%(asctime)s - %(name)s - %(levelname)s - %(message)s',
    level=logging.INFO
)
logger = logging.getLogger(__name__)


async def start(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Greet the user when /start is issued."""
    await update.message.reply_text(
        'Hi! I am an echo bot. Send me a message and I will repeat it!'
    )


async def help_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the available commands when /help is issued."""
    await update.message.reply_text(
        'Available commands:\n'
        '/start - Get started\n'
        '/help - Show this help\n'
        '\nSend me any message and I will repeat it!'
    )


async def echo(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Repeat the user's message back."""
    await update.message.reply_text(f"You said: {update.message.text}")


"#,
            interlude: r#"def main() -> None:
    """Start the bot."""
    token = os.getenv('{token_var}', 'YOUR_BOT_TOKEN')

    application = Application.builder().token(token).build()

    application.add_handler(CommandHandler("start", start))
    application.add_handler(CommandHandler("help", help_command))
"#,
            epilogue: r#"    application.add_handler(MessageHandler(filters.TEXT & ~filters.COMMAND, echo))

    print("Echo bot running. Press Ctrl+C to stop.")
    application.run_polling(allowed_updates=Update.ALL_TYPES)


if __name__ == '__main__':
    main()
"#,
        },
    }
}

fn commands_template() -> Template {
    Template {
        id: TemplateId::Commands,
        name: "Command Bot",
        description: "Bot with several custom commands and keyword replies",
        features: &["commands", "responses"],
        body: TemplateBody {
            prologue: r#"import os
import logging
from datetime import datetime
from telegram import Update
from telegram.ext import Application, CommandHandler, MessageHandler, filters, ContextTypes

logging.basicConfig(
    format='%(asctime)s - %(name)s - %(levelname)s - %(message)s',
    level=logging.INFO
)
logger = logging.getLogger(__name__)


async def start(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Greet the user by name."""
    user = update.effective_user
    await update.message.reply_text(
        f'Hi {user.first_name}! I am your personal bot. '
        f'Type /help to see every command.'
    )


async def help_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the command reference."""
    await update.message.reply_text(
        'Available commands:\n'
        '/start - Get started\n'
        '/help - Show this help\n'
        '/info - About this bot\n'
        '/time - Current time\n'
        '/echo [message] - Repeat a message\n'
        '/ping - Check the connection\n'
        '\nSend me a message and I will answer!'
    )


async def info(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show bot information."""
    await update.message.reply_text(
        'Bot information:\n'
        '- Version: 1.0.0\n'
        '- Built with: python-telegram-bot\n'
        '- Status: online'
    )


async def time_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the current time."""
    now = datetime.now().strftime("%H:%M:%S - %d/%m/%Y")
    await update.message.reply_text(f"Current time: {now}")


async def echo_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Repeat the message passed as arguments."""
    if context.args:
        message = ' '.join(context.args)
        await update.message.reply_text(f"Echo: {message}")
    else:
        await update.message.reply_text("Usage: /echo [your message]")


async def ping(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Check the connection."""
    await update.message.reply_text("Pong! Bot is online.")


async def handle_message(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Reply to plain text messages with keyword matching."""
    message = update.message.text.lower()

    responses = {
        'hello': 'Hello! How are you?',
        'hi': 'Hi there!',
        'thanks': 'You are welcome!',
        'bye': 'Goodbye! See you soon!',
    }

    for key, response in responses.items():
        if key in message:
            await update.message.reply_text(response)
            return

    await update.message.reply_text(
        "I do not understand that message. Type /help to see the available commands."
    )


"#,
            interlude: r#"def main() -> None:
    """Start the bot."""
    token = os.getenv('{token_var}', 'YOUR_BOT_TOKEN')

    application = Application.builder().token(token).build()

    application.add_handler(CommandHandler("start", start))
    application.add_handler(CommandHandler("help", help_command))
"#,
            epilogue: r#"    application.add_handler(CommandHandler("info", info))
    application.add_handler(CommandHandler("time", time_command))
    application.add_handler(CommandHandler("echo", echo_command))
    application.add_handler(CommandHandler("ping", ping))

    application.add_handler(MessageHandler(filters.TEXT & ~filters.COMMAND, handle_message))

    print("Command bot running. Press Ctrl+C to stop.")
    application.run_polling(allowed_updates=Update.ALL_TYPES)


if __name__ == '__main__':
    main()
"#,
        },
    }
}

fn buttons_template() -> Template {
    Template {
        id: TemplateId::Buttons,
        name: "Inline Button Bot",
        description: "Bot with interactive inline keyboard buttons",
        features: &["buttons", "interactive"],
        body: TemplateBody {
            prologue: r#"import os
import logging
from telegram import Update, InlineKeyboardButton, InlineKeyboardMarkup
from telegram.ext import Application, CommandHandler, CallbackQueryHandler, ContextTypes

logging.basicConfig(
    format='%(asctime)s - %(name)s - %(levelname)s - %(message)s',
    level=logging.INFO
)
logger = logging.getLogger(__name__)


async def start(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the welcome menu with inline buttons."""
    keyboard = [
        [InlineKeyboardButton("Information", callback_data='info')],
        [InlineKeyboardButton("Settings", callback_data='settings')],
        [InlineKeyboardButton("Help", callback_data='help')],
    ]
    reply_markup = InlineKeyboardMarkup(keyboard)

    await update.message.reply_text(
        'Welcome! Pick an option below:',
        reply_markup=reply_markup,
    )


async def help_command(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the help text when /help is issued."""
    await update.message.reply_text(
        'Available commands:\n'
        '/start - Show the main menu\n'
        '/menu - Show the main menu again\n'
        '/help - Show this help\n'
        '\nTap the buttons to navigate.'
    )


async def menu(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Show the main menu."""
    keyboard = [
        [InlineKeyboardButton("Home", callback_data='home')],
        [InlineKeyboardButton("Stats", callback_data='stats'),
         InlineKeyboardButton("Tools", callback_data='tools')],
        [InlineKeyboardButton("Contact", callback_data='contact')],
    ]
    reply_markup = InlineKeyboardMarkup(keyboard)

    await update.message.reply_text(
        'Main menu. Pick an option:',
        reply_markup=reply_markup,
    )


async def button_handler(update: Update, context: ContextTypes.DEFAULT_TYPE) -> None:
    """Handle button taps."""
    query = update.callback_query
    await query.answer()

    responses = {
        'info': 'Bot information:\n- Version: 1.0.0\n- Built with: python-telegram-bot',
        'settings': 'Settings: nothing to configure yet.',
        'help': 'Tap /start or /menu to bring the buttons back.',
        'home': 'You are home. Tap /menu for options.',
    }

    text = responses.get(
        query.data,
        f"The '{query.data}' option is still under construction.",
    )
    back = InlineKeyboardMarkup(
        [[InlineKeyboardButton("Back", callback_data='home')]]
    )
    await query.edit_message_text(text, reply_markup=back)


"#,
            interlude: r#"def main() -> None:
    """Start the bot."""
    token = os.getenv('{token_var}', 'YOUR_BOT_TOKEN')

    application = Application.builder().token(token).build()

    application.add_handler(CommandHandler("start", start))
    application.add_handler(CommandHandler("help", help_command))
"#,
            epilogue: r#"    application.add_handler(CommandHandler("menu", menu))
    application.add_handler(CallbackQueryHandler(button_handler))

    print("Button bot running. Press Ctrl+C to stop.")
    application.run_polling(allowed_updates=Update.ALL_TYPES)


if __name__ == '__main__':
    main()
"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_three_templates() {
        let catalog = TemplateCatalog::builtin();
        for id in [TemplateId::Echo, TemplateId::Commands, TemplateId::Buttons] {
            assert!(catalog.get(id).is_some(), "missing template {id}");
        }
    }

    #[test]
    fn test_list_is_idempotent() {
        let catalog = TemplateCatalog::builtin();
        let first = catalog.list();
        let second = catalog.list();
        assert_eq!(first.len(), 3);
        let ids1: Vec<_> = first.iter().map(|t| t.id).collect();
        let ids2: Vec<_> = second.iter().map(|t| t.id).collect();
        assert_eq!(ids1, ids2);
    }

    #[test]
    fn test_every_body_carries_exactly_one_placeholder() {
        let catalog = TemplateCatalog::builtin();
        for id in [TemplateId::Echo, TemplateId::Commands, TemplateId::Buttons] {
            let rendered = catalog.get(id).unwrap().body.render("", "");
            assert_eq!(
                rendered.matches(TOKEN_PLACEHOLDER).count(),
                1,
                "template {id} placeholder count"
            );
        }
    }

    #[test]
    fn test_render_places_slots_between_segments() {
        let catalog = TemplateCatalog::builtin();
        let body = &catalog.get(TemplateId::Echo).unwrap().body;
        let rendered = body.render("HANDLERS\n", "REGISTRATIONS\n");

        let handlers_at = rendered.find("HANDLERS").unwrap();
        let main_at = rendered.find("def main()").unwrap();
        let help_at = rendered
            .find(r#"CommandHandler("help", help_command)"#)
            .unwrap();
        let registrations_at = rendered.find("REGISTRATIONS").unwrap();
        let echo_handler_at = rendered.find("MessageHandler(filters.TEXT").unwrap();

        assert!(handlers_at < main_at, "handlers go before the entry point");
        assert!(help_at < registrations_at, "registrations go after /help");
        assert!(registrations_at < echo_handler_at);
    }

    #[test]
    fn test_features_are_listing_metadata_only() {
        let catalog = TemplateCatalog::builtin();
        let summaries = catalog.list();
        let buttons = summaries
            .iter()
            .find(|t| t.id == TemplateId::Buttons)
            .unwrap();
        assert!(buttons.features.contains(&"interactive".to_string()));
    }
}
