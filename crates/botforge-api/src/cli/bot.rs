//! Generated-bot CLI commands: list, show, delete.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use botforge_types::bot::GeneratedBotId;

use crate::state::AppState;

/// List stored generation records in a table, newest first.
pub async fn list_bots(state: &AppState, json: bool) -> Result<()> {
    let bots = state.generator_service.list_bots().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bots)?);
        return Ok(());
    }

    if bots.is_empty() {
        println!();
        println!(
            "  No generated bots yet. POST a configuration to /api/v1/generate to create one."
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Description", "Features", "Created"]);

    for bot in &bots {
        table.add_row(vec![
            bot.id.to_string(),
            bot.name.clone(),
            bot.description.clone(),
            bot.features.join(", "),
            bot.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!();
    println!("  {} generated bot(s)", bots.len());
    println!("{table}");
    println!();

    Ok(())
}

/// Show a full record, including the generated code.
pub async fn show_bot(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id: GeneratedBotId = id
        .parse()
        .map_err(|_| anyhow::anyhow!("'{id}' is not a valid record id"))?;
    let bot = state.generator_service.get_bot(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bot)?);
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("Name:").bold(), style(&bot.name).cyan());
    println!("  {}  {}", style("ID:").bold(), style(bot.id.to_string()).dim());
    println!("  {}  {}", style("Description:").bold(), &bot.description);
    println!("  {}  {}", style("Features:").bold(), bot.features.join(", "));
    println!("  {}  {}", style("Commands:").bold(), bot.commands.join(", "));
    println!(
        "  {}  {}",
        style("Token variable:").bold(),
        &bot.token_var_name
    );
    println!(
        "  {}  {}",
        style("Created:").bold(),
        bot.created_at.to_rfc3339()
    );
    println!();
    println!("{}", style("--- generated code ---").dim());
    println!("{}", bot.code);

    Ok(())
}

/// Delete a record, asking for confirmation unless `--force` is given.
pub async fn delete_bot(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let parsed: GeneratedBotId = id
        .parse()
        .map_err(|_| anyhow::anyhow!("'{id}' is not a valid record id"))?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete generated bot {id}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    state.generator_service.delete_bot(&parsed).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({"deleted": true, "id": id}))?
        );
    } else {
        println!("  {} Deleted {id}", style("✓").green());
    }

    Ok(())
}
