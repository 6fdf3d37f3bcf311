//! Template catalog CLI commands.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// List the built-in templates in a table.
pub async fn list_templates(state: &AppState, json: bool) -> Result<()> {
    let templates = state.generator_service.list_templates();

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Description", "Features"]);

    for template in &templates {
        table.add_row(vec![
            template.id.to_string(),
            template.name.clone(),
            template.description.clone(),
            template.features.join(", "),
        ]);
    }

    println!();
    println!("  {}", style("Available templates").bold());
    println!("{table}");
    println!();

    Ok(())
}
