//! Menu catalog CLI command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use drunch_core::repository::catalog::CatalogRepository;

use crate::state::AppState;

/// Print the available menu, optionally filtered by category or featured.
pub async fn show_menu(
    state: &AppState,
    category: Option<String>,
    featured: bool,
    json: bool,
) -> Result<()> {
    let mut items = if featured {
        state.catalog.list_featured().await?
    } else {
        state.catalog.list_available().await?
    };

    if let Some(category) = &category {
        let category = category.to_lowercase();
        items.retain(|item| item.category == category);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!();
        println!("  {} No menu items found.", style("i").blue().bold());
        if category.is_some() {
            println!(
                "  {} Known categories: {}",
                style("i").blue().bold(),
                drunch_types::catalog::KNOWN_CATEGORIES.join(", ")
            );
        }
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Price").fg(Color::Cyan),
        Cell::new("Featured").fg(Color::Cyan),
    ]);

    for item in &items {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(&item.category),
            Cell::new(format!("Rs. {}", item.price)),
            Cell::new(if item.is_featured { "*" } else { "" }),
        ]);
    }

    println!("{table}");
    Ok(())
}
