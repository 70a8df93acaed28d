//! Staff-facing listing commands: orders, reservations, contact messages.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use drunch_core::repository::contact::ContactRepository;
use drunch_core::repository::order::OrderRepository;
use drunch_core::repository::reservation::ReservationRepository;

use crate::state::AppState;

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn print_empty(noun: &str) {
    println!();
    println!("  {} No {noun} yet.", style("i").blue().bold());
    println!();
}

/// Print recent orders, newest first.
pub async fn list_orders(state: &AppState, limit: i64, json: bool) -> Result<()> {
    let orders = state.orders.orders().list_recent(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }

    if orders.is_empty() {
        print_empty("orders");
        return Ok(());
    }

    let mut table = styled_table(&["Placed", "Customer", "Phone", "Items", "Total"]);
    for order in &orders {
        let item_count: u64 = order.items.iter().map(|l| u64::from(l.quantity)).sum();
        table.add_row(vec![
            Cell::new(order.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&order.customer_name),
            Cell::new(&order.customer_phone),
            Cell::new(item_count),
            Cell::new(format!("Rs. {}", order.total_amount)),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Print recent reservations, newest first.
pub async fn list_reservations(state: &AppState, limit: i64, json: bool) -> Result<()> {
    let reservations = state.reservations.list_recent(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reservations)?);
        return Ok(());
    }

    if reservations.is_empty() {
        print_empty("reservations");
        return Ok(());
    }

    let mut table = styled_table(&["Date", "Time", "Name", "Guests", "Phone"]);
    for r in &reservations {
        table.add_row(vec![
            Cell::new(r.date),
            Cell::new(r.time.format("%H:%M")),
            Cell::new(&r.name),
            Cell::new(r.guests),
            Cell::new(&r.phone),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Print recent contact messages, newest first.
pub async fn list_messages(state: &AppState, limit: i64, json: bool) -> Result<()> {
    let messages = state.contacts.list_recent(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    if messages.is_empty() {
        print_empty("messages");
        return Ok(());
    }

    let mut table = styled_table(&["Received", "Name", "Email", "Message"]);
    for m in &messages {
        table.add_row(vec![
            Cell::new(m.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&m.name),
            Cell::new(&m.email),
            Cell::new(&m.message),
        ]);
    }
    println!("{table}");
    Ok(())
}
