//! Lists the rooms of one of the current user's groups and writes them to
//! `data.json`.
//!
//! Run with: cargo run --example group_rooms -- <group-name>

#[path = "token_file.rs"]
mod token_file;

use anyhow::{anyhow, Context};
use serde::Serialize;

const OUTPUT_FILE: &str = "data.json";

#[derive(Serialize)]
struct RoomSummary<'a> {
    name: Option<&'a str>,
    uri: Option<&'a str>,
    user_count: Option<u64>,
    unread_items: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    token_file::init_tracing();
    let group_name = std::env::args()
        .nth(1)
        .context("usage: group_rooms <group-name>")?;
    let client = token_file::load_client()?;

    let groups = client.groups(false).await?;
    let group = groups
        .iter()
        .find(|group| group.name() == Some(group_name.as_str()))
        .ok_or_else(|| anyhow!("no group named {}", group_name))?;

    let rooms = group.rooms().await?;
    let summary: Vec<RoomSummary<'_>> = rooms
        .iter()
        .map(|room| RoomSummary {
            name: room.name(),
            uri: room.uri(),
            user_count: room.user_count(),
            unread_items: room.unread_items(),
        })
        .collect();

    for room in &summary {
        println!(
            "{:<40} {:>6} users",
            room.uri.or(room.name).unwrap_or("?"),
            room.user_count.unwrap_or(0)
        );
    }

    std::fs::write(OUTPUT_FILE, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("writing {}", OUTPUT_FILE))?;
    tracing::info!("wrote {} rooms to {}", summary.len(), OUTPUT_FILE);

    Ok(())
}
