//! Summary of the latest chat in the first two rooms of the current user.
//!
//! Prints each room name, underlined, followed by the sender and the first 50
//! characters of the last five messages. Set `COLOR=1` for highlighted output.
//!
//! Run with: cargo run --example last_five_messages

#[path = "token_file.rs"]
mod token_file;

use gitter_api::MessageQuery;

const SUMMARY_CHARS: usize = 50;

fn display(value: &str, bold: bool) -> String {
    if std::env::var_os("COLOR").is_none() {
        return value.to_string();
    }
    let modifier = if bold { "\x1b[1m" } else { "\x1b[1;36m" };
    format!("{}{}\x1b[0m", modifier, value)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    token_file::init_tracing();
    let client = token_file::load_client()?;

    for room in client.rooms(false).await?.iter().take(2) {
        let name = room.name().unwrap_or(room.id());
        println!("{}", display(name, true));
        println!("{}", "-".repeat(name.chars().count()));

        for message in &room.messages(MessageQuery::new().limit(5)).await? {
            let username = message.user().username().unwrap_or("?");
            let text: String = message.text().chars().take(SUMMARY_CHARS).collect();
            println!("{}{}: {}...", display("@", false), display(username, false), text);
        }
        println!();
    }

    Ok(())
}
