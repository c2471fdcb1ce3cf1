//! # Traffic Advisor - Terminal Traffic-Safety Assistant
//!
//! Browse eco-driving advice, driving tips and Vietnamese traffic laws, and
//! ask a keyword-driven safety advisor in a main chat panel or a floating
//! chat widget.

mod app;
mod chat;
mod config;
pub mod constants;
mod content;
mod logging;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use config::Config;
use constants::{log_file_path, MAX_REPLY_DELAY_MS};
use ui::Tab;

/// Traffic Advisor - road-safety tips, laws and a chat advisor in your terminal
#[derive(Parser, Debug)]
#[command(name = "traffic-advisor", version, about = "Traffic-safety tips, laws and a chat advisor in the terminal")]
struct Cli {
    /// Color theme (default, gruvbox, nord, solarized, or a custom theme file name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Tab shown at startup (chat, tips, laws)
    #[arg(long, value_parser = parse_tab)]
    tab: Option<Tab>,

    /// Delay before the advisor answers, in milliseconds
    #[arg(long, value_name = "MS")]
    reply_delay_ms: Option<u64>,

    /// Open the floating chat widget at startup
    #[arg(long)]
    open_chat: bool,
}

fn parse_tab(s: &str) -> std::result::Result<Tab, String> {
    Tab::from_tag(s).ok_or_else(|| format!("unknown tab '{}' (expected chat, tips or laws)", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&log_file_path()) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(tab) = cli.tab {
        config.start_tab = tab;
    }
    if let Some(ms) = cli.reply_delay_ms {
        config.reply_delay_ms = ms.min(MAX_REPLY_DELAY_MS);
    }
    if cli.open_chat {
        config.floating_open = true;
    }

    let mut app = app::App::new(&config);
    app.run().await
}
