//! Daleel Control - ask the Daleel engine from the terminal.

use anyhow::Result;
use clap::Parser;
use daleel_common::config::DaleelConfig;
use daleelctl::cli::{Cli, Commands};
use daleelctl::{commands, logging};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DaleelConfig::load(cli.config.as_deref())?;
    logging::init(&config.log.level)?;

    let resolver = Arc::new(commands::build_resolver(&config, cli.knowledge.as_deref()));

    match cli.command {
        Commands::Ask {
            question,
            explain,
            json,
        } => commands::handle_ask(resolver, &question, explain, json),
        Commands::Repl { explain } => commands::handle_repl(resolver, explain),
        Commands::Selftest { json } => {
            if !commands::handle_selftest(&resolver, json)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Topics => commands::handle_topics(&resolver),
    }
}
