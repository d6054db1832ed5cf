//! Command-line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daleelctl")]
#[command(about = "Daleel - Arabic Q&A assistant for learning disabilities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ~/.config/daleel/config.toml, then /etc/daleel/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Knowledge resource, overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub knowledge: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ask one question
    Ask {
        /// Question text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Show intent, topic, confidence and strategy
        #[arg(long)]
        explain: bool,

        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session
    Repl {
        /// Show the analysis block before every answer
        #[arg(long)]
        explain: bool,
    },

    /// Run the built-in classification self-test
    Selftest {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List topics and intents in the loaded knowledge
    Topics,
}
