//! Subcommand handlers.

use crate::output;
use crate::repl;
use anyhow::{Context, Result};
use daleel_common::classifier::Classifier;
use daleel_common::config::DaleelConfig;
use daleel_common::knowledge::KnowledgeStore;
use daleel_common::resolver::{Resolution, Resolver};
use daleel_common::selftest::run_selftest;
use daleel_common::Conversation;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Resolver for this invocation: a `--knowledge` path beats the config.
pub fn build_resolver(config: &DaleelConfig, knowledge_override: Option<&Path>) -> Resolver {
    let store = match knowledge_override {
        Some(path) => KnowledgeStore::load_or_empty(path),
        None => config.open_store(),
    };
    info!(source = ?store.source(), entries = store.len(), "knowledge ready");

    Resolver::with_parts(Arc::new(store), Classifier::default(), config.resolver)
}

/// Answer one question as text, optionally with the analysis block.
pub fn render_answer(resolution: &Resolution, explain: bool) -> String {
    let mut out = String::new();
    if explain {
        out.push_str(&output::format_explain(resolution));
        out.push_str(output::SEPARATOR);
        out.push('\n');
    }
    out.push_str(&resolution.text);
    out.push('\n');
    out
}

pub fn handle_ask(resolver: Arc<Resolver>, question: &[String], explain: bool, json: bool) -> Result<()> {
    let mut conversation = Conversation::new(resolver);
    let resolution = conversation.process_detailed(&question.join(" "));

    if json {
        let text = serde_json::to_string_pretty(&resolution).context("Failed to serialize resolution")?;
        println!("{}", text);
    } else {
        print!("{}", render_answer(&resolution, explain));
    }
    Ok(())
}

pub fn handle_repl(resolver: Arc<Resolver>, explain: bool) -> Result<()> {
    let mut conversation = Conversation::new(resolver);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut conversation, stdin.lock(), &mut stdout, explain)?;
    stdout.flush()?;
    Ok(())
}

/// Returns whether the classifier is healthy.
pub fn handle_selftest(resolver: &Resolver, json: bool) -> Result<bool> {
    let report = run_selftest(resolver.classifier());

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize self-test report")?;
        println!("{}", text);
    } else {
        print!("{}", output::format_selftest(&report));
    }
    Ok(report.is_healthy())
}

pub fn handle_topics(resolver: &Resolver) -> Result<()> {
    print!("{}", output::format_topics(resolver.store()));
    Ok(())
}
