//! Terminal formatting for answers, diagnostics and reports.

use daleel_common::conversation::ConversationTurn;
use daleel_common::knowledge::{KnowledgeSource, KnowledgeStore};
use daleel_common::resolver::{Resolution, Strategy};
use daleel_common::selftest::SelfTestReport;
use owo_colors::OwoColorize;

pub const SEPARATOR: &str = "------------------------------------------------------------";

/// Colored confidence: green at the direct gate, yellow at the topic gate.
fn confidence_label(confidence: f32) -> String {
    let text = format!("{:.2}", confidence);
    if confidence > 0.7 {
        text.bright_green().to_string()
    } else if confidence > 0.5 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn strategy_label(strategy: Strategy) -> String {
    match strategy {
        Strategy::Direct => strategy.as_str().bright_green().to_string(),
        Strategy::TopicAnchored | Strategy::FallbackSearch => strategy.as_str().yellow().to_string(),
        Strategy::Default => strategy.as_str().bright_red().to_string(),
    }
}

/// One-block analysis line for `--explain` and the REPL.
pub fn format_explain(resolution: &Resolution) -> String {
    let c = &resolution.classification;
    let topic = c
        .topic
        .map(|t| format!("{} ({})", t.as_str(), t.display_name()))
        .unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "intent:".dimmed(), c.intent));
    out.push_str(&format!("{} {}\n", "topic:".dimmed(), topic));
    out.push_str(&format!("{} {}\n", "confidence:".dimmed(), confidence_label(c.confidence)));
    out.push_str(&format!("{} {}\n", "strategy:".dimmed(), strategy_label(resolution.strategy)));
    if !c.matched_keywords.is_empty() {
        out.push_str(&format!("{} {}\n", "matched:".dimmed(), c.matched_keywords.join("، ")));
    }
    out
}

fn source_label(source: &KnowledgeSource) -> String {
    match source {
        KnowledgeSource::Builtin => "bundled".to_string(),
        KnowledgeSource::File(path) => path.display().to_string(),
        KnowledgeSource::Empty => "none (empty knowledge)".to_string(),
    }
}

pub fn format_topics(store: &KnowledgeStore) -> String {
    let mut out = format!("{} {}\n", "knowledge:".bold(), source_label(store.source()));
    if store.topics().is_empty() {
        out.push_str("  no topics loaded\n");
        return out;
    }

    for topic in store.topics() {
        let intents: Vec<&str> = store.intents_for(*topic).iter().map(|i| i.as_str()).collect();
        out.push_str(&format!(
            "  {} ({}): {}\n",
            topic.as_str().cyan(),
            topic.display_name(),
            if intents.is_empty() {
                "-".to_string()
            } else {
                intents.join(", ")
            }
        ));
    }
    out
}

pub fn format_selftest(report: &SelfTestReport) -> String {
    let mut out = String::new();
    for case in &report.cases {
        let mark = if case.passed() {
            "[PASS]".bright_green().to_string()
        } else {
            "[FAIL]".bright_red().to_string()
        };
        let topic = case.topic.map(|t| t.as_str()).unwrap_or("-");
        out.push_str(&format!(
            "{} {}\n       expected {}/{}, got {}/{} ({:.2})\n",
            mark,
            case.question,
            case.expected_intent,
            case.expected_topic,
            case.intent,
            topic,
            case.confidence
        ));
    }

    let summary = format!(
        "accuracy: {:.1}% ({}/{})",
        report.accuracy,
        report.passed_count(),
        report.cases.len()
    );
    out.push_str(SEPARATOR);
    out.push('\n');
    if report.is_healthy() {
        out.push_str(&format!("{}\n", summary.bright_green()));
    } else {
        out.push_str(&format!("{}\n", summary.bright_red()));
    }
    out
}

pub fn format_history(history: &[ConversationTurn]) -> String {
    if history.is_empty() {
        return "no turns yet\n".to_string();
    }

    let mut out = String::new();
    for (i, turn) in history.iter().enumerate() {
        out.push_str(&format!(
            "{} {} {}\n",
            format!("[{}]", i + 1).dimmed(),
            turn.timestamp.format("%H:%M:%S"),
            turn.user_input.bold()
        ));
        let first_line = turn
            .response
            .as_deref()
            .and_then(|r| r.lines().find(|l| !l.trim().is_empty()))
            .unwrap_or("-");
        out.push_str(&format!("    {}\n", first_line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use daleel_common::resolver::Resolver;
    use daleel_common::selftest::run_selftest;
    use daleel_common::Conversation;
    use std::sync::Arc;

    fn resolver() -> Arc<Resolver> {
        Arc::new(Resolver::new(Arc::new(KnowledgeStore::builtin().unwrap())))
    }

    #[test]
    fn test_explain_lists_fields() {
        let resolution = resolver().resolve("كيف أعالج مشاكل الإدراك؟");
        let text = format_explain(&resolution);
        assert!(text.contains("treatment"));
        assert!(text.contains("perception (الإدراك)"));
        assert!(text.contains("1.00"));
        assert!(text.contains("direct"));
    }

    #[test]
    fn test_explain_without_topic() {
        let resolution = resolver().resolve("");
        let text = format_explain(&resolution);
        assert!(text.contains("general"));
        assert!(text.contains("default"));
        assert!(!text.contains("matched:"));
    }

    #[test]
    fn test_topics_listing() {
        let text = format_topics(&KnowledgeStore::builtin().unwrap());
        assert!(text.contains("bundled"));
        assert!(text.contains("definition, treatment, types"));
        assert!(text.contains("الكتابة"));

        let empty = format_topics(&KnowledgeStore::empty());
        assert!(empty.contains("no topics loaded"));
    }

    #[test]
    fn test_selftest_summary() {
        let report = run_selftest(resolver().classifier());
        let text = format_selftest(&report);
        assert_eq!(text.matches("[PASS]").count(), 4);
        assert!(text.contains("accuracy: 100.0% (4/4)"));
    }

    #[test]
    fn test_history_listing() {
        let mut conv = Conversation::new(resolver());
        assert_eq!(format_history(conv.history()), "no turns yet\n");

        conv.process("علاج الذاكرة");
        let text = format_history(conv.history());
        assert!(text.contains("[1]"));
        assert!(text.contains("علاج الذاكرة"));
    }
}
