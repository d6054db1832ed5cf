//! Interactive session.
//!
//! Generic over reader and writer so sessions can be driven from tests.

use crate::output;
use anyhow::Result;
use daleel_common::Conversation;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    History,
    Clear,
    Stats,
    Help,
    Empty,
    Ask(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            ":quit" | ":q" | "exit" | "quit" | "خروج" => Self::Quit,
            ":history" => Self::History,
            ":clear" => Self::Clear,
            ":stats" => Self::Stats,
            ":help" => Self::Help,
            _ => Self::Ask(line.to_string()),
        }
    }
}

fn print_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{} v{}", "daleel".bold(), daleel_common::VERSION)?;
    writeln!(out, "{}", output::SEPARATOR.dimmed())?;
    writeln!(out, "اكتب سؤالك عن صعوبات التعلم. :help للأوامر، خروج للإنهاء.")?;
    writeln!(out)?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  :history    - Show this session's questions")?;
    writeln!(out, "  :clear      - Forget this session's history")?;
    writeln!(out, "  :stats      - Session and knowledge counts")?;
    writeln!(out, "  :quit, exit - Leave")?;
    writeln!(out, "  <anything>  - Ask a question")?;
    Ok(())
}

fn print_stats<W: Write>(out: &mut W, conversation: &Conversation) -> Result<()> {
    let store = conversation.resolver().store();
    writeln!(out, "turns: {}", conversation.turn_count())?;
    writeln!(out, "topics: {}", store.topics().len())?;
    writeln!(out, "entries: {}", store.len())?;
    Ok(())
}

/// Run until quit or end of input.
pub fn run<R: BufRead, W: Write>(
    conversation: &mut Conversation,
    input: R,
    out: &mut W,
    explain: bool,
) -> Result<()> {
    print_header(out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "{} ", "daleel>".cyan())?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => {
                writeln!(out, "مع السلامة!")?;
                break;
            }
            ReplCommand::History => write!(out, "{}", output::format_history(conversation.history()))?,
            ReplCommand::Clear => {
                conversation.clear();
                writeln!(out, "history cleared")?;
            }
            ReplCommand::Stats => print_stats(out, conversation)?,
            ReplCommand::Help => print_help(out)?,
            ReplCommand::Ask(question) => {
                let resolution = conversation.process_detailed(&question);
                writeln!(out)?;
                if explain {
                    write!(out, "{}", output::format_explain(&resolution))?;
                    writeln!(out, "{}", output::SEPARATOR.dimmed())?;
                }
                writeln!(out, "{}", resolution.text)?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daleel_common::knowledge::KnowledgeStore;
    use daleel_common::resolver::Resolver;
    use std::io::Cursor;
    use std::sync::Arc;

    fn conversation() -> Conversation {
        Conversation::new(Arc::new(Resolver::new(Arc::new(KnowledgeStore::builtin().unwrap()))))
    }

    fn session(conv: &mut Conversation, script: &str) -> String {
        let mut out = Vec::new();
        run(conv, Cursor::new(script.to_string()), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("  "), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("خروج"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(" exit "), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse(":history"), ReplCommand::History);
        assert_eq!(
            ReplCommand::parse(" علاج الذاكرة "),
            ReplCommand::Ask("علاج الذاكرة".to_string())
        );
    }

    #[test]
    fn test_session_answers_and_quits() {
        let mut conv = conversation();
        let text = session(&mut conv, "علاج الذاكرة\n\n:stats\nخروج\nتعريف الانتباه\n");
        assert_eq!(conv.turn_count(), 1);
        assert!(text.contains("turns: 1"));
        assert!(text.contains("entries: 8"));
        assert!(text.contains("مع السلامة"));
    }

    #[test]
    fn test_session_ends_at_eof() {
        let mut conv = conversation();
        session(&mut conv, "علاج الذاكرة\nتعريف الانتباه");
        assert_eq!(conv.turn_count(), 2);
    }

    #[test]
    fn test_clear_resets_history() {
        let mut conv = conversation();
        let text = session(&mut conv, "علاج الذاكرة\n:clear\n:history\n");
        assert_eq!(conv.turn_count(), 0);
        assert!(text.contains("history cleared"));
        assert!(text.contains("no turns yet"));
    }
}
