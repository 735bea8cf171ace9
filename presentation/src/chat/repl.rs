//! REPL (Read-Eval-Print Loop) for interactive Q&A

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::PortfolioFormatter;
use crate::progress::reporter::ThinkingSpinner;
use colored::Colorize;
use folio_application::{AskProgressNotifier, AskQuestionUseCase, NoProgress};
use folio_domain::{Portfolio, QuestionSelection, Section};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free-text question
    Ask(String),
    /// `/ask N`, with a one-based preset number
    AskPreset(usize),
    /// `/section NAME`
    ShowSection(Section),
    /// `/sections`
    ListSections,
    /// `/presets`
    ListPresets,
    Help,
    Quit,
    /// Blank line
    Empty,
    /// Anything else starting with `/`
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        if !line.starts_with('/') {
            return ReplCommand::Ask(line.to_string());
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/presets" | "/p" => ReplCommand::ListPresets,
            "/sections" => ReplCommand::ListSections,
            "/ask" | "/a" => match arg.parse::<usize>() {
                Ok(n) => ReplCommand::AskPreset(n),
                Err(_) => ReplCommand::Invalid(format!("/ask expects a preset number, got '{arg}'")),
            },
            "/section" | "/s" => match arg.parse::<Section>() {
                Ok(section) => ReplCommand::ShowSection(section),
                Err(e) => ReplCommand::Invalid(e.to_string()),
            },
            _ => ReplCommand::Invalid(format!("Unknown command: {cmd}")),
        }
    }
}

enum CommandResult {
    Continue,
    Exit,
}

/// Interactive Q&A REPL
pub struct ChatRepl {
    use_case: AskQuestionUseCase,
    portfolio: Arc<Portfolio>,
    config: ReplConfig,
    formatter: ConsoleFormatter,
}

impl ChatRepl {
    pub fn new(use_case: AskQuestionUseCase, portfolio: Arc<Portfolio>) -> Self {
        Self {
            use_case,
            portfolio,
            config: ReplConfig::default(),
            formatter: ConsoleFormatter,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("ask> ") {
                Ok(line) => {
                    let command = ReplCommand::parse(&line);
                    if command == ReplCommand::Empty {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.trim());

                    if let CommandResult::Exit = self.handle(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│        Ask About My AI Experience           │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        println!("Type a question, or pick a preset with /ask N.");
        println!();
        print!("{}", self.formatter.format_presets(self.use_case.presets()));
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /ask N, /a N         - Ask preset question N");
        println!("  /presets, /p         - List preset questions");
        println!("  /section NAME, /s    - Show a portfolio section");
        println!("  /sections            - List sections");
        println!("  /help, /h, /?        - Show this help");
        println!("  /quit, /exit, /q     - Exit");
        println!();
    }

    async fn handle(&self, command: ReplCommand) -> CommandResult {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return CommandResult::Exit;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::ListPresets => {
                println!();
                print!("{}", self.formatter.format_presets(self.use_case.presets()));
                println!();
            }
            ReplCommand::ListSections => {
                println!();
                for section in Section::all() {
                    println!("  {:<15} {}", section.as_str(), section.title());
                }
                println!();
            }
            ReplCommand::ShowSection(section) => {
                println!();
                println!(
                    "{}",
                    self.formatter
                        .format_section(&self.portfolio, section, self.use_case.presets())
                );
            }
            ReplCommand::AskPreset(number) => match self.use_case.presets().by_number(number) {
                Ok(_) => self.ask(QuestionSelection::preset(number - 1)).await,
                Err(e) => println!("{}", e.to_string().red()),
            },
            ReplCommand::Ask(text) => self.ask(QuestionSelection::typed(text)).await,
            ReplCommand::Invalid(message) => {
                println!("{}", message.yellow());
                println!("Type /help for available commands");
            }
            ReplCommand::Empty => {}
        }
        CommandResult::Continue
    }

    async fn ask(&self, selection: QuestionSelection) {
        let spinner = ThinkingSpinner::new();
        let progress: &dyn AskProgressNotifier = if self.config.show_progress {
            &spinner
        } else {
            &NoProgress
        };

        println!();
        if let Some(interaction) = self.use_case.ask(&selection, progress).await {
            println!("{}", self.formatter.format_interaction(&interaction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(
            ReplCommand::parse("  What is prompt engineering? "),
            ReplCommand::Ask("What is prompt engineering?".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_ask_preset() {
        assert_eq!(ReplCommand::parse("/ask 3"), ReplCommand::AskPreset(3));
        assert_eq!(ReplCommand::parse("/a  1"), ReplCommand::AskPreset(1));
        assert!(matches!(ReplCommand::parse("/ask three"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_section_command() {
        assert_eq!(
            ReplCommand::parse("/section ai"),
            ReplCommand::ShowSection(Section::AiExperience)
        );
        assert!(matches!(ReplCommand::parse("/section blog"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_quit_aliases() {
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(ReplCommand::parse(cmd), ReplCommand::Quit);
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/models"),
            ReplCommand::Invalid("Unknown command: /models".to_string())
        );
    }
}
