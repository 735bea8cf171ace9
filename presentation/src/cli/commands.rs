//! CLI command definitions

use clap::{Parser, ValueEnum};
use folio_domain::{DomainError, OutputFormat, PresetQuestions, QuestionSelection, Section};
use std::path::PathBuf;

/// Output format flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Styled console text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for folio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Terminal portfolio with a scripted AI Q&A panel")]
#[command(long_about = r#"
folio renders a developer portfolio in the terminal and answers questions
about the author's AI experience from a fixed set of scripted answers.

With no arguments every section is printed, starting with Home.

Configuration files are loaded from (in priority order):
1. FOLIO_* environment variables
2. --config <path>     Explicit config file
3. ./folio.toml        Project-level config
4. ~/.config/folio/config.toml   Global config

Example:
  folio --section skills
  folio --list-presets
  folio --preset 3
  folio "What interests you about generative AI?"
  folio --chat
  folio --send-message --name Ada --email ada@example.com --message "Hello!"
"#)]
pub struct Cli {
    /// Question to ask (overrides --preset when non-empty)
    pub question: Option<String>,

    /// Ask a preset question by number (see --list-presets)
    #[arg(short, long, value_name = "N")]
    pub preset: Option<usize>,

    /// Render a single section: home, skills, projects, ai, contact
    #[arg(short, long, value_name = "NAME")]
    pub section: Option<Section>,

    /// Start interactive Q&A mode
    #[arg(short, long)]
    pub chat: bool,

    /// List the preset questions and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the "Thinking..." indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Reveal answers immediately
    #[arg(long)]
    pub no_delay: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Send a contact message (requires --name, --email and --message)
    #[arg(long, requires_all = ["name", "email", "message"])]
    pub send_message: bool,

    /// Sender name for --send-message
    #[arg(long, value_name = "NAME", requires = "send_message")]
    pub name: Option<String>,

    /// Sender email for --send-message
    #[arg(long, value_name = "EMAIL", requires = "send_message")]
    pub email: Option<String>,

    /// Message body for --send-message
    #[arg(long, value_name = "TEXT", requires = "send_message")]
    pub message: Option<String>,
}

impl Cli {
    /// Whether the invocation asks a question (typed or preset)
    pub fn wants_answer(&self) -> bool {
        self.question.is_some() || self.preset.is_some()
    }

    /// Build the selection to ask from the positional question and `--preset`.
    ///
    /// Non-blank typed text wins and the preset number is ignored, even when
    /// it is out of range. Otherwise `--preset N` (1-based) must name an
    /// existing preset. With neither, the selection resolves to nothing.
    pub fn question_selection(
        &self,
        presets: &PresetQuestions,
    ) -> Result<QuestionSelection, DomainError> {
        if let Some(typed) = self.question.as_deref()
            && !typed.trim().is_empty()
        {
            return Ok(QuestionSelection::typed(typed));
        }

        match self.preset {
            Some(number) => {
                presets.by_number(number)?;
                Ok(QuestionSelection::preset(number - 1))
            }
            None => Ok(QuestionSelection::default()),
        }
    }
}
