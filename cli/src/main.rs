//! CLI entrypoint for folio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_application::{
    AskProgressNotifier, AskQuestionUseCase, BehaviorConfig, NoProgress, SendMessageInput,
    SendMessageUseCase,
};
use folio_domain::{OutputFormat, Portfolio, PresetQuestions, RuleSet, Section};
use folio_infrastructure::{ConfigLoader, FileConfig, JsonlInteractionLogger, JsonlMessageOutbox};
use folio_presentation::{
    ChatRepl, Cli, OutputConfig, ReplConfig, SimpleProgress, ThinkingSpinner, formatter_for,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration (before logging, so logging.file can be honored)
    let loaded = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let config = loaded
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")?;

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting folio");

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply_color();

    // === Dependency Injection ===
    let portfolio = Arc::new(Portfolio::default_profile());
    let rules = Arc::new(RuleSet::standard());
    let presets = Arc::new(PresetQuestions::standard());

    let behavior = if cli.no_delay {
        BehaviorConfig::immediate()
    } else {
        config.behavior.to_behavior_config()
    };

    let mut use_case = AskQuestionUseCase::new(rules, presets).with_behavior(behavior);
    if let Some(path) = config.logging.transcript.as_deref()
        && let Some(logger) = JsonlInteractionLogger::new(path)
    {
        use_case = use_case.with_interaction_logger(Arc::new(logger));
    }

    let formatter = formatter_for(output.format);

    if cli.list_presets {
        print!("{}", formatter.format_presets(use_case.presets()));
        return Ok(());
    }

    if cli.send_message {
        return send_message(&cli, &config, output.format).await;
    }

    if cli.chat {
        let repl = ChatRepl::new(use_case, portfolio).with_config(ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.as_deref().map(PathBuf::from),
        });
        repl.run().await?;
        return Ok(());
    }

    if cli.wants_answer() {
        let selection = cli.question_selection(use_case.presets())?;

        let show_spinner =
            !cli.quiet && config.repl.show_progress && output.format == OutputFormat::Text;
        let spinner = ThinkingSpinner::new();
        let progress: &dyn AskProgressNotifier = match (show_spinner, output.color) {
            (false, _) => &NoProgress,
            (true, true) => &spinner,
            (true, false) => &SimpleProgress,
        };

        match use_case.ask(&selection, progress).await {
            Some(interaction) => println!("{}", formatter.format_interaction(&interaction)),
            None => eprintln!("Nothing to ask. Type a question or use --preset N."),
        }
        return Ok(());
    }

    let sections: Vec<Section> = match cli.section {
        Some(section) => vec![section],
        None => Section::all().to_vec(),
    };
    for section in sections {
        println!(
            "{}",
            formatter.format_section(&portfolio, section, use_case.presets())
        );
    }

    Ok(())
}

/// Install the tracing subscriber. Writes to `log_file` when set, else stderr.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let file_target = log_file.map(Path::new).and_then(|path| {
        let file_name = path.file_name()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).ok()?;
        Some(tracing_appender::rolling::never(dir, file_name))
    });

    match file_target {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            None
        }
    }
}

async fn send_message(cli: &Cli, config: &FileConfig, format: OutputFormat) -> Result<()> {
    let Some(path) = config.logging.outbox_path() else {
        bail!("No outbox location available. Set logging.outbox in the config file.");
    };

    let use_case = SendMessageUseCase::new(Arc::new(JsonlMessageOutbox::new(path)));
    let input = SendMessageInput::new(
        cli.name.clone().unwrap_or_default(),
        cli.email.clone().unwrap_or_default(),
        cli.message.clone().unwrap_or_default(),
    );

    let message = use_case.execute(input).await?;
    println!("{}", formatter_for(format).format_message_sent(&message));
    Ok(())
}
