//! Output formatter trait

use folio_domain::{ContactMessage, Interaction, OutputFormat, Portfolio, PresetQuestions, Section};

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;

/// Trait for formatting portfolio content and Q&A results
pub trait PortfolioFormatter {
    /// Format one portfolio section
    fn format_section(
        &self,
        portfolio: &Portfolio,
        section: Section,
        presets: &PresetQuestions,
    ) -> String;

    /// Format a question together with its answer
    fn format_interaction(&self, interaction: &Interaction) -> String;

    /// Format the numbered preset question list
    fn format_presets(&self, presets: &PresetQuestions) -> String;

    /// Confirmation after a contact message was queued
    fn format_message_sent(&self, message: &ContactMessage) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn PortfolioFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
