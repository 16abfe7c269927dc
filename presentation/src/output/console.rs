//! Console output formatter for prompt reports

use colored::Colorize;
use promptcraft_domain::{OutputFormat, PromptReport, TemplateCatalog};

/// Formats prompt reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a report in the requested format
    pub fn render(report: &PromptReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Prompt => Self::format_prompt_only(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Like [`Self::render`], with a banner line for the full format only
    pub fn render_demo(report: &PromptReport, format: OutputFormat) -> String {
        let body = Self::render(report, format);
        match format {
            OutputFormat::Full => format!(
                "Running demo: {} / \"{}\"\n{}",
                report.domain, report.user_input, body
            ),
            OutputFormat::Prompt | OutputFormat::Json => body,
        }
    }

    /// Format the complete report: prompt, suggestions and scores
    pub fn format(report: &PromptReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Generator"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Domain:".cyan().bold(),
            report.domain
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Input:".cyan().bold(),
            report.user_input
        ));

        output.push_str(&Self::section_header("Generated Prompt"));
        output.push_str(&format!("\n{}\n", report.prompt));

        output.push_str(&Self::section_header("Improved Prompt Suggestions"));
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n{}\n{} {}\n",
                format!("Option {}", i + 1).yellow().bold(),
                suggestion.text,
                "Similarity Score:".dimmed(),
                suggestion.score
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &PromptReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the generated prompt only
    pub fn format_prompt_only(report: &PromptReport) -> String {
        format!("{}\n", report.prompt)
    }

    /// List every domain with its aliases-friendly slug and templates
    pub fn format_catalog() -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Chatbot Domains"));
        output.push('\n');

        for (domain, templates) in TemplateCatalog::entries() {
            output.push_str(&format!(
                "\n{} {}\n",
                domain.display_name().yellow().bold(),
                format!("({})", domain.slug()).dimmed()
            ));
            for (i, template) in templates.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, template.text()));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
