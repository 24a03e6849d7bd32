//! campus-helper — loads the knowledge file and runs the demo queries.

mod report;

use ch_core::config::AssistantConfig;
use ch_search::QueryAssistant;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the report only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AssistantConfig::default();
    let assistant = QueryAssistant::from_config(&config);

    if !assistant.is_empty() {
        log_summary(&assistant);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::run(&assistant, &config.data_file, &mut out)
}

fn log_summary(assistant: &QueryAssistant) {
    let summary = assistant.summary();
    tracing::info!(
        categories = summary.categories,
        educational_links = summary.educational_links,
        pdf_lectures = summary.pdf_lectures,
        schedules_sections = summary.schedules_sections,
        student_tips = summary.student_tips,
        technical_issues = summary.technical_issues,
        tools_software = summary.tools_software,
        faq = summary.faq,
        "document summary"
    );
}
