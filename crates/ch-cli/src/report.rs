//! Plain-text report of result bundles, one line per key.

use ch_core::bundle::ResultBundle;
use ch_search::QueryAssistant;
use std::io::Write;
use std::path::Path;

/// Queries run by the binary on start-up.
pub const DEMO_QUERIES: [&str; 5] = [
    "كورس برمجة بايثون",
    "متى كويز الرياضيات",
    "نصائح للدراسة",
    "مشكلة في Excel",
    "ملفات PDF الرياضيات",
];

/// Write one bundle: a `query:` heading, then `  <key>: <json>` per entry.
pub fn write_bundle<W: Write>(out: &mut W, query: &str, bundle: &ResultBundle) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "query: {query}")?;
    if bundle.is_empty() {
        writeln!(out, "  no results")?;
        return Ok(());
    }
    for (key, value) in bundle.entries() {
        if key == "query" {
            continue;
        }
        writeln!(out, "  {key}: {}", serde_json::to_string(&value)?)?;
    }
    Ok(())
}

/// Entry-point body: a single failure line when nothing was loaded from
/// `data_file`, otherwise the full demo report.
pub fn run<W: Write>(assistant: &QueryAssistant, data_file: &Path, out: &mut W) -> anyhow::Result<()> {
    if assistant.is_empty() {
        writeln!(out, "failed to load data from {}", data_file.display())?;
        return Ok(());
    }
    run_demo(assistant, out)
}

/// Run every demo query against `assistant` and write the report.
pub fn run_demo<W: Write>(assistant: &QueryAssistant, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Campus helper")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for query in DEMO_QUERIES {
        let bundle = assistant.comprehensive_search(query);
        write_bundle(out, query, &bundle)?;
    }
    writeln!(out)?;
    writeln!(out, "done")?;
    Ok(())
}
