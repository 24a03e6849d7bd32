//! Per-category searches over the document.
//!
//! Each function lowercases the raw query itself, so callers pass user text as-is.

use crate::keywords::{self, contains_any, LINK_CATEGORIES};
use crate::rules::{self, Rule, Trigger};
use ch_core::document::Document;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Educational links
// ---------------------------------------------------------------------------

/// Every link category whose keywords appear in the query. No short-circuit:
/// a query may hit several categories.
pub fn search_links(doc: &Document, query: &str) -> Map<String, Value> {
    let query = query.to_lowercase();
    LINK_CATEGORIES
        .iter()
        .filter(|(_, keywords)| contains_any(&query, keywords))
        .map(|(name, _)| {
            (
                name.to_string(),
                doc.value_or_empty(&["educational_links", *name]),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

pub static SCHEDULE_RULES: &[Rule<Value>] = &[
    Rule {
        name: "exam_info",
        trigger: Trigger::AnyOf(keywords::EXAM),
        select: exam_info,
    },
    Rule {
        name: "academic_calendar",
        trigger: Trigger::AnyOf(keywords::LECTURE),
        select: academic_calendar,
    },
    Rule {
        name: "all_schedules",
        trigger: Trigger::Always,
        select: all_schedules,
    },
];

fn exam_info(doc: &Document) -> Value {
    doc.value_or_empty(&["schedules_sections", "exam_info"])
}

fn academic_calendar(doc: &Document) -> Value {
    doc.value_or_empty(&["schedules_sections", "academic_calendar"])
}

fn all_schedules(doc: &Document) -> Value {
    doc.value_or_empty(&["schedules_sections"])
}

pub fn search_schedules(doc: &Document, query: &str) -> Value {
    // SCHEDULE_RULES ends in `Trigger::Always`; this only covers a table without it.
    rules::evaluate(SCHEDULE_RULES, &query.to_lowercase(), doc)
        .unwrap_or_else(|| Value::Object(Map::new()))
}

// ---------------------------------------------------------------------------
// Student tips
// ---------------------------------------------------------------------------

pub static TIP_RULES: &[Rule<Vec<Value>>] = &[
    Rule {
        name: "study_and_professors",
        trigger: Trigger::AnyOf(keywords::STUDY),
        select: study_and_professors,
    },
    Rule {
        name: "recommended_professors",
        trigger: Trigger::AnyOf(keywords::PROFESSOR),
        select: recommended_professors,
    },
    Rule {
        name: "study_habits",
        trigger: Trigger::Always,
        select: study_habits,
    },
];

fn study_habits(doc: &Document) -> Vec<Value> {
    doc.list(&["student_tips", "study_habits"])
}

fn recommended_professors(doc: &Document) -> Vec<Value> {
    doc.list(&["student_tips", "recommended_professors"])
}

fn study_and_professors(doc: &Document) -> Vec<Value> {
    let mut tips = study_habits(doc);
    tips.extend(recommended_professors(doc));
    tips
}

pub fn search_tips(doc: &Document, query: &str) -> Vec<Value> {
    rules::evaluate(TIP_RULES, &query.to_lowercase(), doc).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Technical help
// ---------------------------------------------------------------------------

pub static TECHNICAL_RULES: &[Rule<Value>] = &[
    Rule {
        name: "excel_2003",
        trigger: Trigger::AnyOf(keywords::EXCEL),
        select: excel_2003,
    },
    Rule {
        name: "all_technical_issues",
        trigger: Trigger::AnyOf(keywords::TECH_PROBLEM),
        select: all_technical_issues,
    },
    Rule {
        name: "none",
        trigger: Trigger::Always,
        select: no_technical_help,
    },
];

fn excel_2003(doc: &Document) -> Value {
    doc.value_or_empty(&["technical_issues", "excel_2003"])
}

fn all_technical_issues(doc: &Document) -> Value {
    doc.value_or_empty(&["technical_issues"])
}

fn no_technical_help(_: &Document) -> Value {
    Value::Object(Map::new())
}

pub fn search_technical_help(doc: &Document, query: &str) -> Value {
    // TECHNICAL_RULES ends in `Trigger::Always`; this only covers a table without it.
    rules::evaluate(TECHNICAL_RULES, &query.to_lowercase(), doc)
        .unwrap_or_else(|| Value::Object(Map::new()))
}

// ---------------------------------------------------------------------------
// PDF lectures
// ---------------------------------------------------------------------------

pub static PDF_RULES: &[Rule<Vec<Value>>] = &[
    Rule {
        name: "mathematics",
        trigger: Trigger::AnyOf(keywords::PDF_MATHEMATICS),
        select: math_pdfs,
    },
    Rule {
        name: "computer_science",
        trigger: Trigger::AnyOf(keywords::PDF_COMPUTER_SCIENCE),
        select: computer_science_pdfs,
    },
    Rule {
        name: "electronics",
        trigger: Trigger::AnyOf(keywords::PDF_ELECTRONICS),
        select: electronics_pdfs,
    },
];

fn math_pdfs(doc: &Document) -> Vec<Value> {
    let mut pdfs = doc.list(&["pdf_lectures", "mathematics", "math_0"]);
    pdfs.extend(doc.list(&["pdf_lectures", "mathematics", "math_1"]));
    pdfs
}

fn computer_science_pdfs(doc: &Document) -> Vec<Value> {
    doc.list(&["pdf_lectures", "computer_science"])
}

fn electronics_pdfs(doc: &Document) -> Vec<Value> {
    doc.list(&["pdf_lectures", "electronics"])
}

/// Lecture files for a subject. Arabic has no case, so lowercasing the whole
/// subject only affects the English keywords.
pub fn search_pdfs(doc: &Document, subject: &str) -> Vec<Value> {
    rules::evaluate(PDF_RULES, &subject.to_lowercase(), doc).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
