//! Category keyword tables.
//!
//! Queries are lowercased before matching, so every keyword here must already
//! be lowercase. Arabic entries are matched as exact substrings.

// ---------------------------------------------------------------------------
// Educational links
// ---------------------------------------------------------------------------

pub const PROGRAMMING: &[&str] = &["برمجة", "programming", "python", "java", "c++"];
pub const NETWORKS: &[&str] = &["شبكات", "networks"];
pub const MATHEMATICS: &[&str] = &["رياضيات", "math", "جبر", "algebra"];

/// Link categories in output order, each keyed by its `educational_links` entry.
pub const LINK_CATEGORIES: &[(&str, &[&str])] = &[
    ("programming", PROGRAMMING),
    ("networks", NETWORKS),
    ("mathematics", MATHEMATICS),
];

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

pub const EXAM: &[&str] = &["كويز", "quiz", "امتحان", "exam"];
pub const LECTURE: &[&str] = &["محاضرة", "lecture", "جدول", "schedule"];

// ---------------------------------------------------------------------------
// Student tips
// ---------------------------------------------------------------------------

pub const STUDY: &[&str] = &["دراسة", "study", "نصيحة", "tip"];
pub const PROFESSOR: &[&str] = &["دكتور", "professor", "معيد", "teacher"];

// ---------------------------------------------------------------------------
// Technical help
// ---------------------------------------------------------------------------

pub const EXCEL: &[&str] = &["excel", "اكسل"];
pub const TECH_PROBLEM: &[&str] = &["تحميل", "download", "مشكلة", "problem"];

// ---------------------------------------------------------------------------
// PDF lectures
// ---------------------------------------------------------------------------

pub const PDF_MATHEMATICS: &[&str] = &["رياضيات", "math"];
pub const PDF_COMPUTER_SCIENCE: &[&str] = &["حاسب", "it"];
pub const PDF_ELECTRONICS: &[&str] = &["إلكترونيك", "electronics"];

/// True if `text` contains any of `keywords` as a substring.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
