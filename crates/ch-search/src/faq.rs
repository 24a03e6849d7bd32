//! FAQ lookup.
//!
//! An entry matches when ANY whitespace-separated word of its question occurs
//! as a substring of the lowercased user question. Short common words therefore
//! over-match; that looseness is kept as-is.

use ch_core::document::Document;

/// Answer of the first FAQ entry (document order) whose question matches.
/// Entries without a string `question` never match. The scan stops at the
/// first match; if that entry's `answer` is not a string the result is `None`.
pub fn get_faq_answer(doc: &Document, question: &str) -> Option<String> {
    let question = question.to_lowercase();
    let entry = doc.get(&["faq"])?.as_array()?.iter().find(|entry| {
        entry
            .get("question")
            .and_then(|q| q.as_str())
            .is_some_and(|q| entry_matches(q, &question))
    })?;
    entry.get("answer")?.as_str().map(str::to_string)
}

/// True if any word of `entry_question` appears in `question_lower`.
pub fn entry_matches(entry_question: &str, question_lower: &str) -> bool {
    entry_question
        .to_lowercase()
        .split_whitespace()
        .any(|word| question_lower.contains(word))
}
