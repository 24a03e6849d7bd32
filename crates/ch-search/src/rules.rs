//! Ordered first-match rule tables.
//!
//! A search with priorities is a slice of [`Rule`]s; the first rule whose
//! trigger fires selects the result. Table order is the priority order.

use crate::keywords::contains_any;
use ch_core::document::Document;

#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Fires when the lowercased query contains any keyword.
    AnyOf(&'static [&'static str]),
    /// Always fires; used as the fallback at the end of a table.
    Always,
}

impl Trigger {
    pub fn fires(&self, query_lower: &str) -> bool {
        match self {
            Trigger::AnyOf(keywords) => contains_any(query_lower, keywords),
            Trigger::Always => true,
        }
    }
}

/// One (trigger, selector) entry.
pub struct Rule<T> {
    pub name: &'static str,
    pub trigger: Trigger,
    pub select: fn(&Document) -> T,
}

/// The first rule in `rules` that fires for `query_lower`.
pub fn first_match<'r, T>(rules: &'r [Rule<T>], query_lower: &str) -> Option<&'r Rule<T>> {
    rules.iter().find(|rule| rule.trigger.fires(query_lower))
}

/// Run the selector of the first firing rule against `doc`.
pub fn evaluate<T>(rules: &[Rule<T>], query_lower: &str, doc: &Document) -> Option<T> {
    let rule = first_match(rules, query_lower)?;
    tracing::debug!(rule = rule.name, "rule matched");
    Some((rule.select)(doc))
}
