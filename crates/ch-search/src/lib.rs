//! ch-search: Keyword search over the campus knowledge document.
//!
//! Pipeline per query: lowercase → keyword tables → ordered rules → ResultBundle.
//! Nothing here fails; a missing or mistyped section is just an empty result.

pub mod assistant;
pub mod faq;
pub mod keywords;
pub mod rules;
pub mod search;

#[cfg(test)]
mod fixtures;

pub use assistant::QueryAssistant;
