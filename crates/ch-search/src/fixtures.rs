//! Shared test document: the sample data file shipped with the repo.

use ch_core::document::Document;

pub const SAMPLE_JSON: &str = include_str!("../../../data/whatsapp-university-data.json");

pub fn sample_document() -> Document {
    SAMPLE_JSON.parse().expect("sample data file parses")
}
