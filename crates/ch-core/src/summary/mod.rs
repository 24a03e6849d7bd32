//! Document summary — entry counts per top-level section.

use crate::document::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Number of top-level keys.
    pub categories: usize,
    pub educational_links: usize,
    pub pdf_lectures: usize,
    pub schedules_sections: usize,
    pub student_tips: usize,
    pub technical_issues: usize,
    pub tools_software: usize,
    pub faq: usize,
}

impl DocumentSummary {
    pub fn of(doc: &Document) -> Self {
        Self {
            categories: doc.len_at(&[]),
            educational_links: doc.len_at(&["educational_links"]),
            pdf_lectures: doc.len_at(&["pdf_lectures"]),
            schedules_sections: doc.len_at(&["schedules_sections"]),
            student_tips: doc.len_at(&["student_tips"]),
            technical_issues: doc.len_at(&["technical_issues"]),
            tools_software: doc.len_at(&["tools_software"]),
            faq: doc.len_at(&["faq"]),
        }
    }
}
