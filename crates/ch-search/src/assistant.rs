//! Query assistant — owns the loaded document and runs every search over it.

use crate::{faq, search};
use ch_core::bundle::ResultBundle;
use ch_core::config::AssistantConfig;
use ch_core::document::Document;
use ch_core::summary::DocumentSummary;
use serde_json::{Map, Value};
use std::path::Path;

/// Read-only search front-end over one [`Document`].
#[derive(Debug, Clone, Default)]
pub struct QueryAssistant {
    doc: Document,
}

impl QueryAssistant {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    /// Load `path`. A missing or unparsable file is logged and replaced by an
    /// empty document; the caller never sees the error.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Document::load(path) {
            Ok(doc) => {
                tracing::info!(
                    path = %path.display(),
                    categories = doc.len_at(&[]),
                    "loaded data file"
                );
                Self::new(doc)
            }
            Err(e) => {
                tracing::error!("{e}; continuing with an empty document");
                Self::default()
            }
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::open(&config.data_file)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// True when loading failed or the file held no data.
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary::of(&self.doc)
    }

    pub fn search_links(&self, query: &str) -> Map<String, Value> {
        search::search_links(&self.doc, query)
    }

    pub fn search_schedules(&self, query: &str) -> Value {
        search::search_schedules(&self.doc, query)
    }

    pub fn search_tips(&self, query: &str) -> Vec<Value> {
        search::search_tips(&self.doc, query)
    }

    pub fn search_technical_help(&self, query: &str) -> Value {
        search::search_technical_help(&self.doc, query)
    }

    pub fn search_pdfs(&self, subject: &str) -> Vec<Value> {
        search::search_pdfs(&self.doc, subject)
    }

    pub fn get_faq_answer(&self, question: &str) -> Option<String> {
        faq::get_faq_answer(&self.doc, question)
    }

    /// Run links, schedules, tips, technical help and FAQ for one query and
    /// keep only the non-empty results.
    pub fn comprehensive_search(&self, query: &str) -> ResultBundle {
        ResultBundle::assemble(
            query,
            self.search_links(query),
            self.search_schedules(query),
            self.search_tips(query),
            self.search_technical_help(query),
            self.get_faq_answer(query),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_document, SAMPLE_JSON};
    use ch_core::document::is_empty_value;
    use std::io::Write;

    #[test]
    fn open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = QueryAssistant::open(dir.path().join("whatsapp-university-data.json"));
        assert!(assistant.is_empty());
        assert_eq!(assistant.comprehensive_search("exam").entries().len(), 1);
    }

    #[test]
    fn open_malformed_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let assistant = QueryAssistant::open(file.path());
        assert!(assistant.is_empty());
        assert!(assistant.search_pdfs("math").is_empty());
        assert!(assistant.get_faq_answer("anything").is_none());
    }

    #[test]
    fn open_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        let config = AssistantConfig {
            data_file: file.path().to_path_buf(),
        };
        let assistant = QueryAssistant::from_config(&config);
        assert!(!assistant.is_empty());
        assert_eq!(assistant.document(), &sample_document());
    }

    #[test]
    fn comprehensive_programming_query() {
        let assistant = QueryAssistant::new(sample_document());
        let bundle = assistant.comprehensive_search("كورس برمجة بايثون");
        assert_eq!(bundle.query.as_deref(), Some("كورس برمجة بايثون"));
        let links = bundle.educational_links.as_ref().unwrap();
        assert!(links.contains_key("programming"));
        // No exam/lecture keyword: the whole schedules section comes back.
        assert_eq!(
            bundle.schedules.as_ref(),
            assistant.document().get(&["schedules_sections"])
        );
        assert!(bundle.technical_help.is_none());
        assert!(bundle.faq_answer.is_none());
    }

    #[test]
    fn comprehensive_excel_query() {
        let assistant = QueryAssistant::new(sample_document());
        let bundle = assistant.comprehensive_search("مشكلة في Excel");
        assert!(bundle.educational_links.is_none());
        assert_eq!(
            bundle.technical_help.as_ref(),
            assistant.document().get(&["technical_issues", "excel_2003"])
        );
        assert_eq!(
            bundle.faq_answer.as_deref(),
            Some("احفظ الملف بصيغة xls أو ثبت حزمة التوافق")
        );
    }

    #[test]
    fn comprehensive_never_keeps_empty_results() {
        let assistant = QueryAssistant::new(sample_document());
        let queries = [
            "كورس برمجة بايثون",
            "متى كويز الرياضيات",
            "نصائح للدراسة",
            "مشكلة في Excel",
            "ملفات PDF الرياضيات",
            "hello",
            "",
        ];
        for query in queries {
            let bundle = assistant.comprehensive_search(query);
            for (key, value) in bundle.entries() {
                assert!(!is_empty_value(&value), "{key} kept empty for {query:?}");
            }
        }

        let empty = QueryAssistant::new(Document::empty());
        let bundle = empty.comprehensive_search("exam study excel");
        assert_eq!(bundle.entries().len(), 1);
        // A matched link category is reported even when the document lacks it.
        let bundle = empty.comprehensive_search("python");
        assert_eq!(
            bundle.educational_links.unwrap().get("programming"),
            Some(&serde_json::json!({}))
        );
        assert!(empty.comprehensive_search("").is_empty());
    }

    #[test]
    fn summary_counts_sample() {
        let summary = QueryAssistant::new(sample_document()).summary();
        assert_eq!(summary.categories, 8);
        assert_eq!(summary.educational_links, 3);
        assert_eq!(summary.pdf_lectures, 3);
        assert_eq!(summary.schedules_sections, 2);
        assert_eq!(summary.student_tips, 2);
        assert_eq!(summary.technical_issues, 2);
        assert_eq!(summary.tools_software, 2);
        assert_eq!(summary.faq, 3);
    }

    #[test]
    fn assistant_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryAssistant>();
    }
}
