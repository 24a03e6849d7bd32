//! Result bundle — the pruned, per-category answer to one query.

use crate::document::is_empty_value;
use crate::UnknownCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ResultBundle
// ---------------------------------------------------------------------------

/// Combined search result. Every field is `None` when its search came back
/// empty, so serialization only ever emits non-empty keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Matched link categories (`programming`, `networks`, `mathematics`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_links: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_help: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_answer: Option<String>,
}

impl ResultBundle {
    /// Assemble a bundle from raw search results, dropping empty ones.
    pub fn assemble(
        query: &str,
        educational_links: Map<String, Value>,
        schedules: Value,
        tips: Vec<Value>,
        technical_help: Value,
        faq_answer: Option<String>,
    ) -> Self {
        Self {
            query: (!query.is_empty()).then(|| query.to_string()),
            educational_links: (!educational_links.is_empty()).then_some(educational_links),
            schedules: non_empty(schedules),
            tips: (!tips.is_empty()).then_some(tips),
            technical_help: non_empty(technical_help),
            faq_answer: faq_answer.filter(|a| !a.is_empty()),
        }
    }

    /// True when no key survived pruning, `query` included.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Present entries in bundle order, `query` first.
    pub fn entries(&self) -> Vec<(&'static str, Value)> {
        let mut out = Vec::new();
        if let Some(q) = &self.query {
            out.push(("query", Value::String(q.clone())));
        }
        if let Some(links) = &self.educational_links {
            out.push(("educational_links", Value::Object(links.clone())));
        }
        if let Some(s) = &self.schedules {
            out.push(("schedules", s.clone()));
        }
        if let Some(tips) = &self.tips {
            out.push(("tips", Value::Array(tips.clone())));
        }
        if let Some(t) = &self.technical_help {
            out.push(("technical_help", t.clone()));
        }
        if let Some(a) = &self.faq_answer {
            out.push(("faq_answer", Value::String(a.clone())));
        }
        out
    }

    /// Keep `query` plus the entries shown under `filter`. Library API for
    /// front-ends that present results by category tab; the demo binary
    /// always prints the full bundle.
    pub fn filtered(&self, filter: CategoryFilter) -> Self {
        if filter == CategoryFilter::All {
            return self.clone();
        }
        let mut out = Self {
            query: self.query.clone(),
            ..Self::default()
        };
        match filter {
            CategoryFilter::All => {}
            CategoryFilter::Courses => out.educational_links = self.educational_links.clone(),
            CategoryFilter::Schedules => out.schedules = self.schedules.clone(),
            CategoryFilter::Tips => out.tips = self.tips.clone(),
            CategoryFilter::Technical => out.technical_help = self.technical_help.clone(),
        }
        out
    }
}

fn non_empty(value: Value) -> Option<Value> {
    (!is_empty_value(&value)).then_some(value)
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Category tab a front-end shows, used with [`ResultBundle::filtered`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Courses,
    Schedules,
    Tips,
    Technical,
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Courses => "courses",
            Self::Schedules => "schedules",
            Self::Tips => "tips",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "courses" => Ok(Self::Courses),
            "schedules" => Ok(Self::Schedules),
            "tips" => Ok(Self::Tips),
            "technical" => Ok(Self::Technical),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResultBundle {
        let mut links = Map::new();
        links.insert("programming".into(), json!({"python": {"title": "Python"}}));
        ResultBundle::assemble(
            "كورس برمجة",
            links,
            json!({"quiz_schedule": ["week 5"]}),
            vec![json!("sleep early")],
            json!({}),
            None,
        )
    }

    #[test]
    fn assemble_prunes_empty_results() {
        let bundle = ResultBundle::assemble("q", Map::new(), json!({}), vec![], json!(null), Some(String::new()));
        assert_eq!(bundle.query.as_deref(), Some("q"));
        assert!(bundle.educational_links.is_none());
        assert!(bundle.schedules.is_none());
        assert!(bundle.tips.is_none());
        assert!(bundle.technical_help.is_none());
        assert!(bundle.faq_answer.is_none());
        assert!(!bundle.is_empty());
    }

    #[test]
    fn serializes_only_present_keys_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with(r#"{"query":"كورس برمجة","educational_links""#));
        assert!(!json.contains("technical_help"));
        assert!(!json.contains("faq_answer"));

        let keys: Vec<&str> = sample().entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["query", "educational_links", "schedules", "tips"]);
    }

    #[test]
    fn filter_keeps_query_and_category() {
        let tips_only = sample().filtered(CategoryFilter::Tips);
        assert_eq!(tips_only.query.as_deref(), Some("كورس برمجة"));
        assert_eq!(tips_only.tips, Some(vec![json!("sleep early")]));
        assert!(tips_only.educational_links.is_none());
        assert!(tips_only.schedules.is_none());

        assert_eq!(sample().filtered(CategoryFilter::All), sample());
        let technical = sample().filtered(CategoryFilter::Technical);
        assert_eq!(technical.entries().len(), 1);
    }

    #[test]
    fn parse_category_filter() {
        assert_eq!("Courses".parse::<CategoryFilter>(), Ok(CategoryFilter::Courses));
        assert_eq!(" tips ".parse::<CategoryFilter>(), Ok(CategoryFilter::Tips));
        assert_eq!(
            "pdfs".parse::<CategoryFilter>(),
            Err(UnknownCategory("pdfs".into()))
        );
        assert_eq!(CategoryFilter::Technical.to_string(), "technical");
    }
}
