use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single news headline as handed over by the ingestion layer.
///
/// Only `title` is required. Missing metadata stays `None` all the way
/// through to the exported evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Publisher name, e.g. "Reuters".
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Headline {
    /// Create a headline with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            source: None,
            url: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// True when the title has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Build the evidence entry this headline contributes under `pattern`.
    pub fn evidence(&self, pattern: &str) -> EvidenceEntry {
        EvidenceEntry {
            date: self.date,
            title: self.title.clone(),
            source: self.source.clone(),
            url: self.url.clone(),
            pattern: pattern.to_string(),
        }
    }
}

/// One supporting headline on an edge.
///
/// Field order defines the derived ordering: evidence samples keep the
/// smallest entries by (date, title, source, url, pattern), which makes the
/// sample independent of ingestion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub source: Option<String>,
    pub url: Option<String>,
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_detected() {
        assert!(Headline::new("   ").is_blank());
        assert!(Headline::new("").is_blank());
        assert!(!Headline::new("Gold rises").is_blank());
    }

    #[test]
    fn evidence_carries_metadata() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let h = Headline::new("Dollar slips after payrolls")
            .with_date(date)
            .with_source("Reuters")
            .with_url("https://example.com/a");
        let e = h.evidence("explicit_on_after");
        assert_eq!(e.date, Some(date));
        assert_eq!(e.source.as_deref(), Some("Reuters"));
        assert_eq!(e.pattern, "explicit_on_after");
    }

    #[test]
    fn undated_evidence_sorts_first() {
        let dated = Headline::new("a")
            .with_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .evidence("p");
        let undated = Headline::new("z").evidence("p");
        assert!(undated < dated);
    }

    #[test]
    fn deserializes_with_missing_metadata() {
        let h: Headline = serde_json::from_str(r#"{"title":"Stocks rally"}"#).unwrap();
        assert_eq!(h.title, "Stocks rally");
        assert!(h.date.is_none() && h.source.is_none() && h.url.is_none());
    }
}
