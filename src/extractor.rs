use crate::ScraperError;
use scraper::{Html, Selector};

/// Pulls the trimmed text of every element matching one CSS selector.
#[derive(Debug)]
pub struct TagExtractor {
    tag: String,
    selector: Selector,
}

impl TagExtractor {
    pub fn new(tag: &str) -> Result<Self, ScraperError> {
        let selector = Selector::parse(tag)
            .map_err(|e| ScraperError::Selector(tag.to_string(), format!("{:?}", e)))?;
        Ok(Self {
            tag: tag.to_string(),
            selector,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Matches in document order, descendants' text included, empty ones dropped.
    pub fn extract(&self, doc: &Html) -> Vec<String> {
        doc.select(&self.selector)
            .map(|el| el.text().collect::<String>())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    pub fn extract_str(&self, html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }
}
