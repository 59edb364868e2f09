use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Extracted texts keyed by URL.
///
/// Entries iterate in the order their URL was first inserted. Inserting a URL
/// that is already present replaces its texts but keeps its position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ScrapeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, texts: Vec<String>) {
        let url = url.into();
        match self.index.get(&url) {
            Some(&i) => self.entries[i].1 = texts,
            None => {
                self.index.insert(url.clone(), self.entries.len());
                self.entries.push((url, texts));
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&[String]> {
        self.index
            .get(url)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(url, texts)| (url.as_str(), texts.as_slice()))
    }
}

impl Serialize for ScrapeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (url, texts) in &self.entries {
            map.serialize_entry(url, texts)?;
        }
        map.end()
    }
}

struct ScrapeResultVisitor;

impl<'de> Visitor<'de> for ScrapeResultVisitor {
    type Value = ScrapeResult;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map from URL to a list of strings")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut result = ScrapeResult::new();
        while let Some((url, texts)) = access.next_entry::<String, Vec<String>>()? {
            result.insert(url, texts);
        }
        Ok(result)
    }
}

impl<'de> Deserialize<'de> for ScrapeResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScrapeResultVisitor)
    }
}
