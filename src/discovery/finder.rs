use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::core::constants::urls::URL_PATTERN;
use crate::reporting::logging;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("Failed to compile URL regex pattern"));

pub trait UrlFinder {
    fn find_urls(&self, document: &Value) -> Vec<String>;
}

#[derive(Default, Debug)]
pub struct Finder {}

impl UrlFinder for Finder {
    fn find_urls(&self, document: &Value) -> Vec<String> {
        let matches = Self::collect_urls(document);
        let total_found = matches.len();

        let unique_urls = Self::deduplicate_urls(matches);
        logging::log_url_discovery(unique_urls.len(), total_found);

        unique_urls
    }
}

impl Finder {
    /// Collect every URL match in every string value of the document.
    ///
    /// Uses an explicit worklist so deeply nested documents cannot overflow
    /// the stack. Children are pushed in reverse so matches come out in
    /// document order. Mapping keys are never scanned.
    fn collect_urls(document: &Value) -> Vec<&str> {
        let mut matches = Vec::new();
        let mut pending = vec![document];

        while let Some(node) = pending.pop() {
            match node {
                Value::Object(map) => pending.extend(map.values().rev()),
                Value::Array(items) => pending.extend(items.iter().rev()),
                Value::String(text) => Self::parse_urls(text, &mut matches),
                Value::Null | Value::Bool(_) | Value::Number(_) => {}
            }
        }

        matches
    }

    fn parse_urls<'a>(text: &'a str, matches: &mut Vec<&'a str>) {
        matches.extend(URL_REGEX.find_iter(text).map(|m| m.as_str()));
    }

    /// Drop repeated URLs, keeping the first occurrence of each
    fn deduplicate_urls(urls: Vec<&str>) -> Vec<String> {
        let mut seen_urls = FxHashSet::with_capacity_and_hasher(urls.len(), Default::default());

        urls.into_iter()
            .filter(|url| seen_urls.insert(*url))
            .map(str::to_string)
            .collect()
    }
}

/// Extract the unique URLs found anywhere in a document, in first-seen order.
pub fn extract_urls(document: &Value) -> Vec<String> {
    Finder::default().find_urls(document)
}
