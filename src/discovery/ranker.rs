use std::collections::BTreeMap;

use crate::core::constants::urls::DEFAULT_KEYWORDS;

/// Orders URLs by how many relevance keywords they mention.
///
/// A URL scores one point per distinct keyword found anywhere in it,
/// ignoring case. Ranking is a stable partition by score: higher scores
/// first, and URLs with equal scores keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceRanker {
    keywords: Vec<String>,
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl RelevanceRanker {
    /// Create a ranker; keywords are lowercased and repeated ones dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of distinct keywords occurring in the URL
    pub fn score(&self, url: &str) -> usize {
        let url = url.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| url.contains(keyword.as_str()))
            .count()
    }

    pub fn rank<I>(&self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut by_score: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for url in urls {
            by_score.entry(self.score(&url)).or_default().push(url);
        }

        by_score.into_values().rev().flatten().collect()
    }
}

/// Score a single URL against a keyword list
pub fn relevance_score<S: AsRef<str>>(url: &str, keywords: &[S]) -> usize {
    RelevanceRanker::new(keywords).score(url)
}

/// Rank URLs by relevance, using the default keywords when none are given
pub fn sort_urls_by_relevance(urls: &[String], keywords: Option<&[String]>) -> Vec<String> {
    let ranker = keywords.map_or_else(RelevanceRanker::default, RelevanceRanker::new);
    ranker.rank(urls.iter().cloned())
}
