use serde::Deserialize;
use serde_json::Value;

use super::json::{self, Lookup};
use super::types::{BASE_URL, SearchResultItem};
use crate::error::{Error, Result};

/// Path to the section list on a results page.
pub const SECTIONS_PATH: &[&str] = &[
    "contents",
    "twoColumnSearchResultsRenderer",
    "primaryContents",
    "sectionListRenderer",
    "contents",
];

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub search_terms: String,
    /// Zero or negative means no limit.
    pub limit: i32,
}

impl SearchOptions {
    pub fn new(search_terms: impl Into<String>, limit: i32) -> Self {
        Self {
            search_terms: search_terms.into(),
            limit,
        }
    }
}

pub fn search_url(terms: &str) -> Result<String> {
    if terms.trim().is_empty() {
        return Err(Error::EmptySearchTerms);
    }
    Ok(format!(
        "{BASE_URL}/results?search_query={}",
        urlencoding::encode(terms)
    ))
}

/// Extracts search results from a results page.
pub fn parse_search(html: &str, limit: i32) -> Result<Vec<SearchResultItem>> {
    let tree = json::initial_data(html)?;
    search_results(&tree, limit)
}

pub fn search_results(tree: &Value, limit: i32) -> Result<Vec<SearchResultItem>> {
    let sections = tree
        .get_path(SECTIONS_PATH)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            log::warn!("search results page has no section list");
            Error::StructureNotFound("contents.twoColumnSearchResultsRenderer")
        })?;

    let limit = usize::try_from(limit).ok().filter(|n| *n > 0);
    let mut results: Vec<SearchResultItem> = Vec::new();

    'sections: for section in sections {
        for item in section.get_array(&["itemSectionRenderer", "contents"]) {
            let Some(renderer) = item.get("videoRenderer") else {
                continue;
            };
            let video = SearchResultItem::deserialize(renderer).map_err(Error::json_decode)?;
            results.push(video);
            if limit.is_some_and(|n| results.len() >= n) {
                break 'sections;
            }
        }
    }

    log::debug!("extracted {} search result(s)", results.len());
    if results.is_empty() {
        return Err(Error::NoResultsFound);
    }
    Ok(results)
}
