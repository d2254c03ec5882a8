use quick_xml::de::from_str;
use serde::Deserialize;

use crate::{
    config::QueryDescriptor,
    error::Result,
    model::{FeedMetadata, Paper},
};

pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

// URL query creator
macro_rules! query_url {
    () => {
        "{}?search_query={}&start={}&max_results={}"
    };
}

#[derive(Debug)]
pub struct ArxivClient {
    base_url: String,
}

impl ArxivClient {
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_API_URL)
    }

    // lets tests point the client at a stub server
    pub fn with_base_url(base_url: &str) -> Self {
        ArxivClient {
            base_url: base_url.to_string(),
        }
    }

    fn create_query_url(&self, descriptor: &QueryDescriptor) -> String {
        format!(
            query_url!(),
            self.base_url, descriptor.query, descriptor.start, descriptor.max_entries
        )
    }

    /// Runs one saved search against the API and parses the Atom
    /// response. Transport failures, non-success statuses and parse
    /// errors all abort the run; there is no retry.
    pub fn fetch(&self, descriptor: &QueryDescriptor) -> Result<(FeedMetadata, Vec<Paper>)> {
        let url = self.create_query_url(descriptor);
        let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
        let document: AtomFeed = from_str(body.as_str())?;
        let metadata = document.metadata();

        println!("Feed title: {}", metadata.title);
        println!("Feed last updated: {}", metadata.updated);
        println!("totalResults for this query: {}", metadata.total_results);
        println!("itemsPerPage for this query: {}", metadata.items_per_page);
        println!("startIndex for this query: {}", metadata.start_index);

        let papers = document.entries.into_iter().map(Paper::from).collect();
        Ok((metadata, papers))
    }
}

// Raw Atom model. The feed carries result counters under the opensearch
// namespace and journal reference/DOI under the arxiv namespace; both
// prefixes are mapped declaratively through serde renames.

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AtomFeed {
    title: String,
    updated: String,
    #[serde(rename = "opensearch:totalResults")]
    total_results: String,
    #[serde(rename = "opensearch:itemsPerPage")]
    items_per_page: String,
    #[serde(rename = "opensearch:startIndex")]
    start_index: String,
    #[serde(rename = "entry")]
    entries: Vec<AtomEntry>,
}

impl AtomFeed {
    fn metadata(&self) -> FeedMetadata {
        FeedMetadata {
            title: self.title.clone(),
            updated: self.updated.clone(),
            total_results: self.total_results.clone(),
            items_per_page: self.items_per_page.clone(),
            start_index: self.start_index.clone(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AtomEntry {
    id: String,
    title: String,
    #[serde(rename = "author")]
    authors: Vec<AuthorField>,
    published: String,
    #[serde(rename = "arxiv:journal_ref")]
    journal_ref: Option<String>,
    #[serde(rename = "arxiv:doi")]
    doi: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct AuthorField {
    name: NameField,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct NameField {
    #[serde(rename = "$text")]
    value: String,
}

impl From<AtomEntry> for Paper {
    fn from(entry: AtomEntry) -> Self {
        Paper::new(
            entry.id,
            // multi-line titles come back with embedded newlines
            entry.title.replace("\n", " "),
            entry.authors.into_iter().map(|a| a.name.value).collect(),
            entry.published,
            entry.journal_ref,
            entry.doi,
        )
    }
}
