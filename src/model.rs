use serde::{Deserialize, Serialize};

// Value objects flowing through the pipeline: created once per fetch,
// discarded after the HTML fragment is written.

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    // kept in the feed's string form; ordering compares these
    // lexicographically, not as calendar dates
    pub published: String,
    pub journal_ref: Option<String>,
    // may hold several space-separated DOIs in one string
    pub doi: Option<String>,
}

impl Paper {
    pub fn new(
        id: String,
        title: String,
        authors: Vec<String>,
        published: String,
        journal_ref: Option<String>,
        doi: Option<String>,
    ) -> Self {
        Paper {
            id,
            title,
            authors,
            published,
            journal_ref,
            doi,
        }
    }
}

/// Per-query response envelope. Diagnostic printing only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeedMetadata {
    pub title: String,
    pub updated: String,
    pub total_results: String,
    pub items_per_page: String,
    pub start_index: String,
}
