use dotenvy;
use serde::Deserialize;
use std::{env, fs::File};

use crate::{error::Result, format::RenderOptions};

const ENV_FILE: &str = "groupfeed.env";

const DEFAULT_QUERIES_FILE: &str = "search_queries.json";
const DEFAULT_OUTPUT_FILE: &str = "arxiv_group_feed.html";
const DEFAULT_MAX_ENTRIES: usize = 50;

/// One saved search: query text plus its pagination window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryDescriptor {
    pub query: String,
    pub start: u32,
    pub max_entries: u32,
}

#[derive(Debug)]
pub struct GroupConfig {
    pub queries_file: String,
    pub output_file: String,
    pub max_entries: usize,
    pub legacy_truncation: bool,
    pub escape_html: bool,
}

impl GroupConfig {
    pub fn default() -> Self {
        GroupConfig {
            queries_file: String::from(DEFAULT_QUERIES_FILE),
            output_file: String::from(DEFAULT_OUTPUT_FILE),
            max_entries: DEFAULT_MAX_ENTRIES,
            legacy_truncation: true,
            escape_html: false,
        }
    }

    /// Reads overrides from the environment. The env file and every
    /// variable are optional; the query file is the only required input.
    pub fn from_env() -> Self {
        dotenvy::from_filename(ENV_FILE).ok();
        let defaults = Self::default();
        GroupConfig {
            queries_file: get_string_from_env("GROUPFEED_QUERIES", defaults.queries_file),
            output_file: get_string_from_env("GROUPFEED_OUTPUT", defaults.output_file),
            max_entries: get_parsed_from_env("GROUPFEED_MAX_ENTRIES", defaults.max_entries),
            legacy_truncation: get_parsed_from_env(
                "GROUPFEED_LEGACY_TRUNCATION",
                defaults.legacy_truncation,
            ),
            escape_html: get_parsed_from_env("GROUPFEED_ESCAPE_HTML", defaults.escape_html),
        }
    }

    /// Loads the saved searches, in file order. Missing or malformed
    /// files abort the run.
    pub fn load_queries(&self) -> Result<Vec<QueryDescriptor>> {
        let file = File::open(&self.queries_file)?;
        let descriptors = serde_json::from_reader(file)?;
        Ok(descriptors)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_entries: self.max_entries,
            legacy_truncation: self.legacy_truncation,
            escape_html: self.escape_html,
        }
    }
}

fn get_string_from_env(key: &str, fallback: String) -> String {
    env::var(key).unwrap_or(fallback)
}

fn get_parsed_from_env<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|var| var.parse().ok())
        .unwrap_or(fallback)
}
