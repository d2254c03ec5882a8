use thiserror::Error;

// Every failure is fatal: the run aborts on the first error it meets.

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("query file is malformed: {0}")]
    Queries(#[from] serde_json::Error),

    #[error("arxiv request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse feed: {0}")]
    Feed(#[from] quick_xml::DeError),
}

pub type Result<T> = std::result::Result<T, FeedError>;
