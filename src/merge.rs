use std::collections::HashSet;

use crate::model::Paper;

/// Flattens the per-query batches into one list, newest first, with
/// repeated titles dropped. Queries keep their configuration order and
/// each batch keeps its API order before sorting; the sort is stable,
/// so that order survives timestamp ties.
pub fn merge(batches: Vec<Vec<Paper>>) -> Vec<Paper> {
    let mut papers: Vec<Paper> = batches.into_iter().flatten().collect();
    papers.sort_by(|a, b| b.published.cmp(&a.published));
    dedup_by_title(papers)
}

// First occurrence wins. On a list already sorted newest-first this
// keeps the entry with the greatest timestamp string of every
// duplicate set.
fn dedup_by_title(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen = HashSet::new();
    papers
        .into_iter()
        .filter(|paper| seen.insert(paper.title.clone()))
        .collect()
}
