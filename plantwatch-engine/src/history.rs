//! Recent-history summaries across several datasets.

use plantwatch_types::{Dataset, DatasetSummary};

use crate::engine::summarize;

/// How many recent datasets the history surface covers.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Summarize the [`DEFAULT_HISTORY_LIMIT`] most recent datasets.
///
/// See [`recent_history_with_limit`].
pub fn recent_history(datasets: &[Dataset]) -> Vec<DatasetSummary> {
    recent_history_with_limit(datasets, DEFAULT_HISTORY_LIMIT)
}

/// Summarize the `limit` most recent datasets, newest first.
///
/// The window is taken over ALL datasets ordered by upload time; empty
/// datasets inside the window are then dropped without being replaced, so
/// fewer than `limit` entries can come back even when older non-empty
/// datasets exist.
pub fn recent_history_with_limit(datasets: &[Dataset], limit: usize) -> Vec<DatasetSummary> {
    let mut ordered: Vec<&Dataset> = datasets.iter().collect();
    ordered.sort_by(|a, b| b.uploaded_at_ms.cmp(&a.uploaded_at_ms));

    ordered
        .into_iter()
        .take(limit)
        .filter_map(|dataset| {
            let summary = summarize(&dataset.readings).ok()?;
            Some(DatasetSummary {
                dataset_id: dataset.id,
                dataset_name: dataset.name.clone(),
                uploaded_at_ms: dataset.uploaded_at_ms,
                summary,
            })
        })
        .collect()
}
