//! Result assembly: filter, sort, and count
//!
//! `assemble` runs text match, then status match, then a stable sort on a
//! copy of the survivors. The query passed in is the settled (debounced)
//! one; sort settings come straight from the live state.

use std::sync::Arc;

use serde::Serialize;
use vault_core::VaultRecord;

use crate::predicate::{matches_query, matches_status};
use crate::sort::sort_in_place;
use crate::state::{is_filtered, FilterState, SortDirection, SortField, StatusFilter};

/// Filtered and ordered view of the vault list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub vaults: Vec<VaultRecord>,
    /// Length of the unfiltered input
    pub total_count: usize,
    /// Length of `vaults`
    pub match_count: usize,
    pub is_filtered: bool,
}

/// Build a [`ResultView`] from `records` using `query` for text matching and
/// the remaining fields of `state` for status and ordering.
pub fn assemble(records: &[VaultRecord], query: &str, state: &FilterState) -> ResultView {
    let mut vaults: Vec<VaultRecord> = records
        .iter()
        .filter(|record| matches_query(record, query))
        .filter(|record| matches_status(record, state.status_filter))
        .cloned()
        .collect();
    sort_in_place(&mut vaults, state.sort_field, state.sort_direction);

    ResultView {
        total_count: records.len(),
        match_count: vaults.len(),
        is_filtered: is_filtered(query, state.status_filter),
        vaults,
    }
}

/// Everything a result depends on
struct CacheKey {
    records: Arc<[VaultRecord]>,
    query: String,
    status_filter: StatusFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
}

impl CacheKey {
    fn matches(&self, records: &Arc<[VaultRecord]>, query: &str, state: &FilterState) -> bool {
        Arc::ptr_eq(&self.records, records)
            && self.query == query
            && self.status_filter == state.status_filter
            && self.sort_field == state.sort_field
            && self.sort_direction == state.sort_direction
    }
}

/// Memoizing wrapper around [`assemble`].
///
/// Records are compared by `Arc` identity, not content: handing in a new
/// allocation always recomputes. Identical inputs return the same `Arc`.
#[derive(Default)]
pub struct Assembler {
    cached: Option<(CacheKey, Arc<ResultView>)>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble(
        &mut self,
        records: &Arc<[VaultRecord]>,
        query: &str,
        state: &FilterState,
    ) -> Arc<ResultView> {
        if let Some((key, view)) = &self.cached {
            if key.matches(records, query, state) {
                return Arc::clone(view);
            }
        }

        let view = Arc::new(assemble(records, query, state));
        tracing::trace!(
            total = view.total_count,
            matched = view.match_count,
            "Recomputed vault list"
        );
        let key = CacheKey {
            records: Arc::clone(records),
            query: query.to_string(),
            status_filter: state.status_filter,
            sort_field: state.sort_field,
            sort_direction: state.sort_direction,
        };
        self.cached = Some((key, Arc::clone(&view)));
        view
    }

    /// Forget the cached result
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
