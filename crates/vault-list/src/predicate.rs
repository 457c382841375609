//! Record predicates for the vault list
//!
//! Each predicate is pure. They compose by logical AND: a record is shown
//! when it passes the text match and the status match.

use vault_core::VaultRecord;

use crate::state::StatusFilter;

/// Case-insensitive substring match of `query` against the record id or label.
///
/// The query is trimmed first; an empty or whitespace-only query matches
/// everything. Records without a label can still match through their id.
pub fn matches_query(record: &VaultRecord, query: &str) -> bool {
    let needle = query.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();

    record.id.to_string().contains(&needle)
        || record
            .label
            .as_deref()
            .is_some_and(|label| label.to_lowercase().contains(&needle))
}

pub fn matches_status(record: &VaultRecord, filter: StatusFilter) -> bool {
    filter.status().map_or(true, |wanted| record.status() == wanted)
}

/// Both predicates together
pub fn matches(record: &VaultRecord, query: &str, filter: StatusFilter) -> bool {
    matches_query(record, query) && matches_status(record, filter)
}
