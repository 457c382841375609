//! Filter state store
//!
//! Owns the current [`FilterState`] and applies user-driven transitions.
//! Every committed transition is followed by exactly one notification to
//! each subscribed [`StateObserver`], after the new state is in place.

use std::sync::Arc;

use crate::state::{FilterState, SortDirection, SortField, StatusFilter};

/// Receives the full state after each committed transition
pub trait StateObserver: Send + Sync {
    fn on_change(&self, state: &FilterState);
}

pub struct FilterStore {
    state: FilterState,
    observers: Vec<Arc<dyn StateObserver>>,
}

impl FilterStore {
    pub fn new(initial: FilterState) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: Arc<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Replace the query verbatim (no trimming)
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.commit(|s| s.query = query);
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.commit(|s| s.status_filter = filter);
    }

    /// Select a sort field.
    ///
    /// Re-selecting the current field flips the direction; selecting any
    /// other field always starts ascending.
    pub fn set_sort_field(&mut self, field: SortField) {
        self.commit(|s| {
            if s.sort_field == field {
                s.sort_direction = s.sort_direction.toggled();
            } else {
                s.sort_field = field;
                s.sort_direction = SortDirection::Asc;
            }
        });
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.commit(|s| s.sort_direction = direction);
    }

    pub fn toggle_sort_direction(&mut self) {
        self.commit(|s| s.sort_direction = s.sort_direction.toggled());
    }

    /// Restore all fields to defaults in a single transition
    pub fn reset(&mut self) {
        self.commit(|s| *s = FilterState::default());
    }

    fn commit(&mut self, update: impl FnOnce(&mut FilterState)) {
        update(&mut self.state);
        for observer in &self.observers {
            observer.on_change(&self.state);
        }
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}
