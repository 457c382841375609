//! Vault list engine
//!
//! Ties the filter store, search debouncer, session persistence and result
//! assembler together behind the API a rendering layer consumes. The raw
//! query updates immediately in [`VaultListEngine::state`]; text filtering
//! follows the settled query. Status and sort changes apply at once.

use std::sync::Arc;

use tokio::sync::watch;
use vault_core::{EngineConfig, VaultRecord};

use crate::assemble::{Assembler, ResultView};
use crate::debounce::Debouncer;
use crate::persist::{FilterPersistence, SessionStorage};
use crate::state::{FilterState, SortDirection, SortField, StatusFilter};
use crate::store::FilterStore;

pub struct VaultListEngine<S> {
    store: FilterStore,
    query: Debouncer<String>,
    persistence: Arc<FilterPersistence<S>>,
    assembler: Assembler,
    records: Arc<[VaultRecord]>,
}

impl<S: SessionStorage + 'static> VaultListEngine<S> {
    /// Create an engine, rehydrating persisted filters from `storage`.
    pub fn new(storage: S, config: &EngineConfig) -> Self {
        let persistence = Arc::new(FilterPersistence::new(storage, config.storage_key.as_str()));
        let initial = persistence.load();
        tracing::info!(
            status_filter = %initial.status_filter,
            sort_field = %initial.sort_field,
            sort_direction = %initial.sort_direction,
            "Vault list engine ready"
        );

        let query = Debouncer::new(initial.query.clone(), config.debounce_delay());
        let mut store = FilterStore::new(initial);
        store.subscribe(persistence.clone());

        Self {
            store,
            query,
            persistence,
            assembler: Assembler::new(),
            records: Arc::from(Vec::new()),
        }
    }

    /// Replace the record set. The engine never mutates it.
    pub fn set_records(&mut self, records: impl Into<Arc<[VaultRecord]>>) {
        self.records = records.into();
        // Releases the previous record set held by the cache key
        self.assembler.invalidate();
    }

    pub fn records(&self) -> &Arc<[VaultRecord]> {
        &self.records
    }

    /// Current derived view. Unchanged inputs return the same `Arc`.
    pub fn result(&mut self) -> Arc<ResultView> {
        let settled = self.query.settled();
        self.assembler
            .assemble(&self.records, &settled, self.store.state())
    }

    pub fn state(&self) -> FilterState {
        self.store.state().clone()
    }

    /// The query text filtering currently applies
    pub fn settled_query(&self) -> String {
        self.query.settled()
    }

    /// Notified each time a typed query settles
    pub fn query_updates(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    /// Whether a typed query is still waiting to settle
    pub fn is_query_pending(&self) -> bool {
        self.query.is_pending()
    }

    /// Arms the debounce timer; outside a tokio runtime the query settles at once.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.store.set_query(query.clone());
        self.query.set(query);
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.store.set_status_filter(filter);
    }

    /// Select a sort field; re-selecting the current one flips direction
    pub fn set_sort_field(&mut self, field: SortField) {
        self.store.set_sort_field(field);
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.store.set_sort_direction(direction);
    }

    pub fn toggle_sort_direction(&mut self) {
        self.store.toggle_sort_direction();
    }

    /// Restore defaults, including an immediate empty search.
    ///
    /// A pending keystroke is cancelled so it cannot resurrect the old query
    /// after the reset.
    pub fn reset(&mut self) {
        self.store.reset();
        self.query.reset_to(String::new());
    }

    pub fn persistence(&self) -> &FilterPersistence<S> {
        &self.persistence
    }

    /// Cancel any pending query update
    pub fn dispose(&mut self) {
        self.query.dispose();
    }
}
