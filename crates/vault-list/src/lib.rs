//! Vault list search, filter and sort engine
//!
//! Narrows a caller-supplied set of savings vaults by a debounced free-text
//! query and a status filter, orders the survivors by one field, and
//! remembers the non-transient filter choices for the rest of the session.

pub mod assemble;
pub mod debounce;
pub mod engine;
pub mod persist;
pub mod predicate;
pub mod sort;
pub mod state;
pub mod store;

pub use assemble::{assemble, Assembler, ResultView};
pub use debounce::Debouncer;
pub use engine::VaultListEngine;
pub use persist::{FileSessionStorage, FilterPersistence, MemorySessionStorage, SessionStorage};
pub use state::{FilterState, ParseFilterError, SortDirection, SortField, StatusFilter};
pub use store::{FilterStore, StateObserver};
