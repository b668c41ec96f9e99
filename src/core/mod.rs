//! Core module - query engine, data loading and configuration

pub mod config;
pub mod criteria;
pub mod facets;
pub mod loader;
pub mod page;
pub mod query;
pub mod session;
pub mod sort;

pub use config::Config;
pub use criteria::{FilterCriteria, FilterUpdate, Selector};
pub use facets::FacetIndex;
pub use loader::{DataSource, LoadError, LoadOutcome};
pub use page::{PageWindow, ResultSummary, DEFAULT_PAGE_SIZE};
pub use query::QueryEngine;
pub use session::{LoadState, Session};
pub use sort::{SortDirection, SortField, SortState};
