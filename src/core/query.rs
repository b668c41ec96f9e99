//! Query engine - search, filter, sort and paginate player game records
//!
//! The engine owns the filter criteria, sort state and page cursor. Every
//! mutating call recomputes the visible subset synchronously:
//!
//! text search -> field filters -> stat category -> sort -> paginate
//!
//! Text search and the structured filters compose as a single AND. Records
//! are identified by their ordinal index in the source list.

use std::sync::Arc;
use tracing::debug;

use crate::core::criteria::{FilterCriteria, FilterUpdate};
use crate::core::facets::FacetIndex;
use crate::core::page::{PageWindow, ResultSummary, DEFAULT_PAGE_SIZE};
use crate::core::sort::{sort_indices, SortField, SortState};
use crate::entities::player_game::PlayerGameRecord;

/// Free-text match: name, position code, opponent or location contains the
/// query, ignoring case. A blank query matches everything.
pub fn matches_text_query(record: &PlayerGameRecord, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    record.player_name.to_lowercase().contains(&query)
        || record.position.code().to_lowercase().contains(&query)
        || record.opponent.to_lowercase().contains(&query)
        || record.location.to_string().to_lowercase().contains(&query)
}

/// Indices of records passing every criterion, in source order
pub fn filter_records(records: &[PlayerGameRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_text_query(r, &criteria.query))
        .filter(|(_, r)| criteria.matches_fields(r))
        .map(|(i, _)| i)
        .collect()
}

/// Stateful controller over one record list
#[derive(Debug, Clone)]
pub struct QueryEngine {
    source: Arc<[PlayerGameRecord]>,
    facets: FacetIndex,
    criteria: FilterCriteria,
    sort: SortState,
    page: usize,
    page_size: usize,
    /// Filtered and sorted ordinal indices into `source`
    results: Vec<usize>,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryEngine {
    /// Create an empty engine; a page size of zero is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            source: Arc::from(Vec::new()),
            facets: FacetIndex::default(),
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
            results: Vec::new(),
        }
    }

    /// Replace the full record list, rebuild facets and re-apply the current criteria
    pub fn set_source(&mut self, records: impl Into<Arc<[PlayerGameRecord]>>) {
        self.source = records.into();
        self.facets = FacetIndex::from_records(&self.source);
        debug!(
            records = self.source.len(),
            seasons = self.facets.seasons().len(),
            opponents = self.facets.opponents().len(),
            "source replaced"
        );
        self.recompute();
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.page = 1;
        self.recompute();
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.criteria.apply(update);
        self.page = 1;
        self.recompute();
    }

    /// Replace the whole criteria value at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
        self.recompute();
    }

    /// Back to the unfiltered, default-sorted first page
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = SortState::default();
        self.page = 1;
        self.recompute();
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort.select(field);
        self.recompute();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort.toggle_direction();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    /// Move to page `n`, clamped into `1..=total_pages`
    pub fn set_page(&mut self, n: usize) {
        self.page = self.window_at(n).page;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.set_page(self.page);
    }

    // ---------------------------------------------------------------------
    // Read-only snapshots
    // ---------------------------------------------------------------------

    pub fn source(&self) -> &[PlayerGameRecord] {
        &self.source
    }

    /// Record by ordinal index in the source list
    pub fn record(&self, index: usize) -> Option<&PlayerGameRecord> {
        self.source.get(index)
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.window().total_pages()
    }

    pub fn filtered_len(&self) -> usize {
        self.results.len()
    }

    /// Every matching record in sorted order, with its source index
    pub fn filtered(&self) -> impl Iterator<Item = (usize, &PlayerGameRecord)> + '_ {
        self.results.iter().map(move |&i| (i, &self.source[i]))
    }

    /// Records on the current page, with their source indices
    pub fn visible(&self) -> Vec<(usize, &PlayerGameRecord)> {
        self.results[self.window().range()]
            .iter()
            .map(|&i| (i, &self.source[i]))
            .collect()
    }

    pub fn window(&self) -> PageWindow {
        self.window_at(self.page)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(&self.window(), self.criteria.position.to_string())
    }

    /// True when a position filter is active
    pub fn has_position_filter(&self) -> bool {
        !self.criteria.position.is_any()
    }

    fn window_at(&self, page: usize) -> PageWindow {
        PageWindow::new(page, self.page_size, self.results.len())
    }

    // Re-filters from source order; sort ties keep source order.
    fn recompute(&mut self) {
        self.results = filter_records(&self.source, &self.criteria);
        sort_indices(&self.source, &mut self.results, self.sort);
        self.page = self.window().page;
        debug!(
            matched = self.results.len(),
            total = self.source.len(),
            page = self.page,
            "filters applied"
        );
    }
}
