//! Dashboard session - owns the loaded record list and the query engine

use serde::Serialize;
use tracing::warn;

use crate::core::loader::{self, DataSource, LoadError};
use crate::core::query::QueryEngine;

/// Observable load status, distinct from "loaded, zero matches"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    Loaded { records: usize, skipped: usize },
    /// The last load failed; the engine still holds the previous source
    Failed { message: String },
}

impl LoadState {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "no data loaded"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Loaded { records, skipped: 0 } => write!(f, "{} record(s) loaded", records),
            LoadState::Loaded { records, skipped } => write!(
                f,
                "{} record(s) loaded, {} malformed skipped",
                records, skipped
            ),
            LoadState::Failed { message } => write!(f, "load failed: {}", message),
        }
    }
}

/// Top-level session: one data source, one engine, one load status
#[derive(Debug, Default)]
pub struct Session {
    engine: QueryEngine,
    state: LoadState,
    source: Option<DataSource>,
}

impl Session {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            state: LoadState::Idle,
            source: None,
        }
    }

    /// Load `source` and hand the records to the engine.
    ///
    /// On failure the engine keeps whatever it held before (empty before the
    /// first successful load) and the state becomes `Failed`. The error is
    /// returned for reporting only.
    pub fn load(&mut self, source: DataSource) -> Result<(), LoadError> {
        self.load_with(source, |_, _| {})
    }

    /// Like [`Session::load`], calling `observe` with the `Loading` state
    /// before the fetch starts
    pub fn load_with(
        &mut self,
        source: DataSource,
        mut observe: impl FnMut(&LoadState, &DataSource),
    ) -> Result<(), LoadError> {
        self.state = LoadState::Loading;
        observe(&self.state, &source);
        let result = loader::load(&source);
        self.source = Some(source);

        match result {
            Ok(outcome) => {
                self.state = LoadState::Loaded {
                    records: outcome.records.len(),
                    skipped: outcome.skipped,
                };
                self.engine.set_source(outcome.records);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "load failed, keeping previous records");
                self.state = LoadState::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Re-run the last load, if any
    pub fn reload(&mut self) -> Option<Result<(), LoadError>> {
        self.reload_with(|_, _| {})
    }

    pub fn reload_with(
        &mut self,
        observe: impl FnMut(&LoadState, &DataSource),
    ) -> Option<Result<(), LoadError>> {
        let source = self.source.clone()?;
        Some(self.load_with(source, observe))
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn data_source(&self) -> Option<&DataSource> {
        self.source.as_ref()
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut QueryEngine {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FEED: &str = r#"[
        {"playerName": "A", "position": "QB", "opponent": "Miami", "gameType": "regular",
         "location": "Home", "date": "2024-09-01", "season": "SR", "passingYards": 300}
    ]"#;

    #[test]
    fn test_initial_state() {
        let mut session = Session::default();
        assert_eq!(session.state(), &LoadState::Idle);
        assert!(session.engine().source().is_empty());
        assert!(session.reload().is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.json");
        fs::write(&path, FEED).unwrap();

        let mut session = Session::default();
        session.load(DataSource::File(path.clone())).unwrap();
        assert_eq!(
            session.state(),
            &LoadState::Loaded {
                records: 1,
                skipped: 0
            }
        );

        fs::write(&path, "{ broken").unwrap();
        assert!(session.reload().unwrap().is_err());
        assert!(session.state().is_failed());
        assert_eq!(session.engine().source().len(), 1);
    }

    #[test]
    fn test_failed_first_load_is_empty_not_error_state() {
        let dir = tempdir().unwrap();
        let mut session = Session::default();
        let result = session.load(DataSource::File(dir.path().join("missing.json")));

        assert!(result.is_err());
        assert!(session.state().is_failed());
        assert_eq!(session.engine().filtered_len(), 0);
        assert_eq!(session.engine().total_pages(), 1);
    }

    #[test]
    fn test_loading_state_is_observed_before_fetch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.json");
        fs::write(&path, FEED).unwrap();

        let mut seen = Vec::new();
        let mut session = Session::default();
        session
            .load_with(DataSource::File(path.clone()), |state, source| {
                seen.push((state.clone(), source.clone()));
            })
            .unwrap();
        assert_eq!(seen, vec![(LoadState::Loading, DataSource::File(path))]);
        assert!(matches!(session.state(), LoadState::Loaded { records: 1, .. }));

        seen.clear();
        session
            .reload_with(|state, _| seen.push((state.clone(), DataSource::Demo)))
            .unwrap()
            .unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, LoadState::Loading);
    }

    #[test]
    fn test_load_state_display() {
        let loaded = LoadState::Loaded {
            records: 3,
            skipped: 1,
        };
        assert_eq!(loaded.to_string(), "3 record(s) loaded, 1 malformed skipped");
        assert_eq!(LoadState::Loading.to_string(), "loading");
    }
}
