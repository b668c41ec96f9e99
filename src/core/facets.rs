//! Facet index - distinct filterable values in the full source list

use serde::Serialize;
use std::collections::HashSet;

use crate::entities::player_game::{GameType, PlayerGameRecord};

/// Distinct seasons, opponents and game types, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    seasons: Vec<String>,
    opponents: Vec<String>,
    game_types: Vec<GameType>,
}

impl FacetIndex {
    /// Build the index over the full (unfiltered) record list
    pub fn from_records(records: &[PlayerGameRecord]) -> Self {
        let mut seen_seasons = HashSet::new();
        let mut seen_opponents = HashSet::new();
        let mut seen_game_types = HashSet::new();
        let mut index = FacetIndex::default();

        for record in records {
            if seen_seasons.insert(record.season.as_str()) {
                index.seasons.push(record.season.clone());
            }
            if seen_opponents.insert(record.opponent.as_str()) {
                index.opponents.push(record.opponent.clone());
            }
            if seen_game_types.insert(record.game_type) {
                index.game_types.push(record.game_type);
            }
        }

        index
    }

    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    pub fn opponents(&self) -> &[String] {
        &self.opponents
    }

    pub fn game_types(&self) -> &[GameType] {
        &self.game_types
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty() && self.opponents.is_empty() && self.game_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player_game::Position;

    #[test]
    fn test_empty_source() {
        let index = FacetIndex::from_records(&[]);
        assert!(index.is_empty());
        assert!(index.seasons().is_empty());
        assert!(index.opponents().is_empty());
        assert!(index.game_types().is_empty());
    }

    #[test]
    fn test_distinct_first_seen_order() {
        let mut bowl = PlayerGameRecord::new("C", Position::Wr, "Georgia", "SR");
        bowl.game_type = GameType::Bowl;
        let records = vec![
            PlayerGameRecord::new("A", Position::Qb, "Miami", "SR"),
            PlayerGameRecord::new("B", Position::Rb, "Clemson", "FR"),
            bowl,
            PlayerGameRecord::new("D", Position::Qb, "Miami", "FR"),
        ];

        let index = FacetIndex::from_records(&records);
        assert_eq!(index.seasons(), ["SR", "FR"]);
        assert_eq!(index.opponents(), ["Miami", "Clemson", "Georgia"]);
        assert_eq!(index.game_types(), [GameType::Regular, GameType::Bowl]);
    }
}
