//! Filter criteria - the complete set of active filter constraints

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::entities::player_game::{GameType, PlayerGameRecord, Position, StatCategory};

/// A filter selector: either unconstrained or pinned to one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// No constraint ("ALL")
    Any,
    /// Only records whose field equals this value
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    /// Does `value` satisfy this selector?
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T> Selector<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selector::Any => None,
            Selector::Only(v) => Some(v),
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Any
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::Any, Selector::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => write!(f, "ALL"),
            Selector::Only(v) => write!(f, "{}", v),
        }
    }
}

/// "ALL" (any case) or an empty string parses to `Any`
impl<T> FromStr for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Selector::Any);
        }
        trimmed
            .parse::<T>()
            .map(Selector::Only)
            .map_err(|e| e.to_string())
    }
}

impl<T: Serialize> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::Any => serializer.serialize_str("ALL"),
            Selector::Only(v) => v.serialize(serializer),
        }
    }
}

/// One field change, the typed form of "set filter `field` to `value`"
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    /// Player-name substring; empty clears
    Name(String),
    Position(Selector<Position>),
    Season(Selector<String>),
    Opponent(Selector<String>),
    GameType(Selector<GameType>),
    StatCategory(Selector<StatCategory>),
}

/// Session-scoped filter state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Free-text query over name, position, opponent and location
    pub query: String,
    /// Player-name substring filter
    pub name: String,
    pub position: Selector<Position>,
    pub season: Selector<String>,
    pub opponent: Selector<String>,
    pub game_type: Selector<GameType>,
    pub stat_category: Selector<StatCategory>,
}

impl FilterCriteria {
    /// True when no constraint of any kind is active
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.name.trim().is_empty()
            && self.position.is_any()
            && self.season.is_any()
            && self.opponent.is_any()
            && self.game_type.is_any()
            && self.stat_category.is_any()
    }

    /// Apply one field change
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Name(name) => self.name = name,
            FilterUpdate::Position(sel) => self.position = sel,
            FilterUpdate::Season(sel) => self.season = sel,
            FilterUpdate::Opponent(sel) => self.opponent = sel,
            FilterUpdate::GameType(sel) => self.game_type = sel,
            FilterUpdate::StatCategory(sel) => self.stat_category = sel,
        }
    }

    /// Structured field filters, in pipeline order: position, name, season,
    /// opponent, game type, stat category
    pub fn matches_fields(&self, record: &PlayerGameRecord) -> bool {
        self.position.matches(&record.position)
            && name_matches(&self.name, &record.player_name)
            && self.season.matches(&record.season)
            && self.opponent.matches(&record.opponent)
            && self.game_type.matches(&record.game_type)
            && match self.stat_category {
                Selector::Any => true,
                Selector::Only(category) => record.has_production(category),
            }
    }
}

fn name_matches(filter: &str, player_name: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || player_name.to_lowercase().contains(&filter.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player_game::StatField;

    fn record() -> PlayerGameRecord {
        PlayerGameRecord::new("Jordan Travis", Position::Qb, "Clemson", "SR")
            .with_stat(StatField::PassingYards, 287)
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!("ALL".parse::<Selector<Position>>().unwrap(), Selector::Any);
        assert_eq!("all".parse::<Selector<Position>>().unwrap(), Selector::Any);
        assert_eq!(
            "wr".parse::<Selector<Position>>().unwrap(),
            Selector::Only(Position::Wr)
        );
        assert!("nope".parse::<Selector<Position>>().is_err());
        assert_eq!(
            "SR".parse::<Selector<String>>().unwrap(),
            Selector::Only("SR".to_string())
        );
    }

    #[test]
    fn test_selector_display_and_serialize() {
        let any: Selector<Position> = Selector::Any;
        assert_eq!(any.to_string(), "ALL");
        assert_eq!(serde_json::to_string(&any).unwrap(), "\"ALL\"");
        let qb = Selector::Only(Position::Qb);
        assert_eq!(serde_json::to_string(&qb).unwrap(), "\"QB\"");
    }

    #[test]
    fn test_default_criteria_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert!(criteria.matches_fields(&record()));
    }

    #[test]
    fn test_apply_updates() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::Position(Selector::Only(Position::Rb)));
        assert!(!criteria.matches_fields(&record()));

        criteria.apply(FilterUpdate::Position(Selector::Any));
        criteria.apply(FilterUpdate::Name("travis".to_string()));
        assert!(criteria.matches_fields(&record()));
        assert!(!criteria.is_unconstrained());

        criteria.apply(FilterUpdate::Name(String::new()));
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_exact_match_facets() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::Opponent(Selector::Only("clemson".to_string())));
        assert!(!criteria.matches_fields(&record()));

        criteria.apply(FilterUpdate::Opponent(Selector::Only("Clemson".to_string())));
        assert!(criteria.matches_fields(&record()));
    }

    #[test]
    fn test_stat_category_requires_positive_value() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(FilterUpdate::StatCategory(Selector::Only(StatCategory::Passing)));

        assert!(criteria.matches_fields(&record()));

        let zero = PlayerGameRecord::new("C", Position::Qb, "X", "FR")
            .with_stat(StatField::PassingYards, 0);
        assert!(!criteria.matches_fields(&zero));

        let absent = PlayerGameRecord::new("D", Position::Qb, "X", "FR");
        assert!(!criteria.matches_fields(&absent));
    }
}
