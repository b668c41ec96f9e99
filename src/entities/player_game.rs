//! Player game entity - one player's statistical line for one game

use serde::{Deserialize, Serialize};

/// Roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    Ol,
    Dl,
    Lb,
    Cb,
    S,
    K,
    P,
}

impl Position {
    /// All positions in display order
    pub const ALL: [Position; 11] = [
        Position::Qb,
        Position::Rb,
        Position::Wr,
        Position::Te,
        Position::Ol,
        Position::Dl,
        Position::Lb,
        Position::Cb,
        Position::S,
        Position::K,
        Position::P,
    ];

    /// The position code as it appears in the feed (e.g., "QB")
    pub fn code(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::Ol => "OL",
            Position::Dl => "DL",
            Position::Lb => "LB",
            Position::Cb => "CB",
            Position::S => "S",
            Position::K => "K",
            Position::P => "P",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown position: {}. Use one of QB, RB, WR, TE, OL, DL, LB, CB, S, K, P",
                    s
                )
            })
    }
}

/// Kind of game on the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Regular,
    Conference,
    NonConference,
    Playoff,
    Bowl,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::Regular => write!(f, "regular"),
            GameType::Conference => write!(f, "conference"),
            GameType::NonConference => write!(f, "non-conference"),
            GameType::Playoff => write!(f, "playoff"),
            GameType::Bowl => write!(f, "bowl"),
        }
    }
}

impl std::str::FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "regular" => Ok(GameType::Regular),
            "conference" => Ok(GameType::Conference),
            "non-conference" | "nonconference" => Ok(GameType::NonConference),
            "playoff" => Ok(GameType::Playoff),
            "bowl" => Ok(GameType::Bowl),
            _ => Err(format!(
                "Unknown game type: {}. Use regular, conference, non-conference, playoff, or bowl",
                s
            )),
        }
    }
}

/// Where the game was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Home,
    Away,
    Neutral,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Home => write!(f, "Home"),
            Location::Away => write!(f, "Away"),
            Location::Neutral => write!(f, "Neutral"),
        }
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Location::Home),
            "away" => Ok(Location::Away),
            "neutral" => Ok(Location::Neutral),
            _ => Err(format!("Unknown location: {}. Use Home, Away, or Neutral", s)),
        }
    }
}

/// Coarse grouping of statistics used to filter by role-relevant production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Defense,
    Kicking,
}

impl StatCategory {
    /// Fields checked for positive production in this category
    pub fn relevant_fields(&self) -> &'static [StatField] {
        match self {
            StatCategory::Passing => &[StatField::PassingYards],
            StatCategory::Rushing => &[StatField::RushingYards],
            StatCategory::Receiving => &[StatField::ReceivingYards],
            StatCategory::Defense => &[
                StatField::Tackles,
                StatField::Sacks,
                StatField::Interceptions,
            ],
            StatCategory::Kicking => &[StatField::FieldGoalsMade, StatField::ExtraPointsMade],
        }
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatCategory::Passing => write!(f, "Passing"),
            StatCategory::Rushing => write!(f, "Rushing"),
            StatCategory::Receiving => write!(f, "Receiving"),
            StatCategory::Defense => write!(f, "Defense"),
            StatCategory::Kicking => write!(f, "Kicking"),
        }
    }
}

impl std::str::FromStr for StatCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passing" => Ok(StatCategory::Passing),
            "rushing" => Ok(StatCategory::Rushing),
            "receiving" => Ok(StatCategory::Receiving),
            "defense" | "defence" => Ok(StatCategory::Defense),
            "kicking" => Ok(StatCategory::Kicking),
            _ => Err(format!(
                "Unknown stat category: {}. Use passing, rushing, receiving, defense, or kicking",
                s
            )),
        }
    }
}

/// Every optional statistic carried by a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    PassingYards,
    PassingTds,
    PassingInt,
    RushingYards,
    RushingTds,
    Receptions,
    ReceivingYards,
    ReceivingTds,
    Tackles,
    Sacks,
    Interceptions,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ExtraPointsMade,
    ExtraPointsAttempted,
}

impl StatField {
    /// Fields in detail-view order
    pub const ALL: [StatField; 15] = [
        StatField::PassingYards,
        StatField::PassingTds,
        StatField::PassingInt,
        StatField::RushingYards,
        StatField::RushingTds,
        StatField::ReceivingYards,
        StatField::ReceivingTds,
        StatField::Receptions,
        StatField::Tackles,
        StatField::Sacks,
        StatField::Interceptions,
        StatField::FieldGoalsMade,
        StatField::FieldGoalsAttempted,
        StatField::ExtraPointsMade,
        StatField::ExtraPointsAttempted,
    ];

    /// Key used in the JSON feed
    pub fn key(&self) -> &'static str {
        match self {
            StatField::PassingYards => "passingYards",
            StatField::PassingTds => "passingTDs",
            StatField::PassingInt => "passingInt",
            StatField::RushingYards => "rushingYards",
            StatField::RushingTds => "rushingTDs",
            StatField::Receptions => "receptions",
            StatField::ReceivingYards => "receivingYards",
            StatField::ReceivingTds => "receivingTDs",
            StatField::Tackles => "tackles",
            StatField::Sacks => "sacks",
            StatField::Interceptions => "interceptions",
            StatField::FieldGoalsMade => "fieldGoalsMade",
            StatField::FieldGoalsAttempted => "fieldGoalsAttempted",
            StatField::ExtraPointsMade => "extraPointsMade",
            StatField::ExtraPointsAttempted => "extraPointsAttempted",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StatField::PassingYards => "Passing Yards",
            StatField::PassingTds => "Passing TDs",
            StatField::PassingInt => "INTs",
            StatField::RushingYards => "Rushing Yards",
            StatField::RushingTds => "Rushing TDs",
            StatField::Receptions => "Receptions",
            StatField::ReceivingYards => "Receiving Yards",
            StatField::ReceivingTds => "Receiving TDs",
            StatField::Tackles => "Tackles",
            StatField::Sacks => "Sacks",
            StatField::Interceptions => "Interceptions",
            StatField::FieldGoalsMade => "Field Goals Made",
            StatField::FieldGoalsAttempted => "Field Goals Attempted",
            StatField::ExtraPointsMade => "Extra Points Made",
            StatField::ExtraPointsAttempted => "Extra Points Attempted",
        }
    }

    /// Single-game value treated as a full stat bar
    pub fn scale_max(&self) -> u32 {
        match self {
            StatField::PassingYards => 400,
            StatField::PassingTds => 5,
            StatField::PassingInt => 3,
            StatField::RushingYards => 200,
            StatField::RushingTds => 4,
            StatField::ReceivingYards => 150,
            StatField::ReceivingTds => 3,
            StatField::Receptions => 12,
            StatField::Tackles => 15,
            StatField::Sacks => 4,
            StatField::Interceptions => 2,
            _ => 100,
        }
    }

    /// Fraction of a full stat bar, in `0.0..=1.0`
    pub fn fill_ratio(&self, value: u32) -> f64 {
        (f64::from(value) / f64::from(self.scale_max())).min(1.0)
    }
}

/// One player's statistics for one game
///
/// Statistic fields are optional: `None` means "not applicable to this
/// position/game" and is distinct from a recorded zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameRecord {
    /// Opaque identifier from the feed, when present
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    pub player_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_photo: Option<String>,

    pub position: Position,
    pub opponent: String,
    pub game_type: GameType,
    pub location: Location,

    /// Display-only, never parsed
    pub date: String,

    /// Season or class-year token (e.g., "SR", "2024")
    pub season: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_yards: Option<u32>,
    #[serde(rename = "passingTDs", default, skip_serializing_if = "Option::is_none")]
    pub passing_tds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_int: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rushing_yards: Option<u32>,
    #[serde(rename = "rushingTDs", default, skip_serializing_if = "Option::is_none")]
    pub rushing_tds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_yards: Option<u32>,
    #[serde(rename = "receivingTDs", default, skip_serializing_if = "Option::is_none")]
    pub receiving_tds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tackles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sacks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interceptions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_goals_made: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_goals_attempted: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_points_made: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_points_attempted: Option<u32>,
}

impl PlayerGameRecord {
    /// Create a record with no statistics recorded
    pub fn new(
        player_name: impl Into<String>,
        position: Position,
        opponent: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            external_id: None,
            player_name: player_name.into(),
            player_photo: None,
            position,
            opponent: opponent.into(),
            game_type: GameType::Regular,
            location: Location::Home,
            date: String::new(),
            season: season.into(),
            result: None,
            passing_yards: None,
            passing_tds: None,
            passing_int: None,
            rushing_yards: None,
            rushing_tds: None,
            receptions: None,
            receiving_yards: None,
            receiving_tds: None,
            tackles: None,
            sacks: None,
            interceptions: None,
            field_goals_made: None,
            field_goals_attempted: None,
            extra_points_made: None,
            extra_points_attempted: None,
        }
    }

    /// Builder-style setter for a single statistic
    pub fn with_stat(mut self, field: StatField, value: u32) -> Self {
        *self.stat_mut(field) = Some(value);
        self
    }

    /// Value of a statistic, `None` when absent
    pub fn stat(&self, field: StatField) -> Option<u32> {
        match field {
            StatField::PassingYards => self.passing_yards,
            StatField::PassingTds => self.passing_tds,
            StatField::PassingInt => self.passing_int,
            StatField::RushingYards => self.rushing_yards,
            StatField::RushingTds => self.rushing_tds,
            StatField::Receptions => self.receptions,
            StatField::ReceivingYards => self.receiving_yards,
            StatField::ReceivingTds => self.receiving_tds,
            StatField::Tackles => self.tackles,
            StatField::Sacks => self.sacks,
            StatField::Interceptions => self.interceptions,
            StatField::FieldGoalsMade => self.field_goals_made,
            StatField::FieldGoalsAttempted => self.field_goals_attempted,
            StatField::ExtraPointsMade => self.extra_points_made,
            StatField::ExtraPointsAttempted => self.extra_points_attempted,
        }
    }

    fn stat_mut(&mut self, field: StatField) -> &mut Option<u32> {
        match field {
            StatField::PassingYards => &mut self.passing_yards,
            StatField::PassingTds => &mut self.passing_tds,
            StatField::PassingInt => &mut self.passing_int,
            StatField::RushingYards => &mut self.rushing_yards,
            StatField::RushingTds => &mut self.rushing_tds,
            StatField::Receptions => &mut self.receptions,
            StatField::ReceivingYards => &mut self.receiving_yards,
            StatField::ReceivingTds => &mut self.receiving_tds,
            StatField::Tackles => &mut self.tackles,
            StatField::Sacks => &mut self.sacks,
            StatField::Interceptions => &mut self.interceptions,
            StatField::FieldGoalsMade => &mut self.field_goals_made,
            StatField::FieldGoalsAttempted => &mut self.field_goals_attempted,
            StatField::ExtraPointsMade => &mut self.extra_points_made,
            StatField::ExtraPointsAttempted => &mut self.extra_points_attempted,
        }
    }

    /// Statistics present on this record, in detail-view order
    pub fn present_stats(&self) -> Vec<(StatField, u32)> {
        StatField::ALL
            .iter()
            .filter_map(|f| self.stat(*f).map(|v| (*f, v)))
            .collect()
    }

    /// True if any field relevant to `category` is present and above zero.
    /// An absent field fails the check just like a recorded zero.
    pub fn has_production(&self, category: StatCategory) -> bool {
        category
            .relevant_fields()
            .iter()
            .any(|f| self.stat(*f).is_some_and(|v| v > 0))
    }

    /// True when the record carries one of the headline yardage/tackle stats
    pub fn has_detailed_stats(&self) -> bool {
        [
            StatField::PassingYards,
            StatField::RushingYards,
            StatField::ReceivingYards,
            StatField::Tackles,
        ]
        .iter()
        .any(|f| self.stat(*f).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_and_display() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::Qb);
        assert_eq!(" S ".parse::<Position>().unwrap(), Position::S);
        assert_eq!(Position::Cb.to_string(), "CB");
        assert!("XX".parse::<Position>().is_err());
    }

    #[test]
    fn test_game_type_kebab_case() {
        assert_eq!(
            "non_conference".parse::<GameType>().unwrap(),
            GameType::NonConference
        );
        assert_eq!(GameType::NonConference.to_string(), "non-conference");
        let json = serde_json::to_string(&GameType::NonConference).unwrap();
        assert_eq!(json, "\"non-conference\"");
    }

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "_id": "abc123",
            "playerName": "Jordan Travis",
            "position": "QB",
            "opponent": "Clemson",
            "gameType": "conference",
            "location": "Away",
            "date": "2023-09-23",
            "season": "SR",
            "result": "W 31-24",
            "passingYards": 287,
            "passingTDs": 2,
            "passingInt": 0
        }"#;

        let record: PlayerGameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.external_id.as_deref(), Some("abc123"));
        assert_eq!(record.position, Position::Qb);
        assert_eq!(record.location, Location::Away);
        assert_eq!(record.passing_tds, Some(2));
        assert_eq!(record.passing_int, Some(0));
        assert_eq!(record.rushing_yards, None);
    }

    #[test]
    fn test_serialize_skips_absent_stats() {
        let record = PlayerGameRecord::new("A", Position::Rb, "Miami", "JR")
            .with_stat(StatField::RushingTds, 0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"rushingTDs\":0"));
        assert!(!json.contains("passingYards"));
        assert!(!json.contains("_id"));
    }

    #[test]
    fn test_absent_differs_from_zero() {
        let zero = PlayerGameRecord::new("A", Position::Qb, "X", "SR")
            .with_stat(StatField::PassingYards, 0);
        let absent = PlayerGameRecord::new("B", Position::Qb, "X", "SR");

        assert_eq!(zero.stat(StatField::PassingYards), Some(0));
        assert_eq!(absent.stat(StatField::PassingYards), None);
        assert_eq!(zero.present_stats().len(), 1);
        assert!(absent.present_stats().is_empty());
    }

    #[test]
    fn test_has_production() {
        let qb = PlayerGameRecord::new("A", Position::Qb, "X", "SR")
            .with_stat(StatField::PassingYards, 150);
        assert!(qb.has_production(StatCategory::Passing));
        assert!(!qb.has_production(StatCategory::Rushing));

        let lb = PlayerGameRecord::new("B", Position::Lb, "X", "SR")
            .with_stat(StatField::Tackles, 0)
            .with_stat(StatField::Sacks, 1);
        assert!(lb.has_production(StatCategory::Defense));

        let k = PlayerGameRecord::new("C", Position::K, "X", "SR")
            .with_stat(StatField::FieldGoalsAttempted, 3)
            .with_stat(StatField::ExtraPointsMade, 4);
        assert!(k.has_production(StatCategory::Kicking));
    }

    #[test]
    fn test_fill_ratio_caps_at_one() {
        assert_eq!(StatField::Sacks.fill_ratio(2), 0.5);
        assert_eq!(StatField::PassingYards.fill_ratio(800), 1.0);
        assert_eq!(StatField::FieldGoalsMade.fill_ratio(50), 0.5);
    }
}
