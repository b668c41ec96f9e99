//! Sort state and the stable record comparator

use icu_collator::{Collator, CollatorOptions};
use serde::Serialize;
use std::cmp::Ordering;

use crate::entities::player_game::{PlayerGameRecord, StatField};

/// Columns the result list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    PlayerName,
    Position,
    Season,
    PassingYards,
    RushingYards,
    ReceivingYards,
    Tackles,
    Sacks,
    Interceptions,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::PlayerName,
        SortField::Position,
        SortField::Season,
        SortField::PassingYards,
        SortField::RushingYards,
        SortField::ReceivingYards,
        SortField::Tackles,
        SortField::Sacks,
        SortField::Interceptions,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortField::PlayerName => "playerName",
            SortField::Position => "position",
            SortField::Season => "season",
            SortField::PassingYards => "passingYards",
            SortField::RushingYards => "rushingYards",
            SortField::ReceivingYards => "receivingYards",
            SortField::Tackles => "tackles",
            SortField::Sacks => "sacks",
            SortField::Interceptions => "interceptions",
        }
    }

    /// Backing statistic for numeric columns
    pub fn stat_field(&self) -> Option<StatField> {
        match self {
            SortField::PassingYards => Some(StatField::PassingYards),
            SortField::RushingYards => Some(StatField::RushingYards),
            SortField::ReceivingYards => Some(StatField::ReceivingYards),
            SortField::Tackles => Some(StatField::Tackles),
            SortField::Sacks => Some(StatField::Sacks),
            SortField::Interceptions => Some(StatField::Interceptions),
            SortField::PlayerName | SortField::Position | SortField::Season => None,
        }
    }

    /// Ascending comparison of two records on this column
    pub fn compare(&self, a: &PlayerGameRecord, b: &PlayerGameRecord) -> Ordering {
        if let Some(field) = self.stat_field() {
            // Absent stats order as zero
            return a.stat(field).unwrap_or(0).cmp(&b.stat(field).unwrap_or(0));
        }
        match self {
            SortField::Position => compare_text(a.position.code(), b.position.code()),
            SortField::Season => compare_text(&a.season, &b.season),
            _ => compare_text(&a.player_name, &b.player_name),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "name" | "player" => return Ok(SortField::PlayerName),
            "pos" => return Ok(SortField::Position),
            "ints" | "int" => return Ok(SortField::Interceptions),
            _ => {}
        }

        SortField::ALL
            .iter()
            .copied()
            .find(|f| f.key().to_lowercase() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown sort field: {}. Use one of: {}",
                    s,
                    SortField::ALL
                        .iter()
                        .map(|f| f.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

thread_local! {
    // Root locale, default (tertiary) strength
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware ordering with a code point tie-break
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow used to mark the active column
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Re-selecting the active column flips direction; a new column starts ascending
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Comparator for this state, direction applied
    pub fn compare(&self, a: &PlayerGameRecord, b: &PlayerGameRecord) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Stable sort of record indices; equal keys keep their input order
pub fn sort_indices(records: &[PlayerGameRecord], indices: &mut [usize], state: SortState) {
    indices.sort_by(|&a, &b| state.compare(&records[a], &records[b]));
}
