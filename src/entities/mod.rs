//! Entity type definitions
//!
//! - [`PlayerGameRecord`] - one player's stat line for one game, plus the
//!   enums describing its position, game type, location and statistics

pub mod player_game;

pub use player_game::{GameType, Location, PlayerGameRecord, Position, StatCategory, StatField};
