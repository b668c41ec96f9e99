//! Statline: player game stats dashboard
//!
//! Loads per-game player statistics from a JSON/CSV feed and lets you
//! search, filter, sort and page through them from the terminal.

pub mod cli;
pub mod core;
pub mod entities;
