//! Command implementations for the NBA stats CLI

pub mod common;
pub mod help;
pub mod interactive;
pub mod leaders;
pub mod player_stats;
pub mod roster;
pub mod team_stats;
