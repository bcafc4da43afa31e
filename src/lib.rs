//! NBA Stats Library
//!
//! Looks up NBA player, team and league statistics from the public stats
//! API and renders them as short text messages sized for a chat channel.
//!
//! ## Features
//!
//! - **Player Careers**: Per-game averages for each season a player appeared in
//! - **Team Histories**: Record, per-game averages and playoff result per season
//! - **Leaderboards**: Season and all-time top 10 for a stat, with qualifiers for percentages
//! - **Rosters**: Current or historical team rosters
//! - **Message Chunking**: Output split into fenced blocks under a character budget
//! - **Season Paging**: Step through a career one season at a time
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{
//!     commands::{common::CommandContext, player_stats::handle_player_stats},
//!     core::Settings,
//! };
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let ctx = CommandContext::new(Settings::from_env()?)?;
//! for message in handle_player_stats(&ctx, "Anthony Edwards", Some("2024")).await? {
//!     println!("{}", message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_TIMEOUT_SECS=10
//! export NBA_STATS_MESSAGE_BUDGET=1500
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{to_season_id, PlayerId, SeasonId, SeasonToken, StatKey, TeamId};
pub use error::{EntityKind, Result, StatsError};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_STATS_TIMEOUT_SECS";
pub const MESSAGE_BUDGET_ENV_VAR: &str = "NBA_STATS_MESSAGE_BUDGET";
