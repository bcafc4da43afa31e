//! NBA stats provider access and the data shaping built on it.
//!
//! - `http`: the [`StatsProvider`] trait and its `stats.nba.com` client
//! - `types`: response envelope and typed row records
//! - `teams` / `lookup`: name-to-id resolution
//! - `compute`: per-game math, playoff classification, ranking
//! - `format`: one-line renderings of rows
//! - `resolve` / `leaders`: the query operations commands call

pub mod compute;
pub mod format;
pub mod http;
pub mod leaders;
pub mod lookup;
pub mod resolve;
pub mod teams;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use http::{NbaStatsClient, StatsProvider, NBA_STATS_BASE_URL};
pub use resolve::QueryContext;
