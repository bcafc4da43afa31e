//! Type-safe wrappers and enums for NBA stats queries.

pub mod ids;
pub mod season;
pub mod stat;

pub use ids::{PlayerId, TeamId};
pub use season::{to_optional_season_id, to_season_id, SeasonId, SeasonToken};
pub use stat::{Qualifier, StatKey};
