//! ID types for the NBA stats provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for provider player IDs (`PERSON_ID` / `PLAYER_ID`).
///
/// Keeps player and team identifiers from being mixed up when both are
/// passed around as plain integers.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let id = PlayerId::new(2544);
/// assert_eq!(id.as_u64(), 2544);
/// assert_eq!(id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for provider team IDs (e.g. `1610612750`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
