//! Error types for the NBA stats front end

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid season format: {token:?} (expected a 4-digit year such as 2025)")]
    InvalidFormat { token: String },

    #[error("Could not find {kind}: {name}")]
    EntityNotFound { kind: EntityKind, name: String },

    #[error("No {season} season found for {name}")]
    SeasonNotFound { name: String, season: String },

    #[error("Invalid stat: {stat}")]
    InvalidStat { stat: String },

    #[error("Stats provider error: {message}")]
    Upstream { message: String },

    #[error("Stats provider did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Query returned no displayable data")]
    NoData,

    #[error("Invalid value {value:?} for {name}")]
    InvalidConfig { name: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What kind of entity a name lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Team,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Player => write!(f, "player"),
            EntityKind::Team => write!(f, "team"),
        }
    }
}

impl StatsError {
    pub fn upstream(message: impl Into<String>) -> Self {
        StatsError::Upstream {
            message: message.into(),
        }
    }

    /// True for failures caused by the stats provider rather than the user's input.
    pub fn is_upstream(&self) -> bool {
        matches!(self, StatsError::Upstream { .. } | StatsError::Timeout { .. })
    }

    /// Text posted back to the channel when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            StatsError::InvalidFormat { .. } => {
                "Invalid season format. Please use a 4-digit year like 2025.".to_string()
            }
            StatsError::EntityNotFound { kind, name } => {
                format!("Could not find {}: {}", kind, name)
            }
            StatsError::SeasonNotFound { name, season } => {
                format!("No stats found for {} in the {} season.", name, season)
            }
            StatsError::InvalidStat { stat } => format!(
                "Invalid stat: {}. Use the stats command to see the valid options.",
                stat
            ),
            StatsError::Upstream { message } => {
                format!("Error fetching data from the NBA stats service: {}", message)
            }
            StatsError::Timeout { .. } => {
                "Request timed out. The NBA stats service may be slow, please try again."
                    .to_string()
            }
            StatsError::NoData => "No data available.".to_string(),
            StatsError::InvalidConfig { .. } => self.to_string(),
            StatsError::Io(e) => format!("Internal error: {}", e),
        }
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        StatsError::upstream(err.to_string())
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::upstream(format!("unreadable response: {}", err))
    }
}
