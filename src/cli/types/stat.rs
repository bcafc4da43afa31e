//! Leaderboard stat keys and their provider mappings.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// Stats that can be ranked on a leaderboard.
///
/// Each key maps to a raw provider column, a display label and, for
/// counting stats, a per-game derivation. Percentage stats are ranked on the
/// raw provider value behind a minimum-makes qualifier.
///
/// # Examples
///
/// ```rust
/// use nba_stats::StatKey;
///
/// let key: StatKey = "Assists".parse().unwrap();
/// assert_eq!(key, StatKey::Assists);
/// assert_eq!(key.label(), "APG");
/// assert_eq!(key.column(), "AST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    FieldGoalPct,
    ThreePointPct,
    FreeThrowPct,
}

/// Minimum makes a player needs before a percentage stat counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    FieldGoalsMade(u32),
    ThreesMade(u32),
    FreeThrowsMade(u32),
}

impl StatKey {
    pub const ALL: [StatKey; 9] = [
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::Assists,
        StatKey::Steals,
        StatKey::Blocks,
        StatKey::Turnovers,
        StatKey::FieldGoalPct,
        StatKey::ThreePointPct,
        StatKey::FreeThrowPct,
    ];

    /// Raw provider column backing this stat.
    pub fn column(&self) -> &'static str {
        match self {
            StatKey::Points => "PTS",
            StatKey::Rebounds => "REB",
            StatKey::Assists => "AST",
            StatKey::Steals => "STL",
            StatKey::Blocks => "BLK",
            StatKey::Turnovers => "TOV",
            StatKey::FieldGoalPct => "FG_PCT",
            StatKey::ThreePointPct => "FG3_PCT",
            StatKey::FreeThrowPct => "FT_PCT",
        }
    }

    /// Short label shown next to the ranked value.
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Points => "PPG",
            StatKey::Rebounds => "RPG",
            StatKey::Assists => "APG",
            StatKey::Steals => "SPG",
            StatKey::Blocks => "BPG",
            StatKey::Turnovers => "TOPG",
            StatKey::FieldGoalPct => "FG%",
            StatKey::ThreePointPct => "3P%",
            StatKey::FreeThrowPct => "FT%",
        }
    }

    /// Counting stats are ranked per game; percentages are not.
    pub fn is_per_game(&self) -> bool {
        !self.is_percentage()
    }

    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            StatKey::FieldGoalPct | StatKey::ThreePointPct | StatKey::FreeThrowPct
        )
    }

    /// Qualifier applied before ranking percentage stats. Made counts must be
    /// strictly greater than the threshold.
    pub fn qualifier(&self) -> Option<Qualifier> {
        match self {
            StatKey::FieldGoalPct => Some(Qualifier::FieldGoalsMade(150)),
            StatKey::ThreePointPct => Some(Qualifier::ThreesMade(82)),
            StatKey::FreeThrowPct => Some(Qualifier::FreeThrowsMade(150)),
            _ => None,
        }
    }

    /// Accepted spellings, lowercase. The first entry is the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            StatKey::Points => &["points", "pts", "ppg"],
            StatKey::Rebounds => &["rebounds", "reb", "rpg"],
            StatKey::Assists => &["assists", "ast", "apg"],
            StatKey::Steals => &["steals", "stl", "spg"],
            StatKey::Blocks => &["blocks", "blk", "bpg"],
            StatKey::Turnovers => &["turnovers", "tov", "to", "topg"],
            StatKey::FieldGoalPct => &["fg%", "fg_pct", "fieldgoal%", "fieldgoals"],
            StatKey::ThreePointPct => &["3p%", "fg3_pct", "threepoint%", "threes"],
            StatKey::FreeThrowPct => &["ft%", "ft_pct", "freethrow%", "freethrows"],
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.aliases()[0])
    }
}

impl FromStr for StatKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatKey::ALL
            .into_iter()
            .find(|key| key.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| StatsError::InvalidStat {
                stat: s.to_string(),
            })
    }
}
