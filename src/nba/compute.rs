use serde::Serialize;
use std::fmt;

use crate::{
    cli::types::{Qualifier, StatKey},
    nba::types::{AllTimeRow, LeaderRow, SeasonTotals},
};


/// Leaderboards never show more than this many players.
pub const LEADERBOARD_SIZE: usize = 10;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `total / games_played` rounded to one decimal, or `None` for zero games.
pub fn per_game(total: f64, games_played: u32) -> Option<f64> {
    if games_played == 0 {
        return None;
    }
    Some(round1(total / games_played as f64))
}

/// Per-game view of a season's totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerGameStats {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub blocks: f64,
    pub steals: f64,
    pub turnovers: f64,
    pub fouls: f64,
    pub field_goals_made: f64,
    pub threes_made: f64,
}

impl PerGameStats {
    /// `None` when no games were played; such rows are never displayed.
    pub fn from_totals(totals: &SeasonTotals) -> Option<Self> {
        let gp = totals.games_played;
        Some(Self {
            points: per_game(totals.points, gp)?,
            rebounds: per_game(totals.rebounds, gp)?,
            assists: per_game(totals.assists, gp)?,
            blocks: per_game(totals.blocks, gp)?,
            steals: per_game(totals.steals, gp)?,
            turnovers: per_game(totals.turnovers, gp)?,
            fouls: per_game(totals.fouls, gp)?,
            field_goals_made: per_game(totals.field_goals_made, gp)?,
            threes_made: per_game(totals.threes_made, gp)?,
        })
    }
}

/// How far a team got in the playoffs, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PlayoffOutcome {
    NoPlayoffs,
    FirstRoundExit,
    SecondRoundExit,
    ConferenceFinalsExit,
    FinalsLoss,
    Championship,
}

impl PlayoffOutcome {
    /// Classify a season from its playoff record.
    ///
    /// Each round is best-of-seven, so every four wins advance the team one
    /// round: `<4` first round, `<8` second round, `<12` conference finals,
    /// `<16` finals, `>=16` title.
    pub fn classify(playoff_wins: u32, playoff_losses: u32) -> Self {
        match (playoff_wins, playoff_losses) {
            (0, 0) => PlayoffOutcome::NoPlayoffs,
            (w, _) if w < 4 => PlayoffOutcome::FirstRoundExit,
            (w, _) if w < 8 => PlayoffOutcome::SecondRoundExit,
            (w, _) if w < 12 => PlayoffOutcome::ConferenceFinalsExit,
            (w, _) if w < 16 => PlayoffOutcome::FinalsLoss,
            _ => PlayoffOutcome::Championship,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayoffOutcome::NoPlayoffs => "Missed playoffs",
            PlayoffOutcome::FirstRoundExit => "Lost in first round",
            PlayoffOutcome::SecondRoundExit => "Lost in second round",
            PlayoffOutcome::ConferenceFinalsExit => "Lost in conference finals",
            PlayoffOutcome::FinalsLoss => "Lost in NBA Finals",
            PlayoffOutcome::Championship => "Won NBA championship",
        }
    }
}

impl fmt::Display for PlayoffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ranked line of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub label: String,
    /// Display value: per-game average, percentage (x100) or career total.
    pub value: f64,
    #[serde(skip)]
    pub decimals: usize,
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {}: {:.*}",
            self.rank, self.name, self.label, self.decimals, self.value
        )
    }
}

/// Raw provider value of `stat` for a league-table row.
pub fn raw_value(row: &LeaderRow, stat: StatKey) -> f64 {
    match stat {
        StatKey::Points => row.points,
        StatKey::Rebounds => row.rebounds,
        StatKey::Assists => row.assists,
        StatKey::Steals => row.steals,
        StatKey::Blocks => row.blocks,
        StatKey::Turnovers => row.turnovers,
        StatKey::FieldGoalPct => row.field_goal_pct,
        StatKey::ThreePointPct => row.three_point_pct,
        StatKey::FreeThrowPct => row.free_throw_pct,
    }
}

/// Whether a row has enough makes to be ranked on `stat`.
pub fn qualifies(row: &LeaderRow, stat: StatKey) -> bool {
    match stat.qualifier() {
        None => true,
        Some(Qualifier::FieldGoalsMade(min)) => row.field_goals_made > min as f64,
        Some(Qualifier::ThreesMade(min)) => row.threes_made > min as f64,
        Some(Qualifier::FreeThrowsMade(min)) => row.free_throws_made > min as f64,
    }
}

/// Value a row is ranked by, or `None` if the row cannot be ranked.
///
/// Per-game stats rank on the same one-decimal average that is displayed,
/// so rows that show equal values keep table order. They need at least one
/// game played. Percentages use the raw provider value.
pub fn sort_value(row: &LeaderRow, stat: StatKey) -> Option<f64> {
    let raw = raw_value(row, stat);
    let value = if stat.is_per_game() {
        per_game(raw, row.games_played)?
    } else {
        raw
    };
    value.is_finite().then_some(value)
}

/// Stable descending sort on the key, truncated to the leaderboard size.
fn top_ranked<'a, T>(mut scored: Vec<(&'a T, f64)>) -> Vec<(usize, &'a T, f64)> {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, (row, key))| (i + 1, row, key))
        .collect()
}

/// Rank a league-wide season table on `stat`.
pub fn rank_league_rows(rows: &[LeaderRow], stat: StatKey) -> Vec<LeaderboardEntry> {
    let scored: Vec<(&LeaderRow, f64)> = rows
        .iter()
        .filter(|row| qualifies(row, stat))
        .filter_map(|row| sort_value(row, stat).map(|key| (row, key)))
        .collect();

    top_ranked(scored)
        .into_iter()
        .map(|(rank, row, key)| LeaderboardEntry {
            rank,
            name: row.name.clone(),
            label: stat.label().to_string(),
            value: if stat.is_percentage() {
                round1(key * 100.0)
            } else {
                round1(key)
            },
            decimals: 1,
        })
        .collect()
}

/// Rank career totals from the all-time table.
pub fn rank_all_time_rows(rows: &[AllTimeRow], stat: StatKey) -> Vec<LeaderboardEntry> {
    let scored: Vec<(&AllTimeRow, f64)> = rows
        .iter()
        .filter(|row| row.value.is_finite())
        .map(|row| (row, row.value))
        .collect();

    let label = if stat.is_percentage() {
        format!("Career {}", stat.label())
    } else {
        format!("Career {}", stat.column())
    };

    top_ranked(scored)
        .into_iter()
        .map(|(rank, row, key)| LeaderboardEntry {
            rank,
            name: row.name.clone(),
            label: label.clone(),
            value: if stat.is_percentage() {
                round1(key * 100.0)
            } else {
                key.round()
            },
            decimals: if stat.is_percentage() { 1 } else { 0 },
        })
        .collect()
}
