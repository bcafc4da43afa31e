//! Provider response envelope and the typed records decoded from it.
//!
//! The stats API answers with loosely typed tables (`headers` + `rowSet`).
//! Every table is decoded exactly once, here, into named records; a missing
//! column becomes [`StatsError::Upstream`] instead of a later lookup failure.

use crate::{
    cli::types::{PlayerId, SeasonId, TeamId},
    error::{Result, StatsError},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;


/// One named table from a stats response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultTable {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Top-level stats response. Most endpoints use `resultSets`, a few
/// (`leagueleaders`) return a single `resultSet`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultTable>,
    #[serde(rename = "resultSet", default)]
    pub result_set: Option<ResultTable>,
}

impl StatsEnvelope {
    /// Take the table called `name` out of the envelope.
    pub fn into_table(self, name: &str) -> Result<ResultTable> {
        self.result_sets
            .into_iter()
            .chain(self.result_set)
            .find(|t| t.name == name)
            .ok_or_else(|| StatsError::upstream(format!("response has no {} table", name)))
    }
}

/// Records that can be built from one table row.
pub trait FromRow: Sized {
    fn from_row(row: &RowView<'_>) -> Result<Self>;
}

impl ResultTable {
    /// Decode every row into `T`.
    pub fn decode<T: FromRow>(&self) -> Result<Vec<T>> {
        self.map_rows(T::from_row)
    }

    /// Run `f` over a column-indexed view of every row.
    pub fn map_rows<T, F>(&self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&RowView<'_>) -> Result<T>,
    {
        let index: HashMap<&str, usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();

        self.row_set
            .iter()
            .map(|values| {
                f(&RowView {
                    table: &self.name,
                    index: &index,
                    values,
                })
            })
            .collect()
    }
}

/// Column-name access into a single row.
pub struct RowView<'a> {
    table: &'a str,
    index: &'a HashMap<&'a str, usize>,
    values: &'a [Value],
}

impl<'a> RowView<'a> {
    fn value(&self, column: &str) -> Result<&'a Value> {
        let idx = self.index.get(column).ok_or_else(|| {
            StatsError::upstream(format!("{} table is missing column {}", self.table, column))
        })?;
        self.values.get(*idx).ok_or_else(|| {
            StatsError::upstream(format!("{} row is shorter than its headers", self.table))
        })
    }

    fn type_error(&self, column: &str, expected: &str) -> StatsError {
        StatsError::upstream(format!(
            "{} column {} is not {}",
            self.table, column, expected
        ))
    }

    /// Numeric column; `null` reads as absent.
    pub fn opt_f64(&self, column: &str) -> Result<Option<f64>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.type_error(column, "a number")),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| self.type_error(column, "a number")),
            _ => Err(self.type_error(column, "a number")),
        }
    }

    /// Numeric column; `null` reads as zero.
    pub fn f64(&self, column: &str) -> Result<f64> {
        Ok(self.opt_f64(column)?.unwrap_or(0.0))
    }

    /// Non-negative count column; `null` reads as zero.
    pub fn u32(&self, column: &str) -> Result<u32> {
        let v = self.f64(column)?;
        if v < 0.0 || v.fract() != 0.0 || v > u32::MAX as f64 {
            return Err(self.type_error(column, "a count"));
        }
        Ok(v as u32)
    }

    pub fn id(&self, column: &str) -> Result<u64> {
        let v = self.f64(column)?;
        if v < 0.0 || v.fract() != 0.0 {
            return Err(self.type_error(column, "an id"));
        }
        Ok(v as u64)
    }

    /// Text column; numbers are rendered, `null` and blanks read as absent.
    pub fn opt_string(&self, column: &str) -> Result<Option<String>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s.trim().to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(self.type_error(column, "text")),
        }
    }

    pub fn string(&self, column: &str) -> Result<String> {
        Ok(self.opt_string(column)?.unwrap_or_default())
    }
}

/// Cumulative counting stats shared by player and team season rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonTotals {
    pub games_played: u32,
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

impl FromRow for SeasonTotals {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            games_played: row.u32("GP")?,
            points: row.f64("PTS")?,
            rebounds: row.f64("REB")?,
            assists: row.f64("AST")?,
            blocks: row.f64("BLK")?,
            steals: row.f64("STL")?,
            turnovers: row.f64("TOV")?,
            fouls: row.f64("PF")?,
            field_goals_made: row.f64("FGM")?,
            threes_made: row.f64("FG3M")?,
        })
    }
}

/// A player's regular season on one team (`SeasonTotalsRegularSeason`).
///
/// Traded players get one row per team plus a `TOT` row for the season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeason {
    pub season_id: SeasonId,
    pub team: String,
    pub totals: SeasonTotals,
}

impl FromRow for PlayerSeason {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            season_id: SeasonId::from_provider(row.string("SEASON_ID")?),
            team: row
                .opt_string("TEAM_ABBREVIATION")?
                .unwrap_or_else(|| "N/A".to_string()),
            totals: SeasonTotals::from_row(row)?,
        })
    }
}

/// One team season from `teamyearbyyearstats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeason {
    pub season_id: SeasonId,
    pub city: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub playoff_wins: u32,
    pub playoff_losses: u32,
    pub totals: SeasonTotals,
}

impl FromRow for TeamSeason {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            season_id: SeasonId::from_provider(row.string("YEAR")?),
            city: row.string("TEAM_CITY")?,
            name: row.string("TEAM_NAME")?,
            wins: row.u32("WINS")?,
            losses: row.u32("LOSSES")?,
            playoff_wins: row.u32("PO_WINS")?,
            playoff_losses: row.u32("PO_LOSSES")?,
            totals: SeasonTotals::from_row(row)?,
        })
    }
}

/// A player's season totals in the league-wide `LeagueLeaders` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaderRow {
    pub player_id: PlayerId,
    pub name: String,
    pub team: String,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goals_made: f64,
    pub threes_made: f64,
    pub free_throws_made: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
}

impl FromRow for LeaderRow {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            player_id: PlayerId::new(row.id("PLAYER_ID")?),
            name: row.string("PLAYER")?,
            team: row.string("TEAM")?,
            games_played: row.u32("GP")?,
            points: row.f64("PTS")?,
            rebounds: row.f64("REB")?,
            assists: row.f64("AST")?,
            steals: row.f64("STL")?,
            blocks: row.f64("BLK")?,
            turnovers: row.f64("TOV")?,
            field_goals_made: row.f64("FGM")?,
            threes_made: row.f64("FG3M")?,
            free_throws_made: row.f64("FTM")?,
            field_goal_pct: row.f64("FG_PCT")?,
            three_point_pct: row.f64("FG3_PCT")?,
            free_throw_pct: row.f64("FT_PCT")?,
        })
    }
}

/// A career total from one `<STAT>Leaders` table of `alltimeleadersgrids`.
///
/// The value column is named after the stat, so rows are decoded through
/// [`AllTimeRow::decode_table`] rather than [`FromRow`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllTimeRow {
    pub player_id: PlayerId,
    pub name: String,
    pub value: f64,
    pub active: bool,
}

impl AllTimeRow {
    pub fn decode_table(table: &ResultTable, column: &str) -> Result<Vec<Self>> {
        table.map_rows(|row| {
            Ok(Self {
                player_id: PlayerId::new(row.id("PLAYER_ID")?),
                name: row.string("PLAYER_NAME")?,
                value: row.f64(column)?,
                active: row.opt_string("IS_ACTIVE_FLAG")?.as_deref() == Some("Y"),
            })
        })
    }
}

/// One player on a team roster (`CommonTeamRoster`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub number: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<f64>,
    pub experience: Option<String>,
}

impl FromRow for RosterEntry {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            player_id: PlayerId::new(row.id("PLAYER_ID")?),
            name: row.string("PLAYER")?,
            number: row.opt_string("NUM")?,
            position: row.opt_string("POSITION")?,
            height: row.opt_string("HEIGHT")?,
            weight: row.opt_string("WEIGHT")?,
            age: row.opt_f64("AGE")?,
            experience: row.opt_string("EXP")?,
        })
    }
}

/// A player candidate from `commonallplayers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub full_name: String,
}

impl FromRow for PlayerRef {
    fn from_row(row: &RowView<'_>) -> Result<Self> {
        Ok(Self {
            id: PlayerId::new(row.id("PERSON_ID")?),
            full_name: row.string("DISPLAY_FIRST_LAST")?,
        })
    }
}

/// A franchise from the static team table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub full_name: String,
    pub abbreviation: String,
}
