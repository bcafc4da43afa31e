//! Stats provider boundary: the [`StatsProvider`] trait and its HTTP client
//! for `stats.nba.com`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, SeasonId, StatKey, TeamId},
    core::http::stats_headers,
    nba::{
        lookup::best_match,
        teams::find_team,
        types::{
            AllTimeRow, LeaderRow, PlayerRef, PlayerSeason, ResultTable, RosterEntry,
            StatsEnvelope, TeamRef, TeamSeason,
        },
    },
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// League id the provider uses for the NBA.
const NBA_LEAGUE_ID: &str = "00";

/// Everything the query layer needs from the upstream stats service.
///
/// Implementations must translate their own failures into
/// [`crate::StatsError::Upstream`].
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Resolve a player by name, exact match first.
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRef>>;

    /// Resolve a team by name, nickname, city or abbreviation.
    async fn find_team(&self, name: &str) -> Result<Option<TeamRef>> {
        Ok(find_team(name))
    }

    /// Regular-season totals for every season of a player's career.
    async fn player_career(&self, player: PlayerId) -> Result<Vec<PlayerSeason>>;

    /// Year-by-year regular-season totals and playoff record for a team.
    async fn team_history(&self, team: TeamId) -> Result<Vec<TeamSeason>>;

    /// League-wide per-player season totals.
    async fn league_leaders(&self, season: &SeasonId) -> Result<Vec<LeaderRow>>;

    /// Career leaders for a stat.
    async fn all_time_leaders(&self, stat: StatKey) -> Result<Vec<AllTimeRow>>;

    /// Players on a team's roster for a season.
    async fn team_roster(&self, team: TeamId, season: &SeasonId) -> Result<Vec<RosterEntry>>;
}

/// `reqwest`-backed [`StatsProvider`].
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
}

impl NbaStatsClient {
    /// Build a client against `base_url` (normally [`NBA_STATS_BASE_URL`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().default_headers(stats_headers()).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and pull out the table called `table`.
    async fn fetch_table(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        table: &str,
    ) -> Result<ResultTable> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "fetching stats table");

        let envelope = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        let table = envelope.into_table(table)?;
        debug!(table = %table.name, rows = table.row_set.len(), "decoded stats table");
        Ok(table)
    }
}

/// Result set holding career leaders for `stat` in `alltimeleadersgrids`.
pub fn all_time_table_name(stat: StatKey) -> String {
    format!("{}Leaders", stat.column())
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRef>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", SeasonId::current().to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let players: Vec<PlayerRef> = self
            .fetch_table("commonallplayers", &params, "CommonAllPlayers")
            .await?
            .decode()?;

        Ok(best_match(&players, name, |p| vec![p.full_name.as_str()]).cloned())
    }

    async fn player_career(&self, player: PlayerId) -> Result<Vec<PlayerSeason>> {
        let params = [
            ("PlayerID", player.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        self.fetch_table("playercareerstats", &params, "SeasonTotalsRegularSeason")
            .await?
            .decode()
    }

    async fn team_history(&self, team: TeamId) -> Result<Vec<TeamSeason>> {
        let params = [
            ("TeamID", team.to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PerMode", "Totals".to_string()),
            ("SeasonType", "Regular Season".to_string()),
        ];
        self.fetch_table("teamyearbyyearstats", &params, "TeamStats")
            .await?
            .decode()
    }

    async fn league_leaders(&self, season: &SeasonId) -> Result<Vec<LeaderRow>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PerMode", "Totals".to_string()),
            ("Scope", "S".to_string()),
            ("Season", season.to_string()),
            ("SeasonType", "Regular Season".to_string()),
            ("StatCategory", "PTS".to_string()),
        ];
        self.fetch_table("leagueleaders", &params, "LeagueLeaders")
            .await?
            .decode()
    }

    async fn all_time_leaders(&self, stat: StatKey) -> Result<Vec<AllTimeRow>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PerMode", "Totals".to_string()),
            ("SeasonType", "Regular Season".to_string()),
            ("TopX", "10".to_string()),
        ];
        let table = self
            .fetch_table("alltimeleadersgrids", &params, &all_time_table_name(stat))
            .await?;
        AllTimeRow::decode_table(&table, stat.column())
    }

    async fn team_roster(&self, team: TeamId, season: &SeasonId) -> Result<Vec<RosterEntry>> {
        let params = [
            ("TeamID", team.to_string()),
            ("Season", season.to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        self.fetch_table("commonteamroster", &params, "CommonTeamRoster")
            .await?
            .decode()
    }
}
