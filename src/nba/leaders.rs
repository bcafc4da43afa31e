//! Leaderboard queries: validate the stat, fetch the league or career
//! table, then rank it.

use tracing::info;

use crate::{
    cli::types::{to_optional_season_id, SeasonId, StatKey},
    error::{Result, StatsError},
    nba::{
        compute::{rank_all_time_rows, rank_league_rows, LeaderboardEntry},
        resolve::QueryContext,
    },
};

/// Top ten players of a season for `stat`.
///
/// The stat key is validated before anything is fetched.
pub async fn rank_league(
    ctx: &QueryContext<'_>,
    stat: &str,
    season: Option<&str>,
) -> Result<(StatKey, SeasonId, Vec<LeaderboardEntry>)> {
    let key: StatKey = stat.parse()?;
    let season = to_optional_season_id(season)?.unwrap_or_else(SeasonId::current);
    info!(stat = %key, %season, "ranking league leaders");

    let rows = ctx.call(ctx.provider.league_leaders(&season)).await?;
    let board = rank_league_rows(&rows, key);
    if board.is_empty() {
        return Err(StatsError::NoData);
    }
    Ok((key, season, board))
}

/// Top ten career totals for `stat`.
pub async fn rank_all_time(
    ctx: &QueryContext<'_>,
    stat: &str,
) -> Result<(StatKey, Vec<LeaderboardEntry>)> {
    let key: StatKey = stat.parse()?;
    info!(stat = %key, "ranking all-time leaders");

    let rows = ctx.call(ctx.provider.all_time_leaders(key)).await?;
    let board = rank_all_time_rows(&rows, key);
    if board.is_empty() {
        return Err(StatsError::NoData);
    }
    Ok((key, board))
}
