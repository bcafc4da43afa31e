//! Entity stat queries: name lookup, season table fetch, filtering and
//! formatting, all under a bounded wait per provider call.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::{
    cli::types::{to_optional_season_id, SeasonId},
    core::timeout::with_timeout,
    error::{EntityKind, Result, StatsError},
    nba::{
        format::{player_season_line, roster_line, team_season_line},
        http::StatsProvider,
        types::{PlayerRef, TeamRef},
    },
};


/// Provider handle plus the per-call time limit, passed into every query.
#[derive(Clone, Copy)]
pub struct QueryContext<'a> {
    pub provider: &'a dyn StatsProvider,
    pub timeout: Duration,
}

impl<'a> QueryContext<'a> {
    pub fn new(provider: &'a dyn StatsProvider, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub(crate) async fn call<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        with_timeout(self.timeout, fut).await
    }

    pub async fn player(&self, name: &str) -> Result<PlayerRef> {
        self.call(self.provider.find_player(name))
            .await?
            .ok_or_else(|| StatsError::EntityNotFound {
                kind: EntityKind::Player,
                name: name.to_string(),
            })
    }

    pub async fn team(&self, name: &str) -> Result<TeamRef> {
        self.call(self.provider.find_team(name))
            .await?
            .ok_or_else(|| StatsError::EntityNotFound {
                kind: EntityKind::Team,
                name: name.to_string(),
            })
    }
}

/// Sort, season-filter and format a season table.
///
/// Rows are ordered chronologically (stable, so same-season rows keep the
/// provider's order). Zero-game rows have no line and are dropped.
fn shape_seasons<R>(
    mut rows: Vec<R>,
    entity: &str,
    season: Option<&SeasonId>,
    season_of: impl Fn(&R) -> &SeasonId,
    line_of: impl Fn(&R) -> Option<String>,
) -> Result<Vec<(SeasonId, String)>> {
    rows.sort_by(|a, b| season_of(a).cmp(season_of(b)));

    if let Some(wanted) = season {
        rows.retain(|r| season_of(r) == wanted);
        if rows.is_empty() {
            return Err(StatsError::SeasonNotFound {
                name: entity.to_string(),
                season: wanted.to_string(),
            });
        }
    }

    let total = rows.len();
    let lines: Vec<(SeasonId, String)> = rows
        .iter()
        .filter_map(|r| line_of(r).map(|line| (season_of(r).clone(), line)))
        .collect();
    debug!(entity, total, shown = lines.len(), "shaped season table");

    if lines.is_empty() {
        return Err(StatsError::NoData);
    }
    Ok(lines)
}

/// Group lines by season for the pager; traded players keep one line per team.
fn into_pages(lines: Vec<(SeasonId, String)>) -> BTreeMap<SeasonId, String> {
    let mut pages: BTreeMap<SeasonId, String> = BTreeMap::new();
    for (season, line) in lines {
        pages
            .entry(season)
            .and_modify(|page| {
                page.push('\n');
                page.push_str(&line);
            })
            .or_insert(line);
    }
    pages
}

async fn player_lines(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(PlayerRef, Vec<(SeasonId, String)>)> {
    let season = to_optional_season_id(season)?;
    let player = ctx.player(name).await?;
    info!(player = %player.full_name, id = %player.id, "resolved player");

    let rows = ctx.call(ctx.provider.player_career(player.id)).await?;
    let lines = shape_seasons(
        rows,
        &player.full_name,
        season.as_ref(),
        |r| &r.season_id,
        player_season_line,
    )?;
    Ok((player, lines))
}

async fn team_lines(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(TeamRef, Vec<(SeasonId, String)>)> {
    let season = to_optional_season_id(season)?;
    let team = ctx.team(name).await?;
    info!(team = %team.full_name, id = %team.id, "resolved team");

    let rows = ctx.call(ctx.provider.team_history(team.id)).await?;
    let lines = shape_seasons(
        rows,
        &team.full_name,
        season.as_ref(),
        |r| &r.season_id,
        team_season_line,
    )?;
    Ok((team, lines))
}

/// Per-game lines for each season of a player's career, oldest first.
pub async fn resolve_player_seasons(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(PlayerRef, Vec<String>)> {
    let (player, lines) = player_lines(ctx, name, season).await?;
    Ok((player, lines.into_iter().map(|(_, line)| line).collect()))
}

/// Player lines keyed by season, for interactive navigation.
pub async fn resolve_player_pages(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(PlayerRef, BTreeMap<SeasonId, String>)> {
    let (player, lines) = player_lines(ctx, name, season).await?;
    Ok((player, into_pages(lines)))
}

/// Per-game lines and playoff results for each season of a team, oldest first.
pub async fn resolve_team_seasons(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(TeamRef, Vec<String>)> {
    let (team, lines) = team_lines(ctx, name, season).await?;
    Ok((team, lines.into_iter().map(|(_, line)| line).collect()))
}

/// Team lines keyed by season, for interactive navigation.
pub async fn resolve_team_pages(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(TeamRef, BTreeMap<SeasonId, String>)> {
    let (team, lines) = team_lines(ctx, name, season).await?;
    Ok((team, into_pages(lines)))
}

/// Roster lines for a team; the provider's current season when none is given.
pub async fn resolve_team_roster(
    ctx: &QueryContext<'_>,
    name: &str,
    season: Option<&str>,
) -> Result<(TeamRef, SeasonId, Vec<String>)> {
    let season = to_optional_season_id(season)?.unwrap_or_else(SeasonId::current);
    let team = ctx.team(name).await?;

    let roster = ctx.call(ctx.provider.team_roster(team.id, &season)).await?;
    if roster.is_empty() {
        return Err(StatsError::NoData);
    }
    Ok((team, season, roster.iter().map(roster_line).collect()))
}
