//! Team season stats command implementation

use tracing::info;

use crate::{
    core::pager::SeasonPager,
    nba::resolve::{resolve_team_pages, resolve_team_seasons},
    Result,
};

use super::common::CommandContext;

/// Year-by-year record, per-game averages and playoff result for a team.
pub async fn handle_team_stats(
    ctx: &CommandContext,
    name: &str,
    season: Option<&str>,
) -> Result<Vec<String>> {
    let (team, lines) = resolve_team_seasons(&ctx.query(), name, season).await?;
    info!(team = %team.full_name, seasons = lines.len(), "team stats ready");

    let heading = match season {
        Some(s) => format!("{} - {} season", team.full_name, s),
        None => format!("{} - franchise history", team.full_name),
    };
    Ok(ctx.reply(heading, &lines))
}

/// Open a season pager over a team's history for `owner`.
pub async fn open_team_pager(
    ctx: &CommandContext,
    name: &str,
    season: Option<&str>,
    owner: &str,
) -> Result<SeasonPager> {
    let (team, pages) = resolve_team_pages(&ctx.query(), name, season).await?;
    SeasonPager::new(owner, team.full_name, pages)
        .map(|pager| pager.with_budget(ctx.settings.message_budget))
}
