//! Player career stats command implementation

use tracing::info;

use crate::{
    core::pager::SeasonPager,
    nba::resolve::{resolve_player_pages, resolve_player_seasons},
    Result,
};

use super::common::CommandContext;

/// Season-by-season per-game lines for a player, or one season when
/// `season` (a 4-digit end year) is given.
pub async fn handle_player_stats(
    ctx: &CommandContext,
    name: &str,
    season: Option<&str>,
) -> Result<Vec<String>> {
    let (player, lines) = resolve_player_seasons(&ctx.query(), name, season).await?;
    info!(player = %player.full_name, seasons = lines.len(), "player stats ready");

    let heading = match season {
        Some(s) => format!("{} - {} season", player.full_name, s),
        None => format!("{} - career stats", player.full_name),
    };
    Ok(ctx.reply(heading, &lines))
}

/// Open a season pager over a player's career for `owner`.
pub async fn open_player_pager(
    ctx: &CommandContext,
    name: &str,
    season: Option<&str>,
    owner: &str,
) -> Result<SeasonPager> {
    let (player, pages) = resolve_player_pages(&ctx.query(), name, season).await?;
    SeasonPager::new(owner, player.full_name, pages)
        .map(|pager| pager.with_budget(ctx.settings.message_budget))
}
