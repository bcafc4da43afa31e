//! Team roster command implementation

use crate::{nba::resolve::resolve_team_roster, Result};

use super::common::CommandContext;

/// Roster of a team for a season (current season when omitted).
pub async fn handle_roster(
    ctx: &CommandContext,
    team: &str,
    season: Option<&str>,
) -> Result<Vec<String>> {
    let (team, season_id, lines) = resolve_team_roster(&ctx.query(), team, season).await?;
    let heading = format!("{} roster ({})", team.full_name, season_id);
    Ok(ctx.reply(heading, &lines))
}
