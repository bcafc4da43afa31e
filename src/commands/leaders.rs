//! League leaders and all-time leaders command implementations

use crate::{
    core::chunk::fence_chunks,
    nba::{
        compute::LeaderboardEntry,
        leaders::{rank_all_time, rank_league},
    },
    Result,
};

use super::common::CommandContext;

fn board_reply(
    ctx: &CommandContext,
    heading: String,
    board: &[LeaderboardEntry],
    as_json: bool,
) -> Result<Vec<String>> {
    if as_json {
        let json = serde_json::to_string_pretty(board)?;
        let mut messages = vec![heading];
        messages.extend(fence_chunks(&json, ctx.settings.message_budget));
        return Ok(messages);
    }
    let lines: Vec<String> = board.iter().map(|e| e.to_string()).collect();
    Ok(ctx.reply(heading, &lines))
}

/// Top ten players for `stat` in a season (current season when omitted).
pub async fn handle_league_leaders(
    ctx: &CommandContext,
    stat: &str,
    season: Option<&str>,
    as_json: bool,
) -> Result<Vec<String>> {
    let (key, season_id, board) = rank_league(&ctx.query(), stat, season).await?;
    let heading = format!("League leaders - {} ({})", key.label(), season_id);
    board_reply(ctx, heading, &board, as_json)
}

/// Top ten career totals for `stat`.
pub async fn handle_all_time_leaders(
    ctx: &CommandContext,
    stat: &str,
    as_json: bool,
) -> Result<Vec<String>> {
    let (key, board) = rank_all_time(&ctx.query(), stat).await?;
    let heading = format!("All-time leaders - {}", key);
    board_reply(ctx, heading, &board, as_json)
}
