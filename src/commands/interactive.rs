//! Line-driven season navigation for the terminal.
//!
//! Each input line is one button press: `n` moves to the next season, `p` to
//! the previous one, a 4-digit end year such as `2022` jumps to that season,
//! and `q` (or end of input) closes the pager. The current page is printed
//! after every move that changed it.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    cli::types::SeasonToken,
    core::pager::{Direction, SeasonPager},
    Result,
};

const CONTROLS_HINT: &str = "[n]ext season, [p]revious season, YYYY to jump, [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Move(Direction),
    Jump(SeasonToken),
    Quit,
}

fn parse_control(input: &str) -> Option<Control> {
    match input.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | ">" => Some(Control::Move(Direction::Next)),
        "p" | "prev" | "previous" | "<" => Some(Control::Move(Direction::Previous)),
        "q" | "quit" | "exit" => Some(Control::Quit),
        other => other.parse().ok().map(Control::Jump),
    }
}

async fn write_messages<W>(output: &mut W, messages: &[String]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for message in messages {
        output.write_all(message.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}

/// Drive `pager` from `input` on behalf of `user`, writing pages to `output`.
pub async fn run_pager<R, W>(
    pager: &mut SeasonPager,
    user: &str,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_messages(output, &pager.render()).await?;
    write_messages(output, &[CONTROLS_HINT.to_string()]).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_control(&line) {
            Some(Control::Quit) => break,
            Some(Control::Move(direction)) => {
                if pager.step_for(user, direction) {
                    write_messages(output, &pager.render()).await?;
                } else {
                    debug!(?direction, season = %pager.current_season(), "pager at end");
                }
            }
            Some(Control::Jump(token)) => {
                if pager.accepts(user) && pager.jump_to(&token.season_id()) {
                    write_messages(output, &pager.render()).await?;
                } else {
                    debug!(season = %token, "season not in pager");
                }
            }
            None => write_messages(output, &[CONTROLS_HINT.to_string()]).await?,
        }
    }
    Ok(())
}
