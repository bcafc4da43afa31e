//! Static help text: the command list and the valid stat keys.

use crate::{cli::types::StatKey, core::chunk::fence};

const COMMAND_LIST: &str = "\
Here's a list of commands:

commands         - Show a list of all commands
stats            - Show the stat names accepted by the leaderboards
player-stats     - Show stats for a specific player. Format: player-stats Anthony Edwards --season 2024
team-stats       - Show stats for a specific team.   Format: team-stats Timberwolves --season 2020
league-leaders   - Show the league's top 10 leaders in a stat. Format: league-leaders assists --season 2025
all-time-leaders - Show the all-time leaders for a stat. Format: all-time-leaders points
roster           - Show a team's roster. Format: roster Celtics --season 2024";

const SEASON_NOTE: &str =
    "**Note:** If no season is given, player and team stats cover every season; leaderboards and rosters use the current season.";

/// The help block followed by the season note.
pub fn handle_commands() -> Vec<String> {
    vec![fence(COMMAND_LIST), SEASON_NOTE.to_string()]
}

/// One line per stat key: its label and every accepted alias.
pub fn stat_list_lines() -> Vec<String> {
    StatKey::ALL
        .iter()
        .map(|key| format!("{:<5} {}", key.label(), key.aliases().join(", ")))
        .collect()
}

pub fn handle_stat_list() -> Vec<String> {
    let mut body = String::from("Valid stats:\n");
    body.push_str(&stat_list_lines().join("\n"));
    vec![fence(&body)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list_is_fenced() {
        let messages = handle_commands();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("```Here's a list of commands:"));
        assert!(messages[0].ends_with("```"));
        assert!(messages[0].contains("all-time-leaders"));
    }

    #[test]
    fn test_stat_list_covers_every_key() {
        let lines = stat_list_lines();
        assert_eq!(lines.len(), StatKey::ALL.len());
        assert!(lines[0].starts_with("PPG"));
        assert!(lines[0].contains("points"));

        // every listed alias parses back to its key
        for key in StatKey::ALL.iter() {
            for alias in key.aliases() {
                assert_eq!(alias.parse::<StatKey>().unwrap(), *key);
            }
        }
    }
}
