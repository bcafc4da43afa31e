//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Stats API base URL (or set `NBA_STATS_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Seconds to wait for each stats API call (or set `NBA_STATS_TIMEOUT_SECS`).
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum characters per message (or set `NBA_STATS_MESSAGE_BUDGET`).
    #[clap(long, global = true)]
    pub budget: Option<usize>,

    /// Log requests and query steps to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SeasonArg {
    /// Season end year, 4 digits (e.g. 2025 for 2024-25).
    #[clap(long, short)]
    pub season: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA stats lookups formatted as chat messages")]
pub struct NbaStats {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Per-game stats for every season of a player's career.
    PlayerStats {
        /// Player name, e.g. `Anthony Edwards`.
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,

        #[clap(flatten)]
        season: SeasonArg,

        /// Step through seasons from stdin (n/p/q, or YYYY to jump).
        #[clap(long, short)]
        interactive: bool,
    },

    /// Year-by-year record, averages and playoff result for a team.
    TeamStats {
        /// Team name, nickname, city or abbreviation.
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,

        #[clap(flatten)]
        season: SeasonArg,

        /// Step through seasons from stdin (n/p/q, or YYYY to jump).
        #[clap(long, short)]
        interactive: bool,
    },

    /// Top 10 players of a season in one stat.
    LeagueLeaders {
        /// Stat name, e.g. `points` or `fg%` (see the `stats` command).
        stat: String,

        #[clap(flatten)]
        season: SeasonArg,

        /// Output the leaderboard as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Top 10 career totals in one stat.
    AllTimeLeaders {
        /// Stat name, e.g. `assists`.
        stat: String,

        /// Output the leaderboard as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Players on a team's roster for a season.
    Roster {
        /// Team name, nickname, city or abbreviation.
        #[clap(required = true, num_args = 1..)]
        team: Vec<String>,

        #[clap(flatten)]
        season: SeasonArg,
    },

    /// Show a list of all commands.
    Commands,

    /// Show the stat names accepted by the leaderboards.
    Stats,
}

/// Join a multi-word name argument back into one string.
pub fn join_name(words: &[String]) -> String {
    words.join(" ")
}
