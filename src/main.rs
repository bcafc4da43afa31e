//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{join_name, Commands, NbaStats},
    commands::{
        common::CommandContext,
        help::{handle_commands, handle_stat_list},
        interactive::run_pager,
        leaders::{handle_all_time_leaders, handle_league_leaders},
        player_stats::{handle_player_stats, open_player_pager},
        roster::handle_roster,
        team_stats::{handle_team_stats, open_team_pager},
    },
    core::Settings,
    Result,
};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Owner of pagers opened from this terminal.
const LOCAL_USER: &str = "local";

fn init_logging(verbose: bool) {
    let default = if verbose { "nba_stats=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_messages(messages: &[String]) {
    for message in messages {
        println!("{}", message);
    }
}

async fn run(app: NbaStats) -> Result<()> {
    let settings = Settings::from_env()?.with_overrides(
        app.global.base_url,
        app.global.timeout,
        app.global.budget,
    )?;

    // help commands never touch the network
    match app.command {
        Commands::Commands => {
            print_messages(&handle_commands());
            return Ok(());
        }
        Commands::Stats => {
            print_messages(&handle_stat_list());
            return Ok(());
        }
        _ => {}
    }

    let ctx = CommandContext::new(settings)?;

    match app.command {
        Commands::PlayerStats {
            name,
            season,
            interactive,
        } => {
            let name = join_name(&name);
            println!("Fetching stats for {}...", name);
            let season = season.season.as_deref();
            if interactive {
                let mut pager = open_player_pager(&ctx, &name, season, LOCAL_USER).await?;
                let stdin = BufReader::new(tokio::io::stdin());
                run_pager(&mut pager, LOCAL_USER, stdin, &mut tokio::io::stdout()).await?;
            } else {
                print_messages(&handle_player_stats(&ctx, &name, season).await?);
            }
        }

        Commands::TeamStats {
            name,
            season,
            interactive,
        } => {
            let name = join_name(&name);
            println!("Fetching stats for {}...", name);
            let season = season.season.as_deref();
            if interactive {
                let mut pager = open_team_pager(&ctx, &name, season, LOCAL_USER).await?;
                let stdin = BufReader::new(tokio::io::stdin());
                run_pager(&mut pager, LOCAL_USER, stdin, &mut tokio::io::stdout()).await?;
            } else {
                print_messages(&handle_team_stats(&ctx, &name, season).await?);
            }
        }

        Commands::LeagueLeaders { stat, season, json } => {
            println!("Fetching league leaders for {}...", stat);
            print_messages(
                &handle_league_leaders(&ctx, &stat, season.season.as_deref(), json).await?,
            );
        }

        Commands::AllTimeLeaders { stat, json } => {
            println!("Fetching all-time leaders for {}...", stat);
            print_messages(&handle_all_time_leaders(&ctx, &stat, json).await?);
        }

        Commands::Roster { team, season } => {
            let team = join_name(&team);
            println!("Fetching roster for {}...", team);
            print_messages(&handle_roster(&ctx, &team, season.season.as_deref()).await?);
        }

        Commands::Commands | Commands::Stats => {}
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = NbaStats::parse();
    init_logging(app.global.verbose);

    if let Err(err) = run(app).await {
        if err.is_upstream() {
            tracing::warn!(error = %err, "stats service request failed");
        } else {
            tracing::debug!(error = %err, "command failed");
        }
        println!("{}", err.user_message());
        std::process::exit(1);
    }
}
