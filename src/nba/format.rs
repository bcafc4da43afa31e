//! One-line text renderings of decoded provider rows.

use crate::nba::{
    compute::{PerGameStats, PlayoffOutcome},
    types::{PlayerSeason, RosterEntry, TeamSeason},
};

/// `"LAL, 2024-25: PPG 24.4, RPG 7.8, ..."`, or `None` for a zero-game season.
pub fn player_season_line(season: &PlayerSeason) -> Option<String> {
    let pg = PerGameStats::from_totals(&season.totals)?;
    Some(format!(
        "{}, {}: PPG {:.1}, RPG {:.1}, APG {:.1}, BPG {:.1}, SPG {:.1}, TO {:.1}, PF {:.1}, FGM {:.1}, 3PM {:.1}",
        season.team,
        season.season_id,
        pg.points,
        pg.rebounds,
        pg.assists,
        pg.blocks,
        pg.steals,
        pg.turnovers,
        pg.fouls,
        pg.field_goals_made,
        pg.threes_made,
    ))
}

/// Team season with record, per-game averages and playoff result, or `None`
/// for a season with no games played yet.
pub fn team_season_line(season: &TeamSeason) -> Option<String> {
    let pg = PerGameStats::from_totals(&season.totals)?;
    let outcome = PlayoffOutcome::classify(season.playoff_wins, season.playoff_losses);
    Some(format!(
        "{} {}, {}: {}-{}, PPG {:.1}, RPG {:.1}, APG {:.1}, BPG {:.1}, SPG {:.1}, TO {:.1}, PF {:.1} | Playoffs: {}",
        season.city,
        season.name,
        season.season_id,
        season.wins,
        season.losses,
        pg.points,
        pg.rebounds,
        pg.assists,
        pg.blocks,
        pg.steals,
        pg.turnovers,
        pg.fouls,
        outcome,
    ))
}

/// `"#23 LeBron James - F, 6-9, 250 lbs, age 40, exp 21"`; missing values show as `-`.
pub fn roster_line(entry: &RosterEntry) -> String {
    fn or_dash(value: Option<&str>) -> &str {
        value.unwrap_or("-")
    }

    let age = entry
        .age
        .map(|a| format!("{}", a.floor() as u32))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "#{} {} - {}, {}, {} lbs, age {}, exp {}",
        or_dash(entry.number.as_deref()),
        entry.name,
        or_dash(entry.position.as_deref()),
        or_dash(entry.height.as_deref()),
        or_dash(entry.weight.as_deref()),
        age,
        or_dash(entry.experience.as_deref()),
    )
}
