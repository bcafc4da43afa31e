//! Static table of current NBA franchises and name lookup over it.
//!
//! The stats API has no team search endpoint; clients resolve team names
//! against this list the same way player names are resolved against
//! `commonallplayers`.

use crate::{
    cli::types::TeamId,
    nba::{
        lookup::{best_match_by, Partial},
        types::TeamRef,
    },
};

struct Franchise {
    id: u64,
    abbreviation: &'static str,
    city: &'static str,
    nickname: &'static str,
    full_name: &'static str,
}

static FRANCHISES: [Franchise; 30] = [
    Franchise::new(1610612737, "ATL", "Atlanta", "Hawks", "Atlanta Hawks"),
    Franchise::new(1610612738, "BOS", "Boston", "Celtics", "Boston Celtics"),
    Franchise::new(1610612739, "CLE", "Cleveland", "Cavaliers", "Cleveland Cavaliers"),
    Franchise::new(1610612740, "NOP", "New Orleans", "Pelicans", "New Orleans Pelicans"),
    Franchise::new(1610612741, "CHI", "Chicago", "Bulls", "Chicago Bulls"),
    Franchise::new(1610612742, "DAL", "Dallas", "Mavericks", "Dallas Mavericks"),
    Franchise::new(1610612743, "DEN", "Denver", "Nuggets", "Denver Nuggets"),
    Franchise::new(1610612744, "GSW", "Golden State", "Warriors", "Golden State Warriors"),
    Franchise::new(1610612745, "HOU", "Houston", "Rockets", "Houston Rockets"),
    Franchise::new(1610612746, "LAC", "Los Angeles", "Clippers", "Los Angeles Clippers"),
    Franchise::new(1610612747, "LAL", "Los Angeles", "Lakers", "Los Angeles Lakers"),
    Franchise::new(1610612748, "MIA", "Miami", "Heat", "Miami Heat"),
    Franchise::new(1610612749, "MIL", "Milwaukee", "Bucks", "Milwaukee Bucks"),
    Franchise::new(1610612750, "MIN", "Minnesota", "Timberwolves", "Minnesota Timberwolves"),
    Franchise::new(1610612751, "BKN", "Brooklyn", "Nets", "Brooklyn Nets"),
    Franchise::new(1610612752, "NYK", "New York", "Knicks", "New York Knicks"),
    Franchise::new(1610612753, "ORL", "Orlando", "Magic", "Orlando Magic"),
    Franchise::new(1610612754, "IND", "Indiana", "Pacers", "Indiana Pacers"),
    Franchise::new(1610612755, "PHI", "Philadelphia", "76ers", "Philadelphia 76ers"),
    Franchise::new(1610612756, "PHX", "Phoenix", "Suns", "Phoenix Suns"),
    Franchise::new(1610612757, "POR", "Portland", "Trail Blazers", "Portland Trail Blazers"),
    Franchise::new(1610612758, "SAC", "Sacramento", "Kings", "Sacramento Kings"),
    Franchise::new(1610612759, "SAS", "San Antonio", "Spurs", "San Antonio Spurs"),
    Franchise::new(1610612760, "OKC", "Oklahoma City", "Thunder", "Oklahoma City Thunder"),
    Franchise::new(1610612761, "TOR", "Toronto", "Raptors", "Toronto Raptors"),
    Franchise::new(1610612762, "UTA", "Utah", "Jazz", "Utah Jazz"),
    Franchise::new(1610612763, "MEM", "Memphis", "Grizzlies", "Memphis Grizzlies"),
    Franchise::new(1610612764, "WAS", "Washington", "Wizards", "Washington Wizards"),
    Franchise::new(1610612765, "DET", "Detroit", "Pistons", "Detroit Pistons"),
    Franchise::new(1610612766, "CHA", "Charlotte", "Hornets", "Charlotte Hornets"),
];

impl Franchise {
    const fn new(
        id: u64,
        abbreviation: &'static str,
        city: &'static str,
        nickname: &'static str,
        full_name: &'static str,
    ) -> Self {
        Franchise {
            id,
            abbreviation,
            city,
            nickname,
            full_name,
        }
    }

    fn to_ref(&self) -> TeamRef {
        TeamRef {
            id: TeamId::new(self.id),
            full_name: self.full_name.to_string(),
            abbreviation: self.abbreviation.to_string(),
        }
    }
}

/// Resolve a team by full name, nickname, city or abbreviation.
///
/// Exact (case-insensitive) matches on any of those win. Otherwise a word
/// of the full name, nickname or city must start with the query, so "LA"
/// never lands on Atlanta. Abbreviations only match exactly.
pub fn find_team(name: &str) -> Option<TeamRef> {
    best_match_by(
        &FRANCHISES,
        name,
        |f| vec![f.full_name, f.nickname, f.abbreviation, f.city],
        |f| vec![f.full_name, f.nickname, f.city],
        Partial::WordPrefix,
    )
    .map(Franchise::to_ref)
}
