//! In-memory [`StatsProvider`] for unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::{
    cli::types::{PlayerId, SeasonId, StatKey, TeamId},
    error::{Result, StatsError},
    nba::{
        http::StatsProvider,
        lookup::best_match,
        types::{
            AllTimeRow, LeaderRow, PlayerRef, PlayerSeason, RosterEntry, SeasonTotals, TeamSeason,
        },
    },
};

#[derive(Default)]
pub struct FakeProvider {
    pub players: Vec<PlayerRef>,
    pub career: Vec<PlayerSeason>,
    pub history: Vec<TeamSeason>,
    pub leaders: Vec<LeaderRow>,
    pub all_time: Vec<AllTimeRow>,
    pub roster: Vec<RosterEntry>,
    pub fail_fetch: bool,
    pub delay: Option<Duration>,
    pub lookups: AtomicUsize,
    pub fetches: AtomicUsize,
    pub seasons_requested: Mutex<Vec<SeasonId>>,
}

impl FakeProvider {
    async fn fetched<T: Clone>(&self, rows: &[T]) -> Result<Vec<T>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_fetch {
            return Err(StatsError::upstream("503 Service Unavailable"));
        }
        Ok(rows.to_vec())
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRef>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(best_match(&self.players, name, |p| vec![p.full_name.as_str()]).cloned())
    }

    async fn player_career(&self, _player: PlayerId) -> Result<Vec<PlayerSeason>> {
        self.fetched(&self.career).await
    }

    async fn team_history(&self, _team: TeamId) -> Result<Vec<TeamSeason>> {
        self.fetched(&self.history).await
    }

    async fn league_leaders(&self, season: &SeasonId) -> Result<Vec<LeaderRow>> {
        if let Ok(mut seen) = self.seasons_requested.lock() {
            seen.push(season.clone());
        }
        self.fetched(&self.leaders).await
    }

    async fn all_time_leaders(&self, _stat: StatKey) -> Result<Vec<AllTimeRow>> {
        self.fetched(&self.all_time).await
    }

    async fn team_roster(&self, _team: TeamId, season: &SeasonId) -> Result<Vec<RosterEntry>> {
        if let Ok(mut seen) = self.seasons_requested.lock() {
            seen.push(season.clone());
        }
        self.fetched(&self.roster).await
    }
}

pub fn player_ref(id: u64, name: &str) -> PlayerRef {
    PlayerRef {
        id: PlayerId::new(id),
        full_name: name.to_string(),
    }
}

pub fn totals(gp: u32, points: f64) -> SeasonTotals {
    SeasonTotals {
        games_played: gp,
        points,
        rebounds: gp as f64 * 5.0,
        assists: gp as f64 * 4.0,
        blocks: gp as f64 * 0.5,
        steals: gp as f64,
        turnovers: gp as f64 * 2.0,
        fouls: gp as f64 * 2.5,
        field_goals_made: gp as f64 * 8.0,
        threes_made: gp as f64 * 1.5,
    }
}

pub fn player_season(season: &str, team: &str, gp: u32, points: f64) -> PlayerSeason {
    PlayerSeason {
        season_id: SeasonId::from_provider(season),
        team: team.to_string(),
        totals: totals(gp, points),
    }
}

pub fn team_season(season: &str, gp: u32, po_wins: u32, po_losses: u32) -> TeamSeason {
    TeamSeason {
        season_id: SeasonId::from_provider(season),
        city: "Minnesota".to_string(),
        name: "Timberwolves".to_string(),
        wins: 50,
        losses: 32,
        playoff_wins: po_wins,
        playoff_losses: po_losses,
        totals: totals(gp, gp as f64 * 110.0),
    }
}

pub fn leader(name: &str, gp: u32, points: f64) -> LeaderRow {
    LeaderRow {
        name: name.to_string(),
        team: "TST".to_string(),
        games_played: gp,
        points,
        ..Default::default()
    }
}
