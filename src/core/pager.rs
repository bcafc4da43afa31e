//! Per-response cursor for stepping through pre-fetched seasons.

use std::collections::BTreeMap;

use crate::{
    cli::types::SeasonId,
    core::chunk::{fence_chunks, DEFAULT_MESSAGE_BUDGET},
    error::{Result, StatsError},
};

/// Navigation state for one interactive season-by-season response.
///
/// Pages are formatted up front; moving the cursor never touches the network.
/// Only the user who opened the pager may drive it.
#[derive(Debug, Clone)]
pub struct SeasonPager {
    owner: String,
    title: String,
    seasons: Vec<SeasonId>,
    pages: BTreeMap<SeasonId, String>,
    index: usize,
    budget: usize,
}

/// Which way a navigation control moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl SeasonPager {
    /// Open a pager on the most recent season. Fails with `NoData` when there
    /// is nothing to page through.
    pub fn new(
        owner: impl Into<String>,
        title: impl Into<String>,
        pages: BTreeMap<SeasonId, String>,
    ) -> Result<Self> {
        if pages.is_empty() {
            return Err(StatsError::NoData);
        }
        let seasons: Vec<SeasonId> = pages.keys().cloned().collect();
        let index = seasons.len() - 1;
        Ok(Self {
            owner: owner.into(),
            title: title.into(),
            seasons,
            pages,
            index,
            budget: DEFAULT_MESSAGE_BUDGET,
        })
    }

    /// Split rendered pages into messages of at most `budget` characters.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Whether `user` may press this pager's buttons.
    pub fn accepts(&self, user: &str) -> bool {
        self.owner == user
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current_season(&self) -> &SeasonId {
        &self.seasons[self.index]
    }

    pub fn current_page(&self) -> &str {
        self.pages
            .get(self.current_season())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.seasons.len()
    }

    /// Move one season in `direction`. Returns `false` (and stays put) at
    /// either end.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Previous if self.has_previous() => self.index -= 1,
            Direction::Next if self.has_next() => self.index += 1,
            _ => return false,
        }
        true
    }

    /// Move in `direction` on behalf of `user`; other users are ignored.
    pub fn step_for(&mut self, user: &str, direction: Direction) -> bool {
        self.accepts(user) && self.step(direction)
    }

    /// Jump straight to `season` if it was fetched.
    pub fn jump_to(&mut self, season: &SeasonId) -> bool {
        match self.seasons.iter().position(|s| s == season) {
            Some(idx) => {
                self.index = idx;
                true
            }
            None => false,
        }
    }

    /// Messages for the current page: the fenced season text followed by a
    /// position footer.
    pub fn render(&self) -> Vec<String> {
        let mut messages = fence_chunks(
            &format!("{}\n{}", self.title, self.current_page()),
            self.budget,
        );
        messages.push(format!(
            "Season {}/{} ({})",
            self.index + 1,
            self.seasons.len(),
            self.current_season()
        ));
        messages
    }
}
