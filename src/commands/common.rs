//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use crate::{
    core::{chunk::fence_chunks, config::Settings},
    nba::{http::NbaStatsClient, QueryContext, StatsProvider},
    Result,
};

/// Context containing common resources needed by every command
pub struct CommandContext {
    pub provider: Box<dyn StatsProvider>,
    pub settings: Settings,
}

impl CommandContext {
    /// Build a context talking to the real stats API at `settings.base_url`.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = NbaStatsClient::new(settings.base_url.clone())?;
        Ok(Self::with_provider(Box::new(client), settings))
    }

    /// Build a context around any provider (tests, alternative backends).
    pub fn with_provider(provider: Box<dyn StatsProvider>, settings: Settings) -> Self {
        Self { provider, settings }
    }

    /// Borrow the provider with this context's timeout for one query.
    pub fn query(&self) -> QueryContext<'_> {
        QueryContext::new(self.provider.as_ref(), self.settings.timeout)
    }

    /// A heading message followed by `lines` split into fenced chunks.
    pub fn reply(&self, heading: impl Into<String>, lines: &[String]) -> Vec<String> {
        let mut messages = vec![heading.into()];
        messages.extend(fence_chunks(&lines.join("\n"), self.settings.message_budget));
        messages
    }
}
