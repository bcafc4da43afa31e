//! Runtime settings: provider URL, call timeout and message budget.
//!
//! Values come from defaults, then environment variables, then explicit
//! command-line options, each layer overriding the previous one.

use std::time::Duration;

use crate::{
    core::{chunk::DEFAULT_MESSAGE_BUDGET, timeout::DEFAULT_TIMEOUT},
    error::{Result, StatsError},
    nba::http::NBA_STATS_BASE_URL,
    BASE_URL_ENV_VAR, MESSAGE_BUDGET_ENV_VAR, TIMEOUT_ENV_VAR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub message_budget: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: NBA_STATS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            message_budget: DEFAULT_MESSAGE_BUDGET,
        }
    }
}

fn parse_positive<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(StatsError::InvalidConfig {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            settings.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            settings.timeout = Duration::from_secs(parse_positive(TIMEOUT_ENV_VAR, &raw)?);
        }
        if let Some(raw) = lookup(MESSAGE_BUDGET_ENV_VAR) {
            settings.message_budget = parse_positive(MESSAGE_BUDGET_ENV_VAR, &raw)?;
        }

        Ok(settings)
    }

    /// Apply command-line options on top of the current values.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        message_budget: Option<usize>,
    ) -> Result<Self> {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(parse_positive("--timeout", &secs.to_string())?);
        }
        if let Some(budget) = message_budget {
            self.message_budget = parse_positive("--budget", &budget.to_string())?;
        }
        Ok(self)
    }
}
