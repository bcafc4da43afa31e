//! Season types: the user-facing 4-digit end year and the provider's
//! hyphenated season identifier.

use crate::error::{Result, StatsError};
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static SEASON_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("season token pattern"));

/// A validated 4-digit season end year, e.g. `2025` for the 2024-25 season.
///
/// Serialized as its 4-digit string and validated again when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeasonToken(u16);

impl SeasonToken {
    /// Provider identifier for this season.
    pub fn season_id(&self) -> SeasonId {
        let end = self.0 as i32;
        SeasonId(format!("{}-{:02}", end - 1, end % 100))
    }
}

impl fmt::Display for SeasonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for SeasonToken {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if !SEASON_TOKEN_RE.is_match(s) {
            return Err(StatsError::InvalidFormat {
                token: s.to_string(),
            });
        }
        // Four ASCII digits always fit in a u16.
        s.parse()
            .map(Self)
            .map_err(|_| StatsError::InvalidFormat {
                token: s.to_string(),
            })
    }
}

impl TryFrom<String> for SeasonToken {
    type Error = StatsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SeasonToken> for String {
    fn from(token: SeasonToken) -> Self {
        token.to_string()
    }
}

/// Provider season identifier, `"<startYear>-<YY>"`.
///
/// String ordering of identifiers is chronological for 4-digit years, so the
/// derived `Ord` is used to sort season tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeasonId(String);

impl SeasonId {
    /// Wrap an identifier exactly as the provider reported it.
    pub fn from_provider(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The season the provider treats as current: a new season starts in October.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::for_date(today.year(), today.month())
    }

    fn for_date(year: i32, month: u32) -> Self {
        let start = if month >= 10 { year } else { year - 1 };
        Self(format!("{}-{:02}", start, (start + 1).rem_euclid(100)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a user-supplied season token into the provider's identifier.
///
/// ```rust
/// use nba_stats::to_season_id;
///
/// assert_eq!(to_season_id("2025").unwrap().as_str(), "2024-25");
/// assert!(to_season_id("25").is_err());
/// ```
pub fn to_season_id(token: &str) -> Result<SeasonId> {
    Ok(token.parse::<SeasonToken>()?.season_id())
}

/// Normalize an optional token, validating it when present.
pub fn to_optional_season_id(token: Option<&str>) -> Result<Option<SeasonId>> {
    token.map(to_season_id).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_season_id_well_formed() {
        assert_eq!(to_season_id("2025").unwrap().as_str(), "2024-25");
        assert_eq!(to_season_id("2004").unwrap().as_str(), "2003-04");
        assert_eq!(to_season_id("1997").unwrap().as_str(), "1996-97");
    }

    #[test]
    fn test_to_season_id_century_boundary() {
        assert_eq!(to_season_id("2000").unwrap().as_str(), "1999-00");
        assert_eq!(to_season_id("2001").unwrap().as_str(), "2000-01");
    }

    #[test]
    fn test_to_season_id_matches_formula_for_every_year() {
        for year in 1000u16..=9999 {
            let token = year.to_string();
            let expected = format!("{}-{}", year - 1, &token[2..]);
            assert_eq!(to_season_id(&token).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_to_season_id_rejects_malformed() {
        let bad_tokens = [
            "", "25", "202", "20255", "2024-25", " 2025", "2025 ", "abcd", "２０２５", "+202",
        ];
        for bad in bad_tokens {
            match to_season_id(bad) {
                Err(StatsError::InvalidFormat { token }) => assert_eq!(token, bad),
                other => panic!("expected InvalidFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_optional_season_id() {
        assert!(to_optional_season_id(None).unwrap().is_none());
        assert_eq!(
            to_optional_season_id(Some("2021")).unwrap(),
            Some(SeasonId::from_provider("2020-21"))
        );
        assert!(to_optional_season_id(Some("21")).is_err());
    }

    #[test]
    fn test_season_id_ordering_is_chronological() {
        let mut seasons = vec![
            SeasonId::from_provider("2003-04"),
            SeasonId::from_provider("1999-00"),
            SeasonId::from_provider("2024-25"),
            SeasonId::from_provider("2000-01"),
        ];
        seasons.sort();
        let ordered: Vec<&str> = seasons.iter().map(|s| s.as_str()).collect();
        assert_eq!(ordered, vec!["1999-00", "2000-01", "2003-04", "2024-25"]);
    }

    #[test]
    fn test_current_season_rolls_over_in_october() {
        assert_eq!(SeasonId::for_date(2025, 9).as_str(), "2024-25");
        assert_eq!(SeasonId::for_date(2025, 10).as_str(), "2025-26");
        assert_eq!(SeasonId::for_date(2099, 12).as_str(), "2099-00");
    }

    #[test]
    fn test_season_token_display() {
        let token: SeasonToken = "2016".parse().unwrap();
        assert_eq!(token.to_string(), "2016");
        assert_eq!(token.season_id().as_str(), "2015-16");
    }

    #[test]
    fn test_season_token_serde_validates() {
        let token: SeasonToken = serde_json::from_str("\"2025\"").unwrap();
        assert_eq!(token.season_id().as_str(), "2024-25");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"2025\"");

        assert!(serde_json::from_str::<SeasonToken>("\"12345\"").is_err());
        assert!(serde_json::from_str::<SeasonToken>("\"25\"").is_err());
        assert!(serde_json::from_str::<SeasonToken>("2025").is_err());
    }
}
