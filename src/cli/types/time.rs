//! Season label handling.

use crate::error::{Result, StatsError};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An NBA season label spanning two calendar years, e.g. `"2024-25"`.
///
/// Stored as the starting year; the two-digit suffix is derived. `FromStr`
/// validates both the shape and that the suffix really is the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonLabel(pub u16);

impl SeasonLabel {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// The season in progress (or most recently started) today.
    ///
    /// NBA seasons tip off in October; before October the label still refers
    /// to the season that started the previous year.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        let year = today.year() as u16;
        if today.month() >= 10 {
            Self(year)
        } else {
            Self(year - 1)
        }
    }
}

impl Default for SeasonLabel {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl FromStr for SeasonLabel {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidSeason {
            label: s.to_string(),
        };

        let (start, suffix) = s.split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || suffix.len() != 2 {
            return Err(invalid());
        }
        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        let suffix_year: u16 = suffix.parse().map_err(|_| invalid())?;
        if suffix_year != (start_year + 1) % 100 {
            return Err(invalid());
        }
        Ok(Self(start_year))
    }
}
