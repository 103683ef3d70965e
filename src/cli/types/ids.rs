//! ID types for NBA teams, players, and games.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for the NBA's stable numeric team identifiers.
///
/// Ensures team ids are handled consistently throughout the application and
/// never mixed up with player ids or other numeric values.
///
/// # Examples
///
/// ```rust
/// use celtics_stats::TeamId;
///
/// let team_id = TeamId::new(1610612738);
/// assert_eq!(team_id.as_i64(), 1610612738);
/// assert_eq!(team_id.to_string(), "1610612738");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Create a new TeamId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for NBA player identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque game identifier, e.g. `"0022400123"`.
///
/// The stats API treats these as strings with leading zeroes, so no numeric
/// parsing is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
