//! Static directory of NBA franchises.
//!
//! The stats API identifies teams by stable numeric ids that are not
//! discoverable from the API itself, so the directory ships with the binary.

use crate::cli::types::TeamId;
use crate::error::{Result, StatsError};

/// One franchise in the static directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub city: &'static str,
    pub nickname: &'static str,
}

impl Team {
    pub fn team_id(&self) -> TeamId {
        TeamId::new(self.id)
    }
}

/// The 30 current NBA franchises with their stable stats-API ids.
pub const TEAM_DIRECTORY: &[Team] = &[
    Team { id: 1610612737, full_name: "Atlanta Hawks", abbreviation: "ATL", city: "Atlanta", nickname: "Hawks" },
    Team { id: 1610612738, full_name: "Boston Celtics", abbreviation: "BOS", city: "Boston", nickname: "Celtics" },
    Team { id: 1610612751, full_name: "Brooklyn Nets", abbreviation: "BKN", city: "Brooklyn", nickname: "Nets" },
    Team { id: 1610612766, full_name: "Charlotte Hornets", abbreviation: "CHA", city: "Charlotte", nickname: "Hornets" },
    Team { id: 1610612741, full_name: "Chicago Bulls", abbreviation: "CHI", city: "Chicago", nickname: "Bulls" },
    Team { id: 1610612739, full_name: "Cleveland Cavaliers", abbreviation: "CLE", city: "Cleveland", nickname: "Cavaliers" },
    Team { id: 1610612742, full_name: "Dallas Mavericks", abbreviation: "DAL", city: "Dallas", nickname: "Mavericks" },
    Team { id: 1610612743, full_name: "Denver Nuggets", abbreviation: "DEN", city: "Denver", nickname: "Nuggets" },
    Team { id: 1610612765, full_name: "Detroit Pistons", abbreviation: "DET", city: "Detroit", nickname: "Pistons" },
    Team { id: 1610612744, full_name: "Golden State Warriors", abbreviation: "GSW", city: "Golden State", nickname: "Warriors" },
    Team { id: 1610612745, full_name: "Houston Rockets", abbreviation: "HOU", city: "Houston", nickname: "Rockets" },
    Team { id: 1610612754, full_name: "Indiana Pacers", abbreviation: "IND", city: "Indiana", nickname: "Pacers" },
    Team { id: 1610612746, full_name: "Los Angeles Clippers", abbreviation: "LAC", city: "Los Angeles", nickname: "Clippers" },
    Team { id: 1610612747, full_name: "Los Angeles Lakers", abbreviation: "LAL", city: "Los Angeles", nickname: "Lakers" },
    Team { id: 1610612763, full_name: "Memphis Grizzlies", abbreviation: "MEM", city: "Memphis", nickname: "Grizzlies" },
    Team { id: 1610612748, full_name: "Miami Heat", abbreviation: "MIA", city: "Miami", nickname: "Heat" },
    Team { id: 1610612749, full_name: "Milwaukee Bucks", abbreviation: "MIL", city: "Milwaukee", nickname: "Bucks" },
    Team { id: 1610612750, full_name: "Minnesota Timberwolves", abbreviation: "MIN", city: "Minnesota", nickname: "Timberwolves" },
    Team { id: 1610612740, full_name: "New Orleans Pelicans", abbreviation: "NOP", city: "New Orleans", nickname: "Pelicans" },
    Team { id: 1610612752, full_name: "New York Knicks", abbreviation: "NYK", city: "New York", nickname: "Knicks" },
    Team { id: 1610612760, full_name: "Oklahoma City Thunder", abbreviation: "OKC", city: "Oklahoma City", nickname: "Thunder" },
    Team { id: 1610612753, full_name: "Orlando Magic", abbreviation: "ORL", city: "Orlando", nickname: "Magic" },
    Team { id: 1610612755, full_name: "Philadelphia 76ers", abbreviation: "PHI", city: "Philadelphia", nickname: "76ers" },
    Team { id: 1610612756, full_name: "Phoenix Suns", abbreviation: "PHX", city: "Phoenix", nickname: "Suns" },
    Team { id: 1610612757, full_name: "Portland Trail Blazers", abbreviation: "POR", city: "Portland", nickname: "Trail Blazers" },
    Team { id: 1610612758, full_name: "Sacramento Kings", abbreviation: "SAC", city: "Sacramento", nickname: "Kings" },
    Team { id: 1610612759, full_name: "San Antonio Spurs", abbreviation: "SAS", city: "San Antonio", nickname: "Spurs" },
    Team { id: 1610612761, full_name: "Toronto Raptors", abbreviation: "TOR", city: "Toronto", nickname: "Raptors" },
    Team { id: 1610612762, full_name: "Utah Jazz", abbreviation: "UTA", city: "Utah", nickname: "Jazz" },
    Team { id: 1610612764, full_name: "Washington Wizards", abbreviation: "WAS", city: "Washington", nickname: "Wizards" },
];

/// Look up a franchise by its exact full name.
pub fn find_by_full_name(name: &str) -> Result<&'static Team> {
    TEAM_DIRECTORY
        .iter()
        .find(|team| team.full_name == name)
        .ok_or_else(|| StatsError::TeamNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_celtics() {
        let team = find_by_full_name("Boston Celtics").unwrap();
        assert_eq!(team.id, 1610612738);
        assert_eq!(team.abbreviation, "BOS");
        assert_eq!(team.city, "Boston");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(find_by_full_name("boston celtics").is_err());
        assert!(find_by_full_name("Celtics").is_err());
    }

    #[test]
    fn test_unknown_team_error_names_the_team() {
        let err = find_by_full_name("Seattle SuperSonics").unwrap_err();
        assert!(err.to_string().contains("Seattle SuperSonics"));
    }

    #[test]
    fn test_directory_has_thirty_unique_ids() {
        let mut ids: Vec<i64> = TEAM_DIRECTORY.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 30);
    }
}
