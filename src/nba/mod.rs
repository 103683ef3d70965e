//! NBA stats API integration: static team directory, response envelope
//! model, and the HTTP client.

pub mod http;
pub mod teams;
pub mod types;

pub use http::NbaClient;
pub use teams::{find_by_full_name, Team, TEAM_DIRECTORY};
pub use types::{ResultSet, StatsEnvelope};
