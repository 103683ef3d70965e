//! Type-safe wrappers shared between the CLI and the library.

pub mod ids;
pub mod time;

pub use ids::{GameId, PlayerId, TeamId};
pub use time::SeasonLabel;
