//! Storage layer for the scraped box-score rows
//!
//! A thin abstraction over SQLite, organized the same way throughout:
//! - `models`: data structures
//! - `schema`: connection and table management
//! - `queries`: append and read operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::StatsDatabase;
