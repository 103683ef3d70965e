//! Command implementations for the Celtics stats CLI

pub mod fetch;
pub mod populate;
pub mod report;
