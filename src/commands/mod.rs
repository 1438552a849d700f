//! Command implementations for the teamup CLI

pub mod common;
pub mod groups;
pub mod players;
