//! Type-safe wrappers for roster names.

pub mod names;
pub mod team;

#[cfg(test)]
mod tests;

pub use names::{GroupName, PlayerName};
pub use team::TeamName;
