//! HUD Components
//!
//! Stateless readouts drawn every frame from the current [`GameStats`].
//!
//! [`GameStats`]: crate::stats::GameStats

pub mod scoreboard;

pub use scoreboard::Scoreboard;
