//! Screen-Space GUI
//!
//! Stateful UI elements at fixed screen positions, drawn on top of the
//! playfield with SDL2 primitives.
//!
//! - [`Button`] - The centered play button

pub mod button;

pub use button::Button;
