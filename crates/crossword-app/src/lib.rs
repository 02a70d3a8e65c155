//! Command-line crossword builder and player.
//!
//! The binary builds a layout from a word list, prints it, and can then run a
//! line-oriented fill-in session on standard input.
//!
//! - [`settings`]: grid size and session options with their defaults.
//! - [`words`]: word supply (files, the demo list, seeded shuffling).
//! - [`layout`]: runs the placement engine and formats the result.
//! - [`command`] / [`session`]: text commands mapped onto navigation events.

pub use self::{error::AppError, layout::Layout, settings::Settings};

pub mod command;
mod error;
pub mod layout;
pub mod session;
pub mod settings;
pub mod words;
