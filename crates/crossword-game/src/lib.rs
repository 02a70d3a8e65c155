//! Interactive crossword session.
//!
//! This crate drives the fill-in phase: once a layout is built, the
//! [`NavigationEngine`] takes ownership of the [`Grid`] and reacts to user
//! input one event at a time.
//!
//! # Overview
//!
//! - [`NavigationEngine`]: owns the grid, the current selection, the keyboard
//!   visibility and the axis memory used to auto-advance the cursor.
//! - [`NavigationEvent`]: the input operations (tap, letter, next, keyboard
//!   visibility changes, cancel) as a single enum.
//! - [`NavigationState`]: the snapshot emitted after every event.
//!
//! [`Grid`]: crossword_core::Grid
//!
//! # Examples
//!
//! ```
//! use crossword_builder::CrosswordBuilder;
//! use crossword_core::Coordinates;
//! use crossword_game::{MovementDirection, NavigationEngine, NavigationEvent};
//!
//! let mut builder = CrosswordBuilder::default();
//! builder.add_word("cat")?;
//! let grid = builder.into_grid().cropped().expect("layout has letters");
//!
//! let mut engine = NavigationEngine::new(grid);
//! engine.handle(NavigationEvent::SelectCell(Coordinates::new(0, 0)));
//! let state = engine.handle(NavigationEvent::LetterEntered('C'));
//!
//! assert!(state.keyboard_visible());
//! assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));
//! assert_eq!(engine.direction(), MovementDirection::Vertical);
//! # Ok::<(), crossword_builder::PlacementError>(())
//! ```

pub use self::{
    navigation::NavigationEngine,
    state::{KeyboardState, MovementDirection, NavigationEvent, NavigationState},
};

mod navigation;
mod state;
