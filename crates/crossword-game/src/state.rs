use crossword_core::{Coordinates, Grid};

/// Axis the cursor is currently auto-advancing along.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MovementDirection {
    /// No movement has happened yet.
    #[default]
    Unknown,
    /// Moving right.
    Horizontal,
    /// Moving down.
    Vertical,
    /// Movement stopped; the user has to select a cell again.
    Blocked,
}

/// Visibility of the on-screen keyboard, as reported by the input layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum KeyboardState {
    /// The keyboard is shown.
    Open,
    /// The keyboard is hidden.
    #[default]
    Closed,
}

/// A single user input delivered to the [`NavigationEngine`](crate::NavigationEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The user tapped a cell.
    SelectCell(Coordinates),
    /// The keyboard became visible.
    KeyboardOpened,
    /// The keyboard was hidden.
    KeyboardClosed,
    /// The user typed a letter.
    LetterEntered(char),
    /// The user asked to move to the next cell without typing.
    AdvanceRequested,
    /// The user backed out of editing.
    Cancel,
}

/// Snapshot emitted after each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum NavigationState<'a> {
    /// The board or keyboard state may have changed.
    Changed {
        /// Whether the keyboard should be shown.
        keyboard_visible: bool,
        /// The board to render.
        grid: &'a Grid,
    },
    /// The session was finished by the caller; no further input is accepted.
    Finished,
}

impl<'a> NavigationState<'a> {
    /// Returns the board, unless the session is finished.
    #[must_use]
    pub fn grid(&self) -> Option<&'a Grid> {
        match *self {
            NavigationState::Changed { grid, .. } => Some(grid),
            NavigationState::Finished => None,
        }
    }

    /// Returns `true` if the keyboard should be shown.
    #[must_use]
    pub fn keyboard_visible(&self) -> bool {
        match *self {
            NavigationState::Changed {
                keyboard_visible, ..
            } => keyboard_visible,
            NavigationState::Finished => false,
        }
    }
}
