use crossword_core::{Coordinates, Grid};

use crate::{KeyboardState, MovementDirection, NavigationEvent, NavigationState};

/// Cursor and letter-entry state machine for an interactive session.
///
/// The engine takes ownership of a finished layout. Every operation mutates
/// the grid in place and returns the resulting [`NavigationState`].
///
/// After a letter is entered (or "next" is requested) the selection advances
/// automatically:
///
/// 1. If the last move was to the right and the next cell to the right is
///    active, move there.
/// 2. If the last move was down and the next cell below is active, move there.
/// 3. If a direction was established but cannot continue, stop: the
///    selection is cleared and the direction becomes
///    [`MovementDirection::Blocked`].
/// 4. Otherwise, when no direction is established yet or the last run was
///    blocked, prefer moving down, then right, and stop if neither cell is
///    active.
///
/// Selecting a cell does not forget the direction: a tap in the middle of a
/// run continues that run from the new cell.
///
/// # Examples
///
/// ```
/// use crossword_core::{Coordinates, Grid};
/// use crossword_game::{MovementDirection, NavigationEngine};
///
/// let grid: Grid = "
///     tan
///     o..
/// "
/// .parse()?;
/// let mut engine = NavigationEngine::new(grid);
///
/// engine.select_cell(Coordinates::new(1, 0));
/// engine.enter_letter('A');
/// assert_eq!(engine.direction(), MovementDirection::Horizontal);
/// assert_eq!(engine.grid().selected(), Some(Coordinates::new(2, 0)));
///
/// // End of the word: movement stops and the selection is cleared.
/// engine.enter_letter('N');
/// assert_eq!(engine.direction(), MovementDirection::Blocked);
/// assert_eq!(engine.grid().selected(), None);
/// # Ok::<(), crossword_core::GridParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    grid: Grid,
    direction: MovementDirection,
    keyboard: KeyboardState,
    finished: bool,
}

impl NavigationEngine {
    /// Creates an engine that takes ownership of `grid`.
    ///
    /// The keyboard starts closed and no direction is remembered. An existing
    /// selection on the grid is kept.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        log::debug!(
            "navigation engine created for a {}x{} grid",
            grid.cols(),
            grid.rows()
        );
        Self {
            grid,
            direction: MovementDirection::Unknown,
            keyboard: KeyboardState::Closed,
            finished: false,
        }
    }

    /// Returns the board.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the engine and returns the board.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the remembered movement direction.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> MovementDirection {
        self.direction
    }

    /// Returns the last known keyboard state.
    #[must_use]
    #[inline]
    pub fn keyboard(&self) -> KeyboardState {
        self.keyboard
    }

    /// Returns `true` once [`NavigationEngine::finish`] has been called.
    #[must_use]
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the current snapshot without changing anything.
    #[must_use]
    pub fn state(&self) -> NavigationState<'_> {
        if self.finished {
            return NavigationState::Finished;
        }
        NavigationState::Changed {
            keyboard_visible: self.keyboard.is_open(),
            grid: &self.grid,
        }
    }

    /// Applies a single input event.
    pub fn handle(&mut self, event: NavigationEvent) -> NavigationState<'_> {
        log::debug!("navigation event: {event:?}");
        match event {
            NavigationEvent::SelectCell(coordinates) => self.select_cell(coordinates),
            NavigationEvent::KeyboardOpened => self.keyboard_opened(),
            NavigationEvent::KeyboardClosed => self.keyboard_closed(),
            NavigationEvent::LetterEntered(letter) => self.enter_letter(letter),
            NavigationEvent::AdvanceRequested => self.advance(),
            NavigationEvent::Cancel => self.cancel(),
        }
    }

    /// Handles a tap on the cell at `coordinates`.
    ///
    /// An active cell becomes the only selected cell. The remembered direction
    /// is kept, so the next advance continues it from the new cell. A tap on
    /// an inactive or absent cell leaves the selection alone. The keyboard is
    /// opened in both cases.
    pub fn select_cell(&mut self, coordinates: Coordinates) -> NavigationState<'_> {
        if self.finished {
            return NavigationState::Finished;
        }
        if self.grid.is_active_at(coordinates) {
            self.grid.select(coordinates);
        } else {
            log::debug!("{coordinates} is not an active cell, selection unchanged");
        }
        self.keyboard = KeyboardState::Open;
        self.state()
    }

    /// Records that the keyboard became visible. The selection is unchanged.
    pub fn keyboard_opened(&mut self) -> NavigationState<'_> {
        if !self.finished {
            self.keyboard = KeyboardState::Open;
        }
        self.state()
    }

    /// Records that the keyboard was hidden and clears the selection.
    pub fn keyboard_closed(&mut self) -> NavigationState<'_> {
        if !self.finished {
            self.keyboard = KeyboardState::Closed;
            self.grid.clear_selection();
        }
        self.state()
    }

    /// Forwards a keyboard visibility report from the input layer.
    pub fn set_keyboard(&mut self, keyboard: KeyboardState) -> NavigationState<'_> {
        match keyboard {
            KeyboardState::Open => self.keyboard_opened(),
            KeyboardState::Closed => self.keyboard_closed(),
        }
    }

    /// Writes `letter` into the selected cell, then advances the selection.
    ///
    /// Without a selection nothing is written and nothing moves.
    pub fn enter_letter(&mut self, letter: char) -> NavigationState<'_> {
        if self.finished {
            return NavigationState::Finished;
        }
        self.grid.write_selected_letter(letter);
        self.advance_selection();
        self.state()
    }

    /// Advances the selection without writing a letter.
    pub fn advance(&mut self) -> NavigationState<'_> {
        if !self.finished {
            self.advance_selection();
        }
        self.state()
    }

    /// Clears the selection and closes the keyboard.
    pub fn cancel(&mut self) -> NavigationState<'_> {
        if !self.finished {
            self.grid.clear_selection();
            self.keyboard = KeyboardState::Closed;
        }
        self.state()
    }

    /// Ends the session.
    ///
    /// The engine never decides on its own that a puzzle is complete; the
    /// caller does, then calls this. The selection is cleared, the keyboard is
    /// closed and every later operation returns [`NavigationState::Finished`].
    pub fn finish(&mut self) -> NavigationState<'_> {
        self.grid.clear_selection();
        self.keyboard = KeyboardState::Closed;
        self.finished = true;
        log::debug!("navigation finished");
        self.state()
    }

    fn advance_selection(&mut self) {
        if !self.grid.has_selection() {
            return;
        }
        let next = match self.direction {
            direction @ (MovementDirection::Horizontal | MovementDirection::Vertical) => {
                if self.step(direction) {
                    direction
                } else {
                    MovementDirection::Blocked
                }
            }
            MovementDirection::Unknown | MovementDirection::Blocked => {
                [MovementDirection::Vertical, MovementDirection::Horizontal]
                    .into_iter()
                    .find(|&direction| self.step(direction))
                    .unwrap_or(MovementDirection::Blocked)
            }
        };
        if next.is_blocked() {
            self.grid.clear_selection();
        }
        log::debug!("selection moved {:?} -> {next:?}", self.direction);
        self.direction = next;
    }

    fn step(&mut self, direction: MovementDirection) -> bool {
        match direction {
            MovementDirection::Horizontal => self.grid.move_selection_by(1, 0),
            MovementDirection::Vertical => self.grid.move_selection_by(0, 1),
            MovementDirection::Unknown | MovementDirection::Blocked => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossword_builder::CrosswordBuilder;
    use proptest::prelude::*;

    use super::*;

    fn engine_from(picture: &str) -> NavigationEngine {
        NavigationEngine::new(picture.parse().unwrap())
    }

    fn selected_count(engine: &NavigationEngine) -> usize {
        engine
            .grid()
            .cells()
            .filter(|cell| cell.is_selected())
            .count()
    }

    #[test]
    fn test_select_active_cell() {
        let mut engine = engine_from(
            "
            cat
            o..
            ",
        );
        let state = engine.select_cell(Coordinates::new(1, 0));
        assert!(state.keyboard_visible());
        assert_eq!(
            state.grid().and_then(Grid::selected),
            Some(Coordinates::new(1, 0))
        );
        assert_eq!(selected_count(&engine), 1);

        engine.select_cell(Coordinates::new(0, 1));
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));
        assert_eq!(selected_count(&engine), 1);
    }

    #[test]
    fn test_select_inactive_cell_opens_keyboard_only() {
        let mut engine = engine_from(
            "
            cat
            o..
            ",
        );
        let state = engine.select_cell(Coordinates::new(2, 1));
        assert!(state.keyboard_visible());
        assert_eq!(engine.grid().selected(), None);
        assert_eq!(selected_count(&engine), 0);

        engine.select_cell(Coordinates::new(0, 0));
        engine.select_cell(Coordinates::new(5, 5));
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 0)));
    }

    #[test]
    fn test_keyboard_events() {
        let mut engine = engine_from("ab");
        assert!(!engine.state().keyboard_visible());

        let state = engine.keyboard_opened();
        assert!(state.keyboard_visible());

        engine.select_cell(Coordinates::new(0, 0));
        let state = engine.keyboard_opened();
        assert_eq!(
            state.grid().and_then(Grid::selected),
            Some(Coordinates::new(0, 0))
        );

        let state = engine.keyboard_closed();
        assert!(!state.keyboard_visible());
        assert_eq!(engine.grid().selected(), None);

        engine.set_keyboard(KeyboardState::Open);
        assert_eq!(engine.keyboard(), KeyboardState::Open);
        engine.set_keyboard(KeyboardState::Closed);
        assert_eq!(engine.keyboard(), KeyboardState::Closed);
    }

    #[test]
    fn test_cancel() {
        let mut engine = engine_from("ab");
        engine.select_cell(Coordinates::new(0, 0));
        let state = engine.cancel();
        assert!(!state.keyboard_visible());
        assert_eq!(engine.grid().selected(), None);
    }

    #[test]
    fn test_first_move_prefers_down() {
        let mut engine = engine_from(
            "
            ab
            c.
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        engine.advance();
        assert_eq!(engine.direction(), MovementDirection::Vertical);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));
    }

    #[test]
    fn test_first_move_falls_back_to_right() {
        let mut engine = engine_from(
            "
            ab
            .c
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        engine.advance();
        assert_eq!(engine.direction(), MovementDirection::Horizontal);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(1, 0)));
    }

    #[test]
    fn test_first_move_blocked() {
        let mut engine = engine_from(
            "
            a.
            ..
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        let keyboard_visible = engine.advance().keyboard_visible();
        assert_eq!(engine.direction(), MovementDirection::Blocked);
        assert_eq!(engine.grid().selected(), None);
        assert!(keyboard_visible);
    }

    #[test]
    fn test_established_direction_is_kept() {
        // Typing along the top row must not turn down at the 'a', even though
        // the cell below it is active.
        let mut engine = engine_from(
            "
            cat.
            .x..
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        engine.enter_letter('C');
        assert_eq!(engine.direction(), MovementDirection::Horizontal);
        engine.enter_letter('A');
        assert_eq!(engine.direction(), MovementDirection::Horizontal);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(2, 0)));
    }

    #[test]
    fn test_blocked_direction_needs_new_selection() {
        let mut engine = engine_from(
            "
            c..
            a..
            tx.
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        engine.enter_letter('c');
        engine.enter_letter('a');
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 2)));
        // Vertical movement ends at the bottom edge. The active cell to the
        // right is not used because the direction is already established.
        engine.enter_letter('t');
        assert_eq!(engine.direction(), MovementDirection::Blocked);
        assert_eq!(engine.grid().selected(), None);

        // Nothing is selected, so further input is ignored.
        let before = engine.grid().clone();
        engine.enter_letter('z');
        engine.advance();
        assert_eq!(engine.grid(), &before);

        // After a stop, a new tap takes the down-then-right preference again.
        engine.select_cell(Coordinates::new(0, 1));
        assert_eq!(engine.direction(), MovementDirection::Blocked);
        engine.advance();
        assert_eq!(engine.direction(), MovementDirection::Vertical);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 2)));
    }

    #[test]
    fn test_tap_keeps_established_direction() {
        let mut engine = engine_from(
            "
            abc
            d..
            e..
            ",
        );
        engine.select_cell(Coordinates::new(0, 0));
        engine.advance();
        assert_eq!(engine.direction(), MovementDirection::Vertical);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));

        // Nothing is below (1, 0), so the vertical run stops instead of
        // turning right.
        engine.select_cell(Coordinates::new(1, 0));
        assert_eq!(engine.direction(), MovementDirection::Vertical);
        engine.advance();
        assert_eq!(engine.direction(), MovementDirection::Blocked);
        assert_eq!(engine.grid().selected(), None);
    }

    #[test]
    fn test_enter_letter_writes_selected_cell() {
        let mut engine = engine_from("ab");
        engine.enter_letter('x');
        assert_eq!(engine.grid().to_string(), "[A][B]");

        engine.select_cell(Coordinates::new(1, 0));
        engine.enter_letter('q');
        assert_eq!(engine.grid().to_string(), "[A][Q]");
        assert_eq!(
            engine
                .grid()
                .get(Coordinates::new(1, 0))
                .and_then(crossword_core::Cell::letter),
            Some('q')
        );
        assert!(engine.grid().cells().all(|cell| cell.is_active() == cell.has_letter()));
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut engine = engine_from(
            "
            ab
            c.
            ",
        );
        engine.handle(NavigationEvent::SelectCell(Coordinates::new(0, 0)));
        engine.handle(NavigationEvent::LetterEntered('A'));
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));
        engine.handle(NavigationEvent::Cancel);
        assert_eq!(engine.grid().selected(), None);
        engine.handle(NavigationEvent::KeyboardOpened);
        assert!(engine.keyboard().is_open());
        engine.handle(NavigationEvent::KeyboardClosed);
        assert!(engine.keyboard().is_closed());
        engine.handle(NavigationEvent::SelectCell(Coordinates::new(0, 0)));
        engine.handle(NavigationEvent::AdvanceRequested);
        assert_eq!(engine.grid().selected(), Some(Coordinates::new(0, 1)));
    }

    #[test]
    fn test_finish_is_terminal() {
        let mut engine = engine_from("ab");
        engine.select_cell(Coordinates::new(0, 0));
        assert!(engine.finish().is_finished());
        assert!(engine.is_finished());
        assert_eq!(engine.grid().selected(), None);

        assert!(engine.select_cell(Coordinates::new(1, 0)).is_finished());
        assert!(engine.enter_letter('z').is_finished());
        assert!(engine.keyboard_opened().is_finished());
        assert_eq!(engine.grid().selected(), None);
        assert!(engine.keyboard().is_closed());
        assert_eq!(engine.state().grid(), None);
    }

    #[test]
    fn test_fill_built_layout() {
        let mut builder = CrosswordBuilder::default();
        builder.add_word("cat").unwrap();
        builder.add_word("tan").unwrap();
        let (grid, words) = builder.into_parts();
        let bounds = grid.bounds().unwrap();
        let grid = grid.cropped().unwrap();
        let tan = words[1].translated(bounds.min);

        let mut engine = NavigationEngine::new(grid);
        engine.select_cell(tan.start);
        for letter in tan.text.chars() {
            engine.enter_letter(letter.to_ascii_uppercase());
        }
        // Nothing is below the 't', so the first move goes right.
        assert_eq!(engine.direction(), MovementDirection::Blocked);
        assert_eq!(engine.grid().to_string(), "[ ][C][ ]\n[T][A][N]\n[ ][T][ ]");
    }

    fn event_strategy() -> impl Strategy<Value = NavigationEvent> {
        prop_oneof![
            (-1..4i32, -1..4i32)
                .prop_map(|(x, y)| NavigationEvent::SelectCell(Coordinates::new(x, y))),
            Just(NavigationEvent::KeyboardOpened),
            Just(NavigationEvent::KeyboardClosed),
            prop::char::range('a', 'z').prop_map(NavigationEvent::LetterEntered),
            Just(NavigationEvent::AdvanceRequested),
            Just(NavigationEvent::Cancel),
        ]
    }

    proptest! {
        #[test]
        fn prop_selection_stays_on_single_active_cell(
            events in prop::collection::vec(event_strategy(), 0..40),
        ) {
            let mut engine = engine_from(
                "
                ca.
                at.
                tan
                ",
            );
            let active: Vec<_> = engine
                .grid()
                .cells()
                .map(|cell| (cell.coordinates(), cell.is_active()))
                .collect();

            for event in events {
                engine.handle(event);
                prop_assert!(selected_count(&engine) <= 1);
                if let Some(pos) = engine.grid().selected() {
                    prop_assert!(engine.grid().is_active_at(pos));
                    prop_assert!(engine.grid().get(pos).is_some_and(|c| c.is_selected()));
                }
                if engine.direction().is_blocked() {
                    prop_assert_eq!(engine.grid().selected(), None);
                }
            }

            // Letter entry never activates or deactivates cells.
            for (pos, was_active) in active {
                prop_assert_eq!(engine.grid().is_active_at(pos), was_active);
            }
        }
    }
}
