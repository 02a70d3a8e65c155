//! Line-oriented fill-in session.
//!
//! Each input line is parsed as a [`Command`], fed to the
//! [`NavigationEngine`], and the resulting state is printed. Selected cells are
//! drawn with parentheses instead of brackets.

use std::io::{self, BufRead, Write};

use crossword_game::{NavigationEngine, NavigationState};

use crate::command::{Command, HELP};

/// Runs a session until `done` or the end of `input`.
///
/// Invalid commands are reported on `output` and the session continues. The
/// engine is finished when this returns normally.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run<R, W>(engine: &mut NavigationEngine, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{HELP}")?;
    render(engine.state(), &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        log::debug!("command: {command:?}");

        match command {
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Done => break,
            Command::Type(letters) => {
                for letter in letters.chars() {
                    engine.enter_letter(letter);
                }
                render(engine.state(), &mut output)?;
            }
            command => {
                if let Some(event) = command.event() {
                    engine.handle(event);
                }
                render(engine.state(), &mut output)?;
            }
        }
    }

    render(engine.finish(), &mut output)?;
    output.flush()
}

/// Writes a state snapshot: the board followed by the keyboard status.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render<W>(state: NavigationState<'_>, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    let Some(grid) = state.grid() else {
        return writeln!(output, "session finished");
    };

    // Cells are stored column by column.
    let mut lines = vec![String::new(); grid.rows()];
    for (i, cell) in grid.cells().enumerate() {
        let letter = cell.letter().map_or_else(
            || " ".to_owned(),
            |letter| letter.to_uppercase().to_string(),
        );
        let (open, close) = if cell.is_selected() {
            ('(', ')')
        } else {
            ('[', ']')
        };
        let line = &mut lines[i % grid.rows()];
        line.push(open);
        line.push_str(&letter);
        line.push(close);
    }
    for line in &lines {
        writeln!(output, "{line}")?;
    }

    let keyboard = if state.keyboard_visible() {
        "open"
    } else {
        "closed"
    };
    writeln!(output, "keyboard: {keyboard}")
}

#[cfg(test)]
mod tests {
    use crate::{Layout, Settings};

    use super::*;

    fn engine() -> NavigationEngine {
        let layout = Layout::build(&Settings::default(), &["cat", "tan"]);
        NavigationEngine::new(layout.grid)
    }

    fn run_script(engine: &mut NavigationEngine, script: &str) -> String {
        let mut output = Vec::new();
        run(engine, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_marks_selection() {
        let mut engine = engine();
        let mut output = Vec::new();
        render(
            engine.select_cell(crossword_core::Coordinates::new(1, 0)),
            &mut output,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[ ](C)[ ]\n[T][A][N]\n[ ][T][ ]\nkeyboard: open\n"
        );
    }

    #[test]
    fn test_typing_fills_down_the_word() {
        let mut engine = engine();
        let output = run_script(&mut engine, "tap 1 0\ntype dog\ndone\n");

        assert!(output.contains("[ ][D][ ]\n[T][O][N]\n[ ][G][ ]\nkeyboard: open\n"));
        assert!(output.ends_with("session finished\n"));
        assert!(engine.is_finished());
    }

    #[test]
    fn test_invalid_command_keeps_session_running() {
        let mut engine = engine();
        let output = run_script(&mut engine, "jump\ntap 0 1\n");

        assert!(output.contains("error: unknown command \"jump\", try \"help\""));
        assert!(output.contains("(T)[A][N]"));
        assert!(engine.is_finished());
    }

    #[test]
    fn test_close_clears_selection() {
        let mut engine = engine();
        let output = run_script(&mut engine, "tap 0 1\nclose\n");

        assert!(output.contains("[T][A][N]\n[ ][T][ ]\nkeyboard: closed\n"));
    }

    #[test]
    fn test_end_of_input_finishes() {
        let mut engine = engine();
        let output = run_script(&mut engine, "");

        assert!(output.starts_with(HELP));
        assert!(output.ends_with("session finished\n"));
    }
}
