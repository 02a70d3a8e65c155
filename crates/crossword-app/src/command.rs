//! Text commands for the interactive session.

use std::str::FromStr;

use crossword_core::Coordinates;
use crossword_game::NavigationEvent;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  tap X Y        select the cell at column X, row Y
  type LETTERS   enter letters into the selected cell and onward
  next           move to the next cell without typing
  open | close   report the keyboard as shown or hidden
  back           clear the selection and hide the keyboard
  show           print the board again
  done           finish the session
  help           print this text";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `tap X Y`
    Tap(Coordinates),
    /// `type LETTERS`
    Type(String),
    /// `next`
    Next,
    /// `open`
    Open,
    /// `close`
    Close,
    /// `back`
    Back,
    /// `show`
    Show,
    /// `help`
    Help,
    /// `done`
    Done,
}

impl Command {
    /// Returns the navigation event this command maps to directly.
    ///
    /// [`Command::Type`] expands to one event per letter and the session
    /// commands have no event; both return `None`.
    #[must_use]
    pub fn event(&self) -> Option<NavigationEvent> {
        match *self {
            Command::Tap(coordinates) => Some(NavigationEvent::SelectCell(coordinates)),
            Command::Next => Some(NavigationEvent::AdvanceRequested),
            Command::Open => Some(NavigationEvent::KeyboardOpened),
            Command::Close => Some(NavigationEvent::KeyboardClosed),
            Command::Back => Some(NavigationEvent::Cancel),
            Command::Type(_) | Command::Show | Command::Help | Command::Done => None,
        }
    }
}

/// Errors from parsing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    /// The line held no command.
    #[display("empty command")]
    Empty,
    /// The command name is not known.
    #[display("unknown command {name:?}, try \"help\"")]
    Unknown {
        /// The name as typed.
        name: String,
    },
    /// A required argument is missing.
    #[display("{command} expects {expected}")]
    MissingArgument {
        /// Command name.
        command: &'static str,
        /// Description of the missing argument.
        expected: &'static str,
    },
    /// A coordinate is not an integer.
    #[display("invalid coordinate {value:?}")]
    InvalidCoordinate {
        /// The argument as typed.
        value: String,
    },
    /// The command was given more arguments than it takes.
    #[display("unexpected argument {value:?}")]
    UnexpectedArgument {
        /// The first extra argument.
        value: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = s.split_whitespace();
        let name = args.next().ok_or(CommandError::Empty)?;
        let command = match name.to_ascii_lowercase().as_str() {
            "tap" => {
                let x = parse_coordinate(args.next(), "tap")?;
                let y = parse_coordinate(args.next(), "tap")?;
                Command::Tap(Coordinates::new(x, y))
            }
            "type" => {
                let letters = args.next().ok_or(CommandError::MissingArgument {
                    command: "type",
                    expected: "letters",
                })?;
                Command::Type(letters.to_owned())
            }
            "next" => Command::Next,
            "open" => Command::Open,
            "close" => Command::Close,
            "back" => Command::Back,
            "show" => Command::Show,
            "help" => Command::Help,
            "done" => Command::Done,
            _ => {
                return Err(CommandError::Unknown {
                    name: name.to_owned(),
                });
            }
        };
        if let Some(extra) = args.next() {
            return Err(CommandError::UnexpectedArgument {
                value: extra.to_owned(),
            });
        }
        Ok(command)
    }
}

fn parse_coordinate(arg: Option<&str>, command: &'static str) -> Result<i32, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        expected: "two coordinates",
    })?;
    arg.parse().map_err(|_| CommandError::InvalidCoordinate {
        value: arg.to_owned(),
    })
}
