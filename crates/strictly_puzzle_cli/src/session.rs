//! Interactive play: turns text commands into grid moves.

use std::io::{BufRead, Write};
use strictly_puzzle::{Grid, Piece};
use tracing::{debug, instrument, warn};

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the piece at these coordinates into the empty cell.
    Slide {
        /// Column.
        x: i64,
        /// Row.
        y: i64,
    },
    /// Show usage.
    Help,
    /// Stop playing.
    Quit,
}

impl Command {
    /// Parses `x y`, `help`/`h`/`?` or `quit`/`q`.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Some(Command::Quit),
            "h" | "help" | "?" => return Some(Command::Help),
            _ => {}
        }

        let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Command::Slide { x, y })
    }
}

/// What happened in response to a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The piece slid into the empty cell.
    Moved(Piece),
    /// The command was understood but the puzzle refused it.
    Refused(String),
    /// The line could not be parsed.
    Unrecognized(String),
    /// Usage text.
    Help,
    /// The player is done.
    Quit,
}

/// A puzzle being played from text input.
#[derive(Debug, Clone)]
pub struct PlaySession {
    grid: Grid,
    moves: usize,
}

impl PlaySession {
    /// Starts a session on `grid`.
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn new(grid: Grid) -> Self {
        Self { grid, moves: 0 }
    }

    /// The current puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of successful moves so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Ends the session, returning the puzzle.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Handles one line of input.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn handle(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Some(Command::Quit) => Reply::Quit,
            Some(Command::Help) => Reply::Help,
            Some(Command::Slide { x, y }) => self.slide(x, y),
            None => {
                debug!(line, "Unrecognized input");
                Reply::Unrecognized(line.trim().to_string())
            }
        }
    }

    fn slide(&mut self, x: i64, y: i64) -> Reply {
        let piece = match self.grid.piece_at_coordinates(x, y) {
            Ok(Some(piece)) => piece,
            Ok(None) => return Reply::Refused(format!("({},{}) is the empty cell", x, y)),
            Err(e) => {
                warn!(x, y, error = %e.kind(), "Lookup failed");
                return Reply::Refused(e.kind().to_string());
            }
        };

        if self.grid.do_move_to_empty(&piece) {
            self.moves += 1;
            Reply::Moved(piece)
        } else {
            Reply::Refused(format!(
                "{} is not next to the empty cell {}",
                piece.current_position(),
                self.grid.empty_position()
            ))
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// The grid and the movable pieces are written to `out` at the start and
    /// after every command.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> std::io::Result<()> {
        self.print_turn(out)?;
        for line in input.lines() {
            match self.handle(&line?) {
                Reply::Quit => break,
                Reply::Help => {
                    writeln!(out, "Type the column and row of a piece next to the gap, e.g. `2 3`.")?;
                    writeln!(out, "`q` saves and quits.")?;
                }
                Reply::Moved(_) => {}
                Reply::Refused(reason) => writeln!(out, "Can't move: {}", reason)?,
                Reply::Unrecognized(text) => {
                    writeln!(out, "Didn't understand `{}` (try `help`)", text)?
                }
            }
            self.print_turn(out)?;
        }
        Ok(())
    }

    fn print_turn(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.grid)?;
        writeln!(out, "Movable: {}", self.hint())?;
        write!(out, "> ")?;
        out.flush()
    }

    /// Coordinates of the pieces that can move, formatted for a prompt.
    pub fn hint(&self) -> String {
        self.grid
            .movable_pieces()
            .iter()
            .map(|piece| {
                let at = piece.current_position();
                format!("{} {} [{}]", at.x(), at.y(), piece.label(self.grid.size()))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse(" HELP "), Some(Command::Help));
        assert_eq!(Command::parse("1 2"), Some(Command::Slide { x: 1, y: 2 }));
        assert_eq!(Command::parse("1,2"), Some(Command::Slide { x: 1, y: 2 }));
        assert_eq!(Command::parse("-1 0"), Some(Command::Slide { x: -1, y: 0 }));
        assert_eq!(Command::parse("1"), None);
        assert_eq!(Command::parse("1 2 3"), None);
        assert_eq!(Command::parse("up"), None);
    }

    #[test]
    fn test_session_moves_and_counts() {
        let mut session = PlaySession::new(Grid::solved(3).unwrap());
        assert!(matches!(session.handle("1 2"), Reply::Moved(_)));
        assert_eq!(session.moves(), 1);
        assert!(matches!(session.handle("0 0"), Reply::Refused(_)));
        assert!(matches!(session.handle("1 2"), Reply::Refused(_)));
        assert!(matches!(session.handle("-1 0"), Reply::Refused(_)));
        assert!(matches!(session.handle("nonsense"), Reply::Unrecognized(_)));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.handle("quit"), Reply::Quit);
    }

    #[test]
    fn test_run_shows_grid_after_every_command() {
        let mut session = PlaySession::new(Grid::solved(3).unwrap());
        let input = "0 0\nnonsense\nhelp\n1 2\nq\n1 1\n";
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Initial turn plus one per command before `q`
        assert_eq!(text.matches("Movable: ").count(), 5);
        assert!(text.contains("Can't move: (0,0) is not next to the empty cell (2,2)"));
        assert!(text.contains("Didn't understand `nonsense`"));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.grid().empty_position().to_string(), "(1,2)");
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut session = PlaySession::new(Grid::solved(2).unwrap());
        let mut out = Vec::new();
        session.run("1 1\n".as_bytes(), &mut out).unwrap();
        assert_eq!(session.moves(), 0);
        assert_eq!(String::from_utf8(out).unwrap().matches("> ").count(), 2);
    }

    #[test]
    fn test_hint_lists_neighbours_of_empty() {
        let session = PlaySession::new(Grid::solved(3).unwrap());
        assert_eq!(session.hint(), "2 1 [6], 1 2 [8]");
    }
}
