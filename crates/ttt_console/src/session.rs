//! Console session: the command loop and the game loop.

use crate::command::{SessionCommand, parse_command};
use crate::input::{OCCUPIED_MESSAGE, parse_coordinates};
use crate::render::render_board;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use ttt_engine::{Board, Choice, Difficulty, EngineError, Mark, MoveError, Outcome, Player};

/// Errors that end a console session.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// The engine rejected a request.
    #[display("{}", _0)]
    Engine(EngineError),

    /// Input ended while a human player was to move.
    #[display("Input closed during a game")]
    #[from(skip)]
    InputClosed,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Engine(err) => Some(err),
            SessionError::InputClosed => None,
        }
    }
}

/// Interactive session reading from `input` and writing to `output`.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
    /// Creates a session.
    pub fn new(input: I, output: O, rng: R) -> Self {
        Self { input, output, rng }
    }

    /// Consumes the session and returns its output.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Prompts and reads a line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Runs `Input command:` prompts until `exit` or end of input.
    ///
    /// Returns the outcomes of the games played, in order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Outcome>, SessionError> {
        let mut outcomes = Vec::new();
        while let Some(line) = self.prompt("Input command: ")? {
            match parse_command(&line) {
                Ok(SessionCommand::Start { x, o }) => outcomes.push(self.play(x, o)?),
                Ok(SessionCommand::Exit) => break,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
        info!(games = outcomes.len(), "Session finished");
        Ok(outcomes)
    }

    /// Plays one game from an empty board and returns its outcome.
    #[instrument(skip(self))]
    pub fn play(&mut self, x: Difficulty, o: Difficulty) -> Result<Outcome, SessionError> {
        let players = [
            Player::from_difficulty(x, Mark::X),
            Player::from_difficulty(o, Mark::O),
        ];
        let mut board = Board::new();
        write!(self.output, "{}", render_board(&board))?;

        let mut current = 0;
        loop {
            let outcome = board.evaluate();
            if outcome.is_terminal() {
                writeln!(self.output, "{}", outcome)?;
                info!(%outcome, "Game over");
                return Ok(outcome);
            }
            self.take_turn(&mut board, &players[current])?;
            write!(self.output, "{}", render_board(&board))?;
            current = 1 - current;
        }
    }

    /// Applies one move for `player`, asking for input if it is human.
    fn take_turn(&mut self, board: &mut Board, player: &Player) -> Result<(), SessionError> {
        match player.select_move(board, &mut self.rng).map_err(EngineError::from)? {
            Choice::Play(mv) => {
                writeln!(
                    self.output,
                    "Making move level \"{}\"",
                    Difficulty::from(player.strategy())
                )?;
                debug!(mark = %player.mark(), %mv, "Computer move");
                board
                    .apply_move(mv, player.mark())
                    .map_err(EngineError::from)?;
                Ok(())
            }
            Choice::AwaitInput => self.human_turn(board, player.mark()),
        }
    }

    /// Keeps asking for coordinates until a legal move is entered.
    fn human_turn(&mut self, board: &mut Board, mark: Mark) -> Result<(), SessionError> {
        loop {
            let Some(line) = self.prompt("Enter the coordinates: ")? else {
                warn!("Input closed while waiting for a move");
                return Err(SessionError::InputClosed);
            };
            let mv = match parse_coordinates(&line) {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            match board.apply_move(mv, mark) {
                Ok(()) => return Ok(()),
                Err(MoveError::Occupied(_)) => writeln!(self.output, "{}", OCCUPIED_MESSAGE)?,
                Err(err) => return Err(EngineError::from(err).into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>, StdRng> {
        Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_exit_ends_session() {
        let mut s = session("exit\nstart hard hard\n");
        assert_eq!(s.run().unwrap(), Vec::new());
        let out = String::from_utf8(s.into_output()).unwrap();
        assert_eq!(out, "Input command: ");
    }

    #[test]
    fn test_bad_parameters_reprompts() {
        let mut s = session("start\nexit\n");
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert_eq!(out, "Input command: Bad parameters!\nInput command: ");
    }

    #[test]
    fn test_human_input_errors_are_reported() {
        // X: bad text, out of range, then (1,1). O takes the center and X
        // retries the occupied square before trying the left column.
        let mut s = session("abc\n5 5\n1 1\n1 1\n2 1\n3 1\n");
        let outcome = s.play(Difficulty::User, Difficulty::Hard);
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("You should enter numbers!"));
        assert!(out.contains("Coordinates should be from 1 to 3!"));
        assert!(out.contains(OCCUPIED_MESSAGE));
        assert!(out.contains("Making move level \"hard\""));
        // Hard blocks the column, so input runs out before the game ends.
        assert!(matches!(outcome, Err(SessionError::InputClosed)));
    }
}
