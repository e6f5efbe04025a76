//! Session commands typed at the `Input command:` prompt.

use tracing::instrument;
use ttt_engine::Difficulty;

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start a game with the given players for X and O.
    Start {
        /// Player for X (moves first).
        x: Difficulty,
        /// Player for O.
        o: Difficulty,
    },
    /// Leave the program.
    Exit,
}

/// Error for any command line that is not understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Bad parameters!")]
pub struct CommandError;

impl std::error::Error for CommandError {}

/// Parses `start <x> <o>` or `exit`.
///
/// Each player is one of `user`, `easy`, `medium` or `hard`. `exit`
/// may stand alone or carry two valid players.
#[instrument]
pub fn parse_command(line: &str) -> Result<SessionCommand, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["exit"] => Ok(SessionCommand::Exit),
        [verb, x, o] => {
            let x = x.parse::<Difficulty>().map_err(|_| CommandError)?;
            let o = o.parse::<Difficulty>().map_err(|_| CommandError)?;
            match *verb {
                "start" => Ok(SessionCommand::Start { x, o }),
                "exit" => Ok(SessionCommand::Exit),
                _ => Err(CommandError),
            }
        }
        _ => Err(CommandError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_command() {
        assert_eq!(
            parse_command("start user hard"),
            Ok(SessionCommand::Start {
                x: Difficulty::User,
                o: Difficulty::Hard
            })
        );
        assert_eq!(
            parse_command("  start   easy medium "),
            Ok(SessionCommand::Start {
                x: Difficulty::Easy,
                o: Difficulty::Medium
            })
        );
    }

    #[test]
    fn test_exit_command() {
        assert_eq!(parse_command("exit"), Ok(SessionCommand::Exit));
        assert_eq!(parse_command("exit easy easy"), Ok(SessionCommand::Exit));
    }

    #[test]
    fn test_bad_parameters() {
        for line in [
            "",
            "start",
            "start easy",
            "start easy expert",
            "begin easy easy",
            "start easy easy easy",
            "exit now",
        ] {
            assert_eq!(parse_command(line), Err(CommandError), "line {:?}", line);
        }
        assert_eq!(CommandError.to_string(), "Bad parameters!");
    }

    #[test]
    fn test_selectors_are_case_sensitive() {
        assert_eq!(parse_command("start Easy hard"), Err(CommandError));
    }
}
