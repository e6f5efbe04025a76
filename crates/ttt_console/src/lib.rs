//! Console front end for `ttt_engine`.
//!
//! Everything that talks to a person lives here: the `Input command:`
//! loop, coordinate parsing, board rendering and the game loop that
//! alternates between the two configured players.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod command;
mod config;
mod input;
mod render;
mod session;

pub use analysis::{Analysis, analyze};
pub use cli::{Cli, Command};
pub use command::{CommandError, SessionCommand, parse_command};
pub use config::{ConfigError, ConsoleConfig, DEFAULT_CONFIG_FILE};
pub use input::{InputError, OCCUPIED_MESSAGE, parse_coordinates};
pub use render::render_board;
pub use session::{Session, SessionError};
