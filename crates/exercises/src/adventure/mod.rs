//! A tiny text adventure
//!
//! A line-oriented loop over a [`World`]: read a line, parse it into a
//! [`Command`], apply it, print the [`Outcome`]. Only `quit` (or `exit`) and
//! end of input end the loop; winning leaves the player free to wander.

mod command;
mod world;

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

pub use command::{Command, Direction, parse_command};
pub use world::{Outcome, Room, World};

/// Printed when the player quits or input ends.
pub const FAREWELL: &str = "Goodbye.";

/// Errors that stop the adventure.
#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    /// Reading input or writing output failed.
    #[error("adventure I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The configured start room is not on the map.
    #[error("unknown room '{0}'")]
    UnknownRoom(String),
}

/// Adventure settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureConfig {
    /// Printed before each line is read.
    pub prompt: String,
    /// Where the player starts.
    pub start_room: String,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_owned(),
            start_room: "hall".to_owned(),
        }
    }
}

/// Runs the adventure until it finishes or `reader` is exhausted.
///
/// Returns the number of commands applied.
///
/// # Errors
///
/// [`AdventureError`] on I/O failure or an unknown start room.
pub fn run<R, W>(config: &AdventureConfig, reader: R, mut writer: W) -> Result<usize, AdventureError>
where
    R: BufRead,
    W: Write,
{
    let mut world = World::classic(&config.start_room)?;
    tracing::info!(start_room = %config.start_room, "adventure started");
    writeln!(writer, "{}", world.look())?;

    let mut lines = reader.lines();
    let mut turn = 0_usize;

    loop {
        write!(writer, "{}", config.prompt)?;
        writer.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!("input exhausted");
            writeln!(writer, "\n{FAREWELL}")?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        turn += 1;
        let span = tracing::info_span!("turn", turn, input = %line.trim());
        let _entered = span.enter();

        let Some(command) = parse_command(&line) else {
            tracing::debug!("unrecognized command");
            writeln!(writer, "I don't understand that.")?;
            continue;
        };

        tracing::debug!(%command, "applying command");
        match world.apply(command) {
            Outcome::Continue(text) => writeln!(writer, "{text}")?,
            Outcome::Finished(text) => {
                writeln!(writer, "{text}")?;
                break;
            }
        }
    }

    tracing::info!(turns = turn, location = world.location(), "adventure finished");
    Ok(turn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(input: &str) -> (usize, String) {
        let mut output = Vec::new();
        let turns = run(&AdventureConfig::default(), input.as_bytes(), &mut output).unwrap();
        (turns, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_ends_loop() {
        let (turns, output) = play("look\nquit\nlook\n");
        assert_eq!(turns, 2);
        assert!(output.ends_with("> Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let (turns, output) = play("");
        assert_eq!(turns, 0);
        assert!(output.ends_with("> \nGoodbye.\n"));
    }

    #[test]
    fn test_unrecognized_input_reprompts() {
        let (turns, output) = play("dance\n\nquit\n");
        assert_eq!(turns, 2);
        assert!(output.contains("I don't understand that."));
    }

    #[test]
    fn test_unknown_start_room() {
        let config = AdventureConfig {
            start_room: "attic".to_owned(),
            ..AdventureConfig::default()
        };
        let err = run(&config, "".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, AdventureError::UnknownRoom(_)));
    }
}
