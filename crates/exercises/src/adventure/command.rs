//! Player commands and the line parser

use std::fmt;

use modelkit_validator::prelude::*;

discriminant! {
    /// Compass directions for room exits.
    pub enum Direction {
        North => "north",
        South => "south",
        East => "east",
        West => "west",
    }
}

/// Everything a player can do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Describe the current room.
    Look,
    /// Describe an item or creature.
    LookAt(String),
    /// Move towards a destination, usually a compass direction.
    Go(String),
    /// Pick an item up.
    Take(String),
    /// Put an item down.
    Drop(String),
    /// Attack a creature.
    Fight(String),
    /// End the game.
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Look => f.write_str("look"),
            Self::LookAt(target) => write!(f, "look at {target}"),
            Self::Go(destination) => write!(f, "go {destination}"),
            Self::Take(item) => write!(f, "take {item}"),
            Self::Drop(item) => write!(f, "drop {item}"),
            Self::Fight(who) => write!(f, "fight {who}"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

/// Parses one input line.
///
/// Tokens are whitespace-separated and case-insensitive. Returns `None` for
/// anything outside the grammar, including a blank line.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.to_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["look"] => Command::Look,
        ["look", "at", rest @ ..] if !rest.is_empty() => Command::LookAt(rest.join(" ")),
        ["go", rest @ ..] if !rest.is_empty() => Command::Go(rest.join(" ")),
        ["take", rest @ ..] if !rest.is_empty() => Command::Take(rest.join(" ")),
        ["drop", rest @ ..] if !rest.is_empty() => Command::Drop(rest.join(" ")),
        ["fight", rest @ ..] if !rest.is_empty() => Command::Fight(rest.join(" ")),
        ["quit" | "exit"] => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("look", Command::Look)]
    #[case("  LOOK  ", Command::Look)]
    #[case("look at rusty sword", Command::LookAt("rusty sword".to_owned()))]
    #[case("go North", Command::Go("north".to_owned()))]
    #[case("go upstairs", Command::Go("upstairs".to_owned()))]
    #[case("go  back  outside", Command::Go("back outside".to_owned()))]
    #[case("take lamp", Command::Take("lamp".to_owned()))]
    #[case("drop lamp", Command::Drop("lamp".to_owned()))]
    #[case("fight troll", Command::Fight("troll".to_owned()))]
    #[case("quit", Command::Quit)]
    #[case("Exit", Command::Quit)]
    fn test_parse(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse_command(line), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("dance")]
    #[case("go")]
    #[case("look at")]
    #[case("take")]
    #[case("quit now")]
    fn test_unrecognized(#[case] line: &str) {
        assert_eq!(parse_command(line), None);
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let command = Command::LookAt("old map".to_owned());
        assert_eq!(parse_command(&command.to_string()), Some(command));
    }
}
