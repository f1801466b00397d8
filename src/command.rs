use std::fmt;

use crate::direction::Turn;
use crate::error::SimError;

#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Command {
    Forward,
    Left,
    Right,
}

impl Command {
    pub fn turn(&self) -> Option<Turn> {
        match self {
            Command::Left => Some(Turn::Left),
            Command::Right => Some(Turn::Right),
            Command::Forward => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn parse_commands(input: &str) -> Result<Vec<Command>, SimError> {
    input
        .chars()
        .enumerate()
        .map(|(index, symbol)| match symbol {
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            _ => Err(SimError::InvalidCommand { symbol, index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legal_symbols_in_order() {
        let commands = parse_commands("FLRF").unwrap();
        assert_eq!(
            commands,
            vec![Command::Forward, Command::Left, Command::Right, Command::Forward]
        );
    }

    #[test]
    fn empty_sequence_is_valid() {
        assert!(parse_commands("").unwrap().is_empty());
    }

    #[test]
    fn reports_first_illegal_symbol_with_index() {
        match parse_commands("FFxF?") {
            Err(SimError::InvalidCommand { symbol, index }) => {
                assert_eq!(symbol, 'x');
                assert_eq!(index, 2);
            }
            other => panic!("expected InvalidCommand, got {:?}", other),
        }
    }

    #[test]
    fn lowercase_is_not_accepted() {
        assert!(parse_commands("f").is_err());
    }
}
