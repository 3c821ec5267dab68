use crate::models::constants::UNDO_TOKEN;

/// One line of player input, classified before anything touches the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A decimal move number. Range is checked by the board.
    Move(u32),
    Undo,
    Invalid(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == UNDO_TOKEN {
            return Command::Undo;
        }
        match input.parse::<u32>() {
            Ok(position) => Command::Move(position),
            Err(_) => Command::Invalid(input.to_string()),
        }
    }
}
