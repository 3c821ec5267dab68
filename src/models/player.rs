use std::fmt;
use strum::EnumIter;

/// One of the two players. `First` always opens a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn symbol(&self) -> &'static str {
        match self {
            Player::First => "X",
            Player::Second => "O",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn symbols_are_x_and_o() {
        assert_eq!(Player::First.symbol(), "X");
        assert_eq!(Player::Second.symbol(), "O");
        assert_eq!(Player::Second.to_string(), "O");
    }

    #[test]
    fn opponent_flips_back_and_forth() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let players: Vec<Player> = Player::iter().collect();
        assert_eq!(players, vec![Player::First, Player::Second]);
    }
}
