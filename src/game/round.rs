use super::moves::Move;
use super::outcome::Outcome;

/// One resolved exchange: both moves plus the result from the player's side.
/// Built fresh on every action; the table replaces it wholesale, never merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

impl From<(Move, Move)> for Round {
    fn from((player, opponent): (Move, Move)) -> Self {
        Self {
            player,
            opponent,
            outcome: Round::resolve(player, opponent),
        }
    }
}

impl Round {
    /// The full 3x3 table, written out pair by pair so that a missing case
    /// is a compile error rather than a runtime surprise.
    pub const fn resolve(player: Move, opponent: Move) -> Outcome {
        match (player, opponent) {
            (Move::Rock, Move::Rock) => Outcome::Draw,
            (Move::Rock, Move::Paper) => Outcome::Lose,
            (Move::Rock, Move::Scissors) => Outcome::Win,
            (Move::Paper, Move::Rock) => Outcome::Win,
            (Move::Paper, Move::Paper) => Outcome::Draw,
            (Move::Paper, Move::Scissors) => Outcome::Lose,
            (Move::Scissors, Move::Rock) => Outcome::Lose,
            (Move::Scissors, Move::Paper) => Outcome::Win,
            (Move::Scissors, Move::Scissors) => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<10} vs {:<10} {}",
            self.player.to_string(),
            self.opponent.to_string(),
            self.outcome
        )
    }
}
