use colored::Colorize;

/// Result of a round, always scored from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// the same round scored from the other side.
    /// swaps Win and Lose, fixes Draw.
    pub const fn invert(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "{}", "YOU WIN".green().bold()),
            Outcome::Lose => write!(f, "{}", "YOU LOSE".red().bold()),
            Outcome::Draw => write!(f, "{}", "DRAW".yellow()),
        }
    }
}
