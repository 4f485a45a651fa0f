#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// the full move set, in discriminant order
    pub const ALL: [Self; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// the one move this move defeats.
    /// R beats S, S beats P, P beats R: a single cycle of length 3.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => panic!("Invalid move u8: {}", n),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "Rock",
                Move::Paper => "Paper",
                Move::Scissors => "Scissors",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for m in Move::ALL {
            assert!(m == Move::from(u8::from(m)));
        }
    }

    #[test]
    fn nothing_beats_itself() {
        for m in Move::ALL {
            assert!(m.beats() != m);
        }
    }

    #[test]
    fn beats_is_a_three_cycle() {
        for m in Move::ALL {
            assert!(m.beats().beats().beats() == m);
            assert!(m.beats().beats() != m);
        }
    }
}
