use crate::game::moves::Move;
use crate::game::round::Round;
use crate::players::player::Player;

/// Single-seat table. Owns the house player and the one current-round
/// snapshot; there is no other game state and no history.
pub struct Table {
    house: Box<dyn Player>,
    round: Option<Round>,
    n_rounds: u32,
}

impl Table {
    pub fn new(house: Box<dyn Player>) -> Self {
        Self {
            house,
            round: None,
            n_rounds: 0,
        }
    }

    /// Handle one player action to completion: the house throws blind,
    /// the pair resolves, and the previous round is replaced wholesale.
    /// Returns the fresh round for the presentation layer to render.
    pub fn play(&mut self, player: Move) -> Round {
        let opponent = self.house.act();
        let round = Round::from((player, opponent));
        self.n_rounds += 1;
        log::debug!("round {}: {}", self.n_rounds, round);
        self.round = Some(round);
        round
    }

    /// the current snapshot, if any round has been played
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn rounds(&self) -> u32 {
        self.n_rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::Outcome;

    /// house pinned to a single move, for deterministic rounds
    struct Pinned(Move);

    impl Player for Pinned {
        fn act(&mut self) -> Move {
            self.0
        }
    }

    #[test]
    fn rock_beats_pinned_scissors() {
        let mut table = Table::new(Box::new(Pinned(Move::Scissors)));
        let round = table.play(Move::Rock);
        assert!(round.outcome == Outcome::Win);
    }

    #[test]
    fn paper_draws_pinned_paper() {
        let mut table = Table::new(Box::new(Pinned(Move::Paper)));
        let round = table.play(Move::Paper);
        assert!(round.outcome == Outcome::Draw);
    }

    #[test]
    fn scissors_loses_to_pinned_rock() {
        let mut table = Table::new(Box::new(Pinned(Move::Rock)));
        let round = table.play(Move::Scissors);
        assert!(round.outcome == Outcome::Lose);
    }

    #[test]
    fn round_is_replaced_not_merged() {
        let mut table = Table::new(Box::new(Pinned(Move::Rock)));
        table.play(Move::Scissors);
        table.play(Move::Paper);
        let round = table.round().copied().unwrap();
        assert!(round.player == Move::Paper);
        assert!(round.opponent == Move::Rock);
        assert!(round.outcome == Outcome::Win);
        assert!(table.rounds() == 2);
    }

    #[test]
    fn fresh_table_has_no_round() {
        let table = Table::new(Box::new(Pinned(Move::Rock)));
        assert!(table.round().is_none());
        assert!(table.rounds() == 0);
    }
}
