use super::player::Player;
use crate::game::moves::Move;
use rand::seq::IndexedRandom;

/// House player that draws uniformly from the move set.
/// It never sees what the human picked, and it keeps no state between
/// rounds, so every draw is independent.
pub struct Fish;

impl Player for Fish {
    fn act(&mut self) -> Move {
        let ref mut rng = rand::rng();
        Move::ALL
            .choose(rng)
            .copied()
            .expect("move set is non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_roughly_uniform() {
        // n = 10_000 at p = 1/3 puts one standard deviation near 47,
        // so these bounds sit about seven sigmas out.
        const N: usize = 10_000;
        let ref mut fish = Fish;
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[u8::from(fish.act()) as usize] += 1;
        }
        for count in counts {
            assert!(count > 3_000, "skewed draw: {:?}", counts);
            assert!(count < 3_666, "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn every_move_is_reachable() {
        let ref mut fish = Fish;
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            seen[u8::from(fish.act()) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
