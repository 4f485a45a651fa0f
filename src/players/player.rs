use crate::game::moves::Move;

/// Anything that can throw a move when asked.
/// The table holds its opponent behind this trait, which is also the seam
/// that lets tests pin the house to a fixed move.
pub trait Player {
    fn act(&mut self) -> Move;
}
