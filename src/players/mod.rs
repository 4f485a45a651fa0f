pub mod fish;
pub use fish::*;

pub mod player;
pub use player::*;
