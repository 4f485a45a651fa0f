pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;
