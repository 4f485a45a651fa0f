pub mod feedback;
pub use feedback::*;

pub mod screen;
pub use screen::*;
