use super::feedback;
use crate::game::round::Round;
use colored::Colorize;

pub fn banner() {
    println!("{}", "-".repeat(21));
    println!("{}", "ROCK PAPER SCISSORS".bold());
    println!("{}", "-".repeat(21));
}

/// Render one resolved round: both moves, the result label, then the
/// outcome-keyed splash. All decoration lives here; the table only hands
/// over the Round.
pub fn render(round: &Round) {
    println!();
    println!("YOU    {}", round.player);
    println!("HOUSE  {}", round.opponent);
    println!("{}", round.outcome);
    feedback::react(round.outcome);
    println!();
}
