use crate::game::outcome::Outcome;
use colored::Colorize;

/// Decorative splash printed under the result line. Each outcome category
/// gets its own, non-overlapping treatment: a confetti burst on Win only,
/// a brief shake line on Lose, a quiet steady line on Draw. Decoration
/// never feeds back into game state; in a line-oriented terminal it simply
/// scrolls away at the next prompt.
pub fn react(outcome: Outcome) {
    match outcome {
        Outcome::Win => {
            for line in splash(outcome) {
                println!("{}", line.yellow());
            }
        }
        Outcome::Lose => {
            for line in splash(outcome) {
                println!("{}", line.red());
            }
        }
        Outcome::Draw => {
            for line in splash(outcome) {
                println!("{}", line.dimmed());
            }
        }
    }
}

/// the raw splash lines, keyed by outcome category
fn splash(outcome: Outcome) -> &'static [&'static str] {
    match outcome {
        Outcome::Win => &[
            r"  . * ' * . ' * .  ",
            r" ' . * confetti * ' ",
            r"  * ' . * . ' * .  ",
        ],
        Outcome::Lose => &[r" ~x~x~x~x~x~x~x~ "],
        Outcome::Draw => &[r"  . steady hands .  "],
    }
}
