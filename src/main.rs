use dialoguer::Select;
use roshambo::game::moves::Move;
use roshambo::play::engine::Table;
use roshambo::players::fish::Fish;
use roshambo::view;

fn main() -> anyhow::Result<()> {
    roshambo::log();
    log::info!("table open");
    view::banner();
    let mut table = Table::new(Box::new(Fish));
    loop {
        let items = ["Rock", "Paper", "Scissors", "Walk away"];
        let selection = Select::new()
            .with_prompt("Your move")
            .items(&items)
            .default(0)
            .report(false)
            .interact()?;
        match selection {
            i @ 0..=2 => {
                let round = table.play(Move::from(i as u8));
                view::render(&round);
            }
            _ => break,
        }
    }
    log::info!("table closed after {} rounds", table.rounds());
    Ok(())
}
