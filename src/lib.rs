pub mod game;
pub mod play;
pub mod players;
pub mod view;

/// Initialize terminal logging. INFO and above reach the terminal on
/// stderr so renders on stdout stay clean; location and thread tags are
/// suppressed since a game session has a single thread of interest.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
