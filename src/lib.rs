//! Adaptive rock-paper-scissors engine.
//!
//! The serving surface is a single pure function: given the full round
//! history and a difficulty tier, produce the engine's next throw. All
//! opponent modeling is rebuilt from the supplied history on every call,
//! so there is no retained state between predictions.
//!
//! The `simulate` module is the offline half: synthetic opponents, a
//! round-robin tournament, and two search strategies that tune the
//! ensemble's hyperparameters against the opponent suite.

pub mod game;
pub mod params;
pub mod predict;
pub mod signals;
pub mod simulate;

/// Bernoulli gate rates, empirical frequencies, and win rates.
pub type Probability = f32;
/// Per-signal vote strength in (0, 1].
pub type Confidence = f32;
/// Fitness values produced by tournament evaluation.
pub type Score = f32;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
