//! Lane Dodger entry point
//!
//! Sets up logging and the terminal, then hands over to the menu loop.

use std::process::ExitCode;

use lane_dodger::platform::{TerminalGuard, TerminalInput, TerminalSurface, ThreadSleeper};
use lane_dodger::{App, Settings};

fn run(settings: Settings) -> lane_dodger::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut app = App::new(TerminalSurface::new(), TerminalInput, ThreadSleeper, settings);
    app.run()
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lane Dodger starting...");

    let settings = Settings::load();
    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("lane-dodger: {e}");
            ExitCode::FAILURE
        }
    }
}
