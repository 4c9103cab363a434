use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::Level;

use crate::config::LogSettings;

/// Send `tracing` output to the configured log file (append mode, no colors).
///
/// The terminal belongs to the TUI, so nothing is printed to stdout. If the
/// file cannot be opened logging stays off and a note goes to stderr before
/// the screen is taken over.
pub fn init(settings: &LogSettings) {
    let level = Level::from_str(settings.level.trim()).unwrap_or(Level::INFO);

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "karaoke: cannot open log file {}, logging disabled: {e}",
                settings.file.display()
            );
            return;
        }
    };

    let result = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init();

    if let Err(e) = result {
        eprintln!("karaoke: logging already initialised: {e}");
    }
}
