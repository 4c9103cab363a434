use std::env;
use std::io;
use std::path::PathBuf;

use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::library::scan;

mod event_loop;
mod logging;
mod settings;
mod terminal;

use terminal::TerminalGuard;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();
    logging::init(&settings.log);
    settings::report(warning);

    info!("Karaoke application started.");

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.tracks.dir.clone());

    let entries = scan(&dir, &settings.tracks);
    info!("found {} track file(s) in {}", entries.len(), dir.display());

    let mut app = App::new(entries, settings.tracks.default_track.clone());
    app.set_tracks_dir(dir.display().to_string());

    let mut guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    guard.restore()?;
    terminal.show_cursor()?;

    info!("Karaoke application closing.");
    run_result
}
