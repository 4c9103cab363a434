use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Action, App, Scene};
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the current scene and dispatches key and
/// mouse input to `app`. Returns `Ok(())` once the app asks to quit.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        let completed = terminal.draw(|f| ui::draw(f, app, &settings.ui))?;
        let area = completed.area;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app),
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, area),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply one key press. While the error dialog is up, any key only closes it.
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    if app.error.is_some() {
        app.dismiss_error();
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Enter => app.activate_focused(),
        _ => match app.scene {
            Scene::Menu => match key.code {
                KeyCode::Char('j') | KeyCode::Down => app.next(),
                KeyCode::Char('k') | KeyCode::Up => app.prev(),
                KeyCode::Char('o') => app.activate(Action::Open),
                _ => {}
            },
            Scene::TrackLoaded => match key.code {
                KeyCode::Char('p') | KeyCode::Char(' ') => app.activate(Action::Play),
                KeyCode::Char('b') | KeyCode::Esc => app.activate(Action::Back),
                _ => {}
            },
        },
    }
}

/// Left click on a button activates it; a click anywhere closes the error dialog.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.error.is_some() {
        app.dismiss_error();
        return;
    }

    let [_, _, button_row, _] = ui::layout(area);
    let rects = ui::button_rects(button_row, app.buttons().len());
    if let Some(index) = ui::hit_test(&rects, mouse.column, mouse.row) {
        app.click(index);
    }
}
