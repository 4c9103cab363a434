//! Application model types: `App`, `Scene`, `Action` and `Button`.
//!
//! Everything the event loop and renderer need lives on `App`; there is no
//! process-wide state.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::library::TrackEntry;
use crate::track::{Track, store};

/// Shown in the error dialog when a track fails to load. The detail goes to the log.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load karaoke track. Check log for details.";

/// Which screen is showing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Scene {
    #[default]
    Menu,
    TrackLoaded,
}

/// What a button does when activated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Open,
    Play,
    Back,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

const MENU_BUTTONS: &[Button] = &[
    Button {
        label: "Open",
        action: Action::Open,
    },
    Button {
        label: "Quit",
        action: Action::Quit,
    },
];

const TRACK_BUTTONS: &[Button] = &[
    Button {
        label: "Play",
        action: Action::Play,
    },
    Button {
        label: "Back",
        action: Action::Back,
    },
];

/// The main application model.
pub struct App {
    pub scene: Scene,
    /// Currently loaded track; replaced wholesale on each successful open.
    pub track: Option<Track>,
    /// File `track` was loaded from.
    pub loaded_from: Option<PathBuf>,

    pub entries: Vec<TrackEntry>,
    pub selected: usize,
    /// Fallback for "Open" when `entries` is empty.
    pub default_track: PathBuf,

    /// Index into `buttons()` of the focused button.
    pub focused: usize,
    /// Error dialog text, if one is showing.
    pub error: Option<String>,
    pub status: String,
    pub should_quit: bool,
    pub tracks_dir: Option<String>,
}

impl App {
    /// Create a new `App` on the menu scene listing `entries`.
    pub fn new(entries: Vec<TrackEntry>, default_track: PathBuf) -> Self {
        Self {
            scene: Scene::Menu,
            track: None,
            loaded_from: None,
            entries,
            selected: 0,
            default_track,
            focused: 0,
            error: None,
            status: String::new(),
            should_quit: false,
            tracks_dir: None,
        }
    }

    /// Record the scanned tracks directory in the app state.
    pub fn set_tracks_dir(&mut self, dir: String) {
        self.tracks_dir = Some(dir);
    }

    /// Buttons of the current scene, in display order.
    pub fn buttons(&self) -> &'static [Button] {
        match self.scene {
            Scene::Menu => MENU_BUTTONS,
            Scene::TrackLoaded => TRACK_BUTTONS,
        }
    }

    pub fn focused_button(&self) -> Option<Button> {
        self.buttons().get(self.focused).copied()
    }

    fn set_scene(&mut self, scene: Scene) {
        if self.scene != scene {
            self.scene = scene;
            self.focused = 0;
        }
    }

    /// Run the action bound to a button.
    pub fn activate(&mut self, action: Action) {
        match action {
            Action::Open => self.open_selected(),
            Action::Play => self.play(),
            Action::Back => self.back(),
            Action::Quit => self.quit(),
        }
    }

    /// Activate the focused button of the current scene.
    pub fn activate_focused(&mut self) {
        if let Some(button) = self.focused_button() {
            self.activate(button.action);
        }
    }

    /// Activate the button at `index` of the current scene, ignoring
    /// out-of-range indices.
    pub fn click(&mut self, index: usize) {
        if let Some(button) = self.buttons().get(index).copied() {
            self.focused = index;
            self.activate(button.action);
        }
    }

    /// Path "Open" would load right now.
    pub fn open_target(&self) -> &Path {
        self.entries
            .get(self.selected)
            .map(|e| e.path.as_path())
            .unwrap_or(self.default_track.as_path())
    }

    /// Open the selected library entry, or the default track when the library is empty.
    pub fn open_selected(&mut self) {
        let target = self.open_target().to_path_buf();
        self.open_path(&target);
    }

    /// Load `path`. On success the track replaces the current one and the track
    /// screen is shown; on failure the previous state is kept and the error
    /// dialog is raised.
    pub fn open_path(&mut self, path: &Path) {
        match store::load(path) {
            Ok(track) => {
                info!("Karaoke track loaded successfully: {}", track.metadata.title);
                self.status = format!("Loaded {}", path.display());
                self.track = Some(track);
                self.loaded_from = Some(path.to_path_buf());
                self.set_scene(Scene::TrackLoaded);
            }
            Err(e) => {
                error!("Failed to load karaoke track: {e}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Timed playback is not implemented; this only records the request.
    pub fn play(&mut self) {
        let Some(track) = &self.track else {
            return;
        };
        info!("Playing track: {}", track.metadata.title);
        self.status = format!("Playback not available yet: {}", track.metadata.title);
    }

    /// Return to the menu. The loaded track is kept.
    pub fn back(&mut self) {
        self.set_scene(Scene::Menu);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Move button focus right, wrapping around.
    pub fn focus_next(&mut self) {
        let n = self.buttons().len();
        if n > 0 {
            self.focused = (self.focused + 1) % n;
        }
    }

    /// Move button focus left, wrapping around.
    pub fn focus_prev(&mut self) {
        let n = self.buttons().len();
        if n > 0 {
            self.focused = (self.focused + n - 1) % n;
        }
    }

    /// Return true if the library contains any entries.
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Move selection to the next entry, wrapping to the first.
    pub fn next(&mut self) {
        if self.has_entries() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    /// Move selection to the previous entry, wrapping to the last.
    pub fn prev(&mut self) {
        if self.has_entries() {
            let n = self.entries.len();
            self.selected = (self.selected + n - 1) % n;
        }
    }
}
