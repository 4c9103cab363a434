use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults when the config is missing or invalid.
///
/// Returns the settings plus any warning to log once logging is up (logging
/// itself is configured from these settings).
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

pub fn report(warning: Option<String>) {
    if let Some(msg) = warning {
        warn!("{msg}");
    }
}
