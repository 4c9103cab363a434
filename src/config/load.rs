use std::{env, path::PathBuf, str::FromStr};

use super::schema::Settings;

// Precedence, highest first: `KARAOKE__SECTION__KEY` variables, the TOML file
// from `resolve_config_path`, then the serde defaults in `schema.rs`.
impl Settings {
    /// Build settings for this run. A missing config file is not an error.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("KARAOKE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the player cannot use: no track extensions, or a log
    /// level tracing does not recognise.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .tracks
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("tracks.extensions must name at least one extension".to_string());
        }
        if tracing::Level::from_str(self.log.level.trim()).is_err() {
            return Err(format!("log.level `{}` is not a valid level", self.log.level));
        }
        Ok(())
    }
}

/// Config file to read: `KARAOKE_CONFIG_PATH` when set, else [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("KARAOKE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// `karaoke/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
/// `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("karaoke").join("config.toml"))
}
