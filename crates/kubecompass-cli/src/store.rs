//! Theme store backed by the config file.

use crate::config::Config;
use crate::error::Result;
use kubecompass_domain::{Theme, ThemeError, ThemeStore};
use std::path::PathBuf;

/// Persists the theme under `settings.theme` in the config TOML.
#[derive(Debug)]
pub struct ConfigThemeStore {
    config: Config,
    path: PathBuf,
}

impl ConfigThemeStore {
    /// Wrap a loaded config and the path it was loaded from.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Load the config at `path` for theme changes.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed. The file is
    /// left untouched.
    pub fn open(path: PathBuf) -> Result<Self> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    /// The underlying config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ThemeStore for ConfigThemeStore {
    fn get(&self) -> Theme {
        self.config.settings.theme
    }

    fn set(&mut self, theme: Theme) -> std::result::Result<(), ThemeError> {
        let previous = self.config.settings.theme;
        self.config.settings.theme = theme;
        if let Err(e) = self.config.save_to(&self.path) {
            self.config.settings.theme = previous;
            return Err(ThemeError::Persist(e.to_string()));
        }
        tracing::debug!(theme = theme.as_str(), path = %self.path.display(), "Theme saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use kubecompass_domain::UnknownAnswerPolicy;

    const USER_CONFIG: &str = r#"
[settings]
color = false
format = "json"

[engine]
unknown_answers = "ignore"

[telemetry]
enabled = false
"#;

    #[test]
    fn test_toggle_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ConfigThemeStore::new(Config::default(), path.clone());
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.settings.theme, Theme::Light);
    }

    #[test]
    fn test_failed_save_keeps_previous_theme() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("config.toml");
        std::fs::create_dir_all(&path).unwrap();

        let mut store = ConfigThemeStore::new(Config::default(), path);
        assert!(matches!(store.set(Theme::Light), Err(ThemeError::Persist(_))));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_open_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = format!("{}theme =\n", USER_CONFIG);
        std::fs::write(&path, &broken).unwrap();

        assert!(matches!(ConfigThemeStore::open(path.clone()), Err(CliError::Toml(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_set_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, USER_CONFIG).unwrap();

        let mut store = ConfigThemeStore::open(path.clone()).unwrap();
        store.set(Theme::Light).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.settings.theme, Theme::Light);
        assert!(!reloaded.settings.color);
        assert_eq!(reloaded.settings.format, OutputFormat::Json);
        assert_eq!(reloaded.engine.unknown_answers, UnknownAnswerPolicy::Ignore);
        assert!(!reloaded.telemetry.enabled);
    }
}
