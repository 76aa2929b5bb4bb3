//! Runtime configuration: built-in defaults, then the user's config file, then
//! `PERDAY_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::view::{UnknownView, View};

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "perday";
/// File name of the user configuration.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix of the environment overrides, e.g. `PERDAY_TICK_RATE_MS`.
pub const ENV_PREFIX: &str = "PERDAY";
/// Shortest accepted placeholder rotation period.
pub const MIN_ROTATION_INTERVAL_MS: u64 = 250;

const DEFAULT_CONFIG: &str = r##"# Perday dashboard configuration.
# Every key is optional; environment variables prefixed PERDAY_ win over this file.

# Frame tick in milliseconds (door animation, modal loading).
tick_rate_ms = 250

# How long each assistant placeholder prompt stays on screen.
rotation_interval_ms = 4000

# Fade window before each placeholder switch.
fade_ms = 200

# Horizontal distance one scroll step moves the doors (1000 = one door).
scroll_step = 125

# Screen shown at startup: home, catalog or settings.
start_view = "home"

# File name prefix of exported focus shelf reports.
report_name = "focus-shelf"

# log_dir = "logs"
# report_dir = "/home/me/perday-reports"

# [theme]
# accent = "#a78bfa"
# bets = "#34d399"
# risks = "#f87171"
# opportunities = "#fbbf24"
# shelf = "#60a5fa"
# muted = "#6b7280"
"##;

/// Optional hex colour overrides for the terminal theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    /// Primary accent (orb, selection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Door 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bets: Option<String>,
    /// Door 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<String>,
    /// Door 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunities: Option<String>,
    /// Door 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf: Option<String>,
    /// Secondary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame tick in milliseconds.
    pub tick_rate_ms: u64,
    /// Placeholder rotation period in milliseconds.
    pub rotation_interval_ms: u64,
    /// Placeholder fade window in milliseconds.
    pub fade_ms: u64,
    /// Door units moved per scroll step.
    pub scroll_step: u32,
    /// Name of the view shown at startup.
    pub start_view: String,
    /// File name prefix of exported reports.
    pub report_name: String,
    /// Directory receiving `perday.log`.
    pub log_dir: PathBuf,
    /// Directory receiving exported shelf reports.
    pub report_dir: PathBuf,
    /// Colour overrides.
    pub theme: ThemeOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            rotation_interval_ms: 4000,
            fade_ms: 200,
            scroll_step: 125,
            start_view: "home".to_string(),
            report_name: "focus-shelf".to_string(),
            log_dir: PathBuf::from("logs"),
            report_dir: default_report_dir(),
            theme: ThemeOverrides::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default config path and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load using `path` as the config file. A missing file is not an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_layered(path.as_ref(), env_overrides())
    }

    fn load_layered(path: &Path, env: Environment) -> Result<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .context("failed to serialise default configuration")?;
        let built = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        let config: AppConfig = built
            .try_deserialize()
            .context("invalid configuration values")?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Frame tick period, never zero.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Placeholder rotation period, never shorter than the fade window or
    /// [`MIN_ROTATION_INTERVAL_MS`].
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(
            self.rotation_interval_ms
                .max(self.fade_ms)
                .max(MIN_ROTATION_INTERVAL_MS),
        )
    }

    /// Placeholder fade window.
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// The startup view named by `start_view`.
    pub fn initial_view(&self) -> Result<View, UnknownView> {
        self.start_view.parse()
    }
}

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// `~/.config/perday/config.toml` (or the platform equivalent).
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

fn default_report_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("reports")
}

/// Write the commented default config if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    ensure_default_config_at(&path)?;
    Ok(path)
}

/// Write the commented default config to `path` unless the file exists.
/// Returns whether a file was written.
pub fn ensure_default_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Environment layer fed from `vars` instead of the process environment,
    /// so tests cannot see each other's (or the caller's) `PERDAY_*` values.
    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: ::config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        env_overrides().source(Some(source))
    }

    fn load_isolated(path: &Path) -> Result<AppConfig> {
        AppConfig::load_layered(path, env_from(&[]))
    }

    #[test]
    fn defaults_when_file_is_missing() -> Result<()> {
        let dir = tempdir()?;
        let config = load_isolated(&dir.path().join("absent.toml"))?;
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.rotation_interval(), Duration::from_millis(4000));
        assert_eq!(config.fade(), Duration::from_millis(200));
        assert_eq!(config.scroll_step, 125);
        assert_eq!(config.initial_view(), Ok(View::Home));
        assert_eq!(config.report_name, "focus-shelf");
        assert_eq!(config.theme, ThemeOverrides::default());
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "rotation_interval_ms = 1500\nreport_dir = \"out\"\n\n[theme]\nrisks = \"#ff0000\"\n",
        )?;
        let config = load_isolated(&path)?;
        assert_eq!(config.rotation_interval_ms, 1500);
        assert_eq!(config.report_dir, PathBuf::from("out"));
        assert_eq!(config.theme.risks.as_deref(), Some("#ff0000"));
        assert_eq!(config.tick_rate_ms, 250);
        Ok(())
    }

    #[test]
    fn environment_wins_over_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "rotation_interval_ms = 1500\nstart_view = \"settings\"\n")?;
        let env = env_from(&[
            ("PERDAY_ROTATION_INTERVAL_MS", "1234"),
            ("PERDAY_TICK_RATE_MS", "77"),
            ("PERDAY_START_VIEW", "catalog"),
            ("OTHER_TICK_RATE_MS", "5"),
        ]);
        let config = AppConfig::load_layered(&path, env)?;
        assert_eq!(config.rotation_interval_ms, 1234);
        assert_eq!(config.tick_rate_ms, 77);
        assert_eq!(config.initial_view(), Ok(View::Catalog));
        assert_eq!(config.fade_ms, 200);
        Ok(())
    }

    #[test]
    fn default_file_is_written_once_and_parses() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);
        assert!(ensure_default_config_at(&path)?);
        assert!(!ensure_default_config_at(&path)?);
        let config = load_isolated(&path)?;
        assert_eq!(config, AppConfig::default());
        // The commented theme block survives into the written file.
        let written = fs::read_to_string(&path)?;
        assert!(written.contains("# accent = \"#a78bfa\""));
        assert!(written.ends_with("# muted = \"#6b7280\"\n"));
        Ok(())
    }

    #[test]
    fn zero_tick_rate_is_clamped() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn rotation_interval_has_a_floor() {
        let config = AppConfig {
            rotation_interval_ms: 0,
            fade_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(
            config.rotation_interval(),
            Duration::from_millis(MIN_ROTATION_INTERVAL_MS)
        );

        let config = AppConfig {
            rotation_interval_ms: 100,
            fade_ms: 600,
            ..AppConfig::default()
        };
        assert_eq!(config.rotation_interval(), Duration::from_millis(600));
    }

    #[test]
    fn unknown_start_view_is_reported() {
        let config = AppConfig {
            start_view: "campaigns".to_string(),
            ..AppConfig::default()
        };
        let err = config.initial_view().unwrap_err();
        assert_eq!(err, UnknownView("campaigns".to_string()));
    }
}
