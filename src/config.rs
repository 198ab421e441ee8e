use anyhow::{Context, Result};
use caldesk_core::{CalendarView, EventColor};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_STORE_PATH: &str = "~/.local/share/caldesk/events.json";
const DEFAULT_TIMEZONE: &str = "UTC";

/// Contents of ~/.config/caldesk/config.toml. Every key is optional.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// JSON file holding the saved events
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// IANA time zone used to read and display dates
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// View used by `caldesk list` when --view is not given
    #[serde(default)]
    pub default_view: CalendarView,

    /// Color for new events, by name ("blue") or tag ("bg-blue-500")
    #[serde(default)]
    pub default_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: default_store_path(),
            timezone: default_timezone(),
            default_view: CalendarView::default(),
            default_color: None,
        }
    }
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Effective settings after applying command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store_path: PathBuf,
    pub timezone: Tz,
    pub default_view: CalendarView,
    pub default_color: EventColor,
}

impl Settings {
    pub fn resolve(config: Config, store: Option<PathBuf>, timezone: Option<String>) -> Result<Self> {
        let store_path = match store {
            Some(path) => path,
            None => expand_path(&config.store_path),
        };

        let tz_name = timezone.unwrap_or(config.timezone);
        let timezone: Tz = tz_name
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid time zone '{}': {}", tz_name, e))?;

        let default_color = match config.default_color.as_deref() {
            Some(name) => name
                .parse()
                .with_context(|| format!("Invalid default_color in {}", display_config_path()))?,
            None => EventColor::default(),
        };

        tracing::debug!(store = %store_path.display(), timezone = timezone.name(), "resolved settings");

        Ok(Settings {
            store_path,
            timezone,
            default_view: config.default_view,
            default_color,
        })
    }
}

/// Get the config directory path (~/.config/caldesk)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("caldesk");
    Ok(config_dir)
}

/// Get the config file path (~/.config/caldesk/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

fn display_config_path() -> String {
    config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "config.toml".to_string())
}

/// Load config from ~/.config/caldesk/config.toml, or defaults if it doesn't exist
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    read_config(&path)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Write a config file with every option commented out.
pub fn create_default_config(path: &Path) -> Result<()> {
    let contents = format!(
        "\
# caldesk configuration

# Where saved events live:
# store_path = \"{}\"

# Time zone for reading and showing dates:
# timezone = \"{}\"

# View for `caldesk list` (month, week or day):
# default_view = \"month\"

# Color for new events (blue, green, orange, red, purple, pink, ...):
# default_color = \"blue\"
",
        DEFAULT_STORE_PATH, DEFAULT_TIMEZONE
    );

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;

    Ok(())
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
