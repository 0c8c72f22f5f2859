use crate::core::view::ViewMode;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Cosmetic dashboard settings. None of these change what is computed,
/// only how it is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_layout")]
    pub layout: Layout,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_accent_completed")]
    pub accent_completed: String,
    #[serde(default = "default_accent_ongoing")]
    pub accent_ongoing: String,
    #[serde(default = "default_accent_progress")]
    pub accent_progress: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Wide,
    Centered,
}

/// Keys every complete configuration file carries.
pub const CONFIG_KEYS: [&str; 9] = [
    "page_title",
    "layout",
    "default_view",
    "bar_width",
    "foreground",
    "background",
    "accent_completed",
    "accent_ongoing",
    "accent_progress",
];

/// Widest text bar the terminal shell draws.
pub const MAX_BAR_WIDTH: usize = 200;

fn default_page_title() -> String {
    "Excel Progress Dashboard".to_string()
}
fn default_layout() -> Layout {
    Layout::Wide
}
fn default_bar_width() -> usize {
    40
}
fn default_foreground() -> String {
    "#ffffff".to_string()
}
fn default_background() -> String {
    "#1e1e1e".to_string()
}
fn default_accent_completed() -> String {
    "#4CAF50".to_string()
}
fn default_accent_ongoing() -> String {
    "#FFC107".to_string()
}
fn default_accent_progress() -> String {
    "#2196F3".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            layout: default_layout(),
            default_view: ViewMode::default(),
            bar_width: default_bar_width(),
            foreground: default_foreground(),
            background: default_background(),
            accent_completed: default_accent_completed(),
            accent_ongoing: default_accent_ongoing(),
            accent_progress: default_accent_progress(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("progressdash")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".progressdash")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("progressdash.conf")
    }

    /// Resolve the config path: explicit override first, then the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_BAR_WIDTH).contains(&self.bar_width) {
            return Err(AppError::Config(format!(
                "bar_width must be between 1 and {MAX_BAR_WIDTH}, got {}",
                self.bar_width
            )));
        }
        for (key, value) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
            ("accent_completed", &self.accent_completed),
            ("accent_ongoing", &self.accent_ongoing),
            ("accent_progress", &self.accent_progress),
        ] {
            if !is_hex_color(value) {
                return Err(AppError::Config(format!(
                    "{key} must be a #RRGGBB colour, got '{value}'"
                )));
            }
        }
        Ok(())
    }

    /// Keys from `CONFIG_KEYS` absent from the YAML document in `content`.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        let missing = CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    /// Write the default configuration to `path`, creating parent
    /// directories. Refuses to replace an existing file unless `force`.
    pub fn init_at(path: &Path, force: bool) -> AppResult<Config> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }
}

/// `#RRGGBB`
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
