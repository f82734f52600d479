use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "todos.json";
const STORE_ENV_VAR: &str = "TASKBOOK_STORE_PATH";
const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKBOOK_CONFIG_PATH";

/// Path of the store file: `TASKBOOK_STORE_PATH` when set, otherwise
/// `todos.json` in the working directory.
pub fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    PathBuf::from(STORE_FILE_NAME)
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub pending: &'static str,
    pub done: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn paint_pending(&self, text: &str) -> String {
        paint(self.pending, self.reset, text)
    }

    pub fn paint_done(&self, text: &str) -> String {
        paint(self.done, self.reset, text)
    }

    pub fn paint_muted(&self, text: &str) -> String {
        paint(self.muted, self.reset, text)
    }
}

fn paint(color: &str, reset: &str, text: &str) -> String {
    if color.is_empty() {
        text.to_string()
    } else {
        format!("{color}{text}{reset}")
    }
}

pub fn palette_for_theme(theme: Option<&str>) -> Palette {
    match theme.and_then(canonical_theme_name).as_deref() {
        Some("mono") => Palette {
            pending: "",
            done: "",
            muted: "",
            reset: "",
        },
        _ => Palette {
            pending: "\x1b[94m",
            done: "\x1b[32m",
            muted: "\x1b[90m",
            reset: "\x1b[0m",
        },
    }
}

pub fn canonical_theme_name(raw: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        return Some("default".into());
    }

    match trimmed {
        "color" | "colors" => Some("default".to_string()),
        "plain" | "none" | "no_color" | "nocolor" => Some("mono".to_string()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<StoreError>,
}

pub fn config_path() -> Result<PathBuf, StoreError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| StoreError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("taskbook")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| StoreError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskbook")
            .join(CONFIG_FILE_NAME))
    }
}

/// A missing or broken config never fails the run; the caller gets the
/// defaults along with the error it may want to report.
pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, StoreError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| StoreError::io(format!("{}: {}", path.display(), err)))?;
    let mut config: Config = serde_json::from_str(&content).map_err(|err| {
        StoreError::decode(format!("invalid JSON in {}: {}", path.display(), err))
    })?;
    config.theme = config.theme.as_deref().and_then(canonical_theme_name);
    Ok(config)
}
