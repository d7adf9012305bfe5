// DruckerForum shell paths for Linux
// Config: ~/.config/druckerforum
// Data:   ~/.local/share/druckerforum

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/druckerforum` if set, otherwise `~/.config/druckerforum`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("druckerforum"),
        _ => home_dir().join(".config").join("druckerforum"),
    }
}

/// Uses `$XDG_DATA_HOME/druckerforum` if set, otherwise `~/.local/share/druckerforum`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("druckerforum"),
        _ => home_dir().join(".local").join("share").join("druckerforum"),
    }
}
