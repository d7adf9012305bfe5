// DruckerForum shell paths for macOS
// Config and data: ~/Library/Application Support/DruckerForum

use std::env;
use std::path::PathBuf;

fn application_support() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
}

pub fn get_config_dir() -> PathBuf {
    application_support().join("DruckerForum")
}

pub fn get_data_dir() -> PathBuf {
    application_support().join("DruckerForum")
}
