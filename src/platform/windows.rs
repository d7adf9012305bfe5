// DruckerForum shell paths for Windows
// Config: %APPDATA%/DruckerForum
// Data:   %LOCALAPPDATA%/DruckerForum

use std::env;
use std::path::PathBuf;

/// `%APPDATA%/DruckerForum`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DruckerForum")
}

/// `%LOCALAPPDATA%/DruckerForum`
pub fn get_data_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join("DruckerForum")
}
