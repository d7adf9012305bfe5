// DruckerForum shell platform abstraction
// Provides the per-OS locations of the settings file and of user-supplied assets.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/druckerforum` (or `$XDG_CONFIG_HOME/druckerforum`)
/// - **macOS**: `~/Library/Application Support/DruckerForum`
/// - **Windows**: `%APPDATA%/DruckerForum`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory. Splash images placed in
/// its `assets` subdirectory override the bundled one.
///
/// - **Linux**: `~/.local/share/druckerforum` (or `$XDG_DATA_HOME/druckerforum`)
/// - **macOS**: `~/Library/Application Support/DruckerForum`
/// - **Windows**: `%LOCALAPPDATA%/DruckerForum`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Directory searched for user-supplied splash images.
pub fn get_assets_dir() -> PathBuf {
    get_data_dir().join("assets")
}
