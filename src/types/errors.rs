use std::fmt;

// === NavigationError ===

/// Errors related to navigation targets, gestures and container routing.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// The address string could not be parsed into a URL.
    InvalidUrl(String),
    /// The gesture direction is not `left` or `right`.
    InvalidDirection(String),
    /// The rendering engine could not create a new surface.
    SurfaceUnavailable(String),
    /// No container with the given ID is owned by the navigation stack.
    ContainerNotFound(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidUrl(addr) => write!(f, "Invalid URL: {}", addr),
            NavigationError::InvalidDirection(dir) => {
                write!(f, "Invalid swipe direction: {}", dir)
            }
            NavigationError::SurfaceUnavailable(msg) => {
                write!(f, "Rendering surface unavailable: {}", msg)
            }
            NavigationError::ContainerNotFound(id) => write!(f, "Container not found: {}", id),
        }
    }
}

impl std::error::Error for NavigationError {}

// === SettingsError ===

/// Errors related to the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading the settings file failed.
    IoError(String),
    /// The settings file is not valid settings JSON.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
