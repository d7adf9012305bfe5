use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::errors::NavigationError;

/// Address loaded when a container is constructed without a target.
pub const DEFAULT_START_URL: &str = "https://www.druckerforum.org";

/// Parses an address string into a URL.
pub fn parse_address(address: &str) -> Result<Url, NavigationError> {
    Url::parse(address.trim()).map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", address, e)))
}

/// Returns [`DEFAULT_START_URL`] as a parsed URL.
pub fn default_start_url() -> Url {
    Url::parse(DEFAULT_START_URL).expect("DEFAULT_START_URL is a valid absolute URL")
}

/// Identifies a browser container and the rendering surface it owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a single browser container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Constructed,
    Loading,
    Loaded,
}

/// Where a container lives in the window hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embedding {
    /// Pushed onto a navigation stack; pop-ups are pushed after it.
    NavigationStack,
    /// Root or modal container; pop-ups are presented modally.
    Standalone,
}

/// Horizontal swipe reported by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl FromStr for SwipeDirection {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            other => Err(NavigationError::InvalidDirection(other.to_string())),
        }
    }
}

/// Command issued by a container to its rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    Load(Url),
    GoBack,
    GoForward,
}

/// A request from the rendering engine to open a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWindowRequest {
    pub url: Url,
    /// True when the request targets a new top-level context rather than an
    /// existing frame.
    pub opens_new_context: bool,
}

impl NewWindowRequest {
    pub fn new(url: Url, opens_new_context: bool) -> Self {
        Self {
            url,
            opens_new_context,
        }
    }
}

/// What the user currently sees at the app root.
#[derive(Debug, Clone, PartialEq)]
pub enum SplashScreen {
    Splash {
        image: String,
        backdrop: String,
        size: u32,
    },
    Main,
}

/// Deferred events delivered by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    SplashExpired,
    /// The animated splash hand-over has finished fading out.
    SplashFadeFinished,
    BeginCrossfade(ContainerId),
    FinishCrossfade(ContainerId),
}

impl ShellEvent {
    /// Returns the container the event is addressed to, if any.
    pub fn container(&self) -> Option<&ContainerId> {
        match self {
            ShellEvent::SplashExpired | ShellEvent::SplashFadeFinished => None,
            ShellEvent::BeginCrossfade(id) | ShellEvent::FinishCrossfade(id) => Some(id),
        }
    }
}
