use serde::{Deserialize, Serialize};

use super::navigation::DEFAULT_START_URL;

/// Asset name of the branded splash image.
pub const DEFAULT_SPLASH_IMAGE: &str = "GPDF SplashScreen";

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    pub start_url: String,
    pub splash: SplashSettings,
    pub crossfade: CrossfadeSettings,
    pub navigation: NavigationSettings,
    pub window: WindowSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            splash: SplashSettings::default(),
            crossfade: CrossfadeSettings::default(),
            navigation: NavigationSettings::default(),
            window: WindowSettings::default(),
        }
    }
}

/// How the splash hands over to the browser content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SplashVariant {
    /// Splash is shown for `delay_ms`, then the browser is created.
    FixedDelay,
    /// Browser is created at once under an overlay that fades after the first load.
    Crossfade,
}

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplashSettings {
    pub image: String,
    pub backdrop: String,
    pub image_size: u32,
    pub delay_ms: u64,
    pub variant: SplashVariant,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            image: DEFAULT_SPLASH_IMAGE.to_string(),
            backdrop: "#000000".to_string(),
            image_size: 300,
            delay_ms: 2500,
            variant: SplashVariant::FixedDelay,
        }
    }
}

/// Overlay crossfade timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrossfadeSettings {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl Default for CrossfadeSettings {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            duration_ms: 400,
        }
    }
}

/// Which swipe directions are wired to navigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwipeWiring {
    BothDirections,
    BackOnly,
}

/// Navigation behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationSettings {
    pub swipe_wiring: SwipeWiring,
    /// Whether the root container sits in a navigation stack (pop-ups are
    /// pushed) or stands alone (pop-ups are presented modally).
    pub embed_in_stack: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            swipe_wiring: SwipeWiring::BothDirections,
            embed_in_stack: true,
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Drucker Forum".to_string(),
            width: 430,
            height: 932,
        }
    }
}
