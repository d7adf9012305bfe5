//! Splash Controller.
//!
//! Shows the branded image over a solid backdrop, then flips to the main
//! content exactly once after the configured delay.

use std::time::Duration;

use tracing::{debug, info};

use crate::managers::scheduler::{Scheduler, TaskGuard};
use crate::types::navigation::{ShellEvent, SplashScreen};
use crate::types::settings::SplashSettings;

/// Emitted the one time the splash hands over to the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTransition {
    pub animated: bool,
}

/// Trait defining the splash controller interface.
pub trait SplashControllerTrait {
    fn on_appear(&mut self, scheduler: &Scheduler<ShellEvent>);
    fn on_timer_expired(&mut self) -> Option<SplashTransition>;
    fn is_active(&self) -> bool;
    fn screen(&self) -> SplashScreen;
}

pub struct SplashController {
    settings: SplashSettings,
    active: bool,
    timer: Option<TaskGuard>,
}

impl SplashController {
    pub fn new(settings: SplashSettings) -> Self {
        Self {
            settings,
            active: false,
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.settings.delay_ms)
    }

    /// Whether the one-shot timer has been started.
    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some()
    }
}

impl SplashControllerTrait for SplashController {
    /// Starts the one-shot delay. Later calls schedule nothing.
    fn on_appear(&mut self, scheduler: &Scheduler<ShellEvent>) {
        if self.active || self.timer.is_some() {
            return;
        }
        debug!(delay_ms = self.settings.delay_ms, "splash shown");
        self.timer = Some(scheduler.schedule(self.delay(), ShellEvent::SplashExpired));
    }

    /// Flips the active flag. Only the first call yields a transition.
    fn on_timer_expired(&mut self) -> Option<SplashTransition> {
        if self.active {
            return None;
        }
        self.active = true;
        self.timer = None;
        info!("splash finished, showing main view");
        Some(SplashTransition { animated: true })
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn screen(&self) -> SplashScreen {
        if self.active {
            SplashScreen::Main
        } else {
            SplashScreen::Splash {
                image: self.settings.image.clone(),
                backdrop: self.settings.backdrop.clone(),
                size: self.settings.image_size,
            }
        }
    }
}
