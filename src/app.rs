//! App Core for the DruckerForum shell.
//!
//! Central struct holding the splash controller, the scheduler and the
//! navigation stack. The event loop feeds it elapsed time and engine events;
//! it decides when the browser appears and routes everything else.

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::managers::browser_container::{BrowserContainer, ContainerOptions};
use crate::managers::navigation_stack::NavigationStack;
use crate::managers::rendering_surface::{RenderingSurface, SurfaceFactory};
use crate::managers::scheduler::{Scheduler, TaskGuard};
use crate::managers::splash_controller::{
    SplashController, SplashControllerTrait, SplashTransition,
};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::NavigationError;
use crate::types::navigation::{
    default_start_url, parse_address, ContainerId, Embedding, NavigationCommand, NewWindowRequest,
    ShellEvent, SplashScreen, SwipeDirection,
};
use crate::types::settings::{ShellSettings, SplashVariant};

/// What the window shows at the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Splash image over the backdrop; no browser exists yet.
    Splash(SplashScreen),
    /// The browser, possibly still under its crossfade overlay.
    Browser,
}

/// Central application struct.
pub struct App<S> {
    settings: ShellSettings,
    start_url: Url,
    scheduler: Scheduler<ShellEvent>,
    splash: SplashController,
    transition: Option<SplashTransition>,
    /// Pending while an animated splash hand-over fades out.
    splash_fade: Option<TaskGuard>,
    stack: Option<NavigationStack<S>>,
}

impl<S: RenderingSurface> App<S> {
    /// Creates an App from already loaded settings.
    ///
    /// An unparsable `start_url` falls back to the default site.
    pub fn new(settings: ShellSettings) -> Self {
        let start_url = parse_address(&settings.start_url).unwrap_or_else(|e| {
            warn!("{}, falling back to default start URL", e);
            default_start_url()
        });
        let splash = SplashController::new(settings.splash.clone());
        Self {
            settings,
            start_url,
            scheduler: Scheduler::new(),
            splash,
            transition: None,
            splash_fade: None,
            stack: None,
        }
    }

    /// Loads settings through the engine, then creates the App.
    pub fn from_config(path_override: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut engine = SettingsEngine::new(path_override);
        let settings = engine.load()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn start_url(&self) -> &Url {
        &self.start_url
    }

    pub fn scheduler(&self) -> &Scheduler<ShellEvent> {
        &self.scheduler
    }

    pub fn splash(&self) -> &SplashController {
        &self.splash
    }

    /// The hand-over from the fixed-delay splash, once it has happened.
    pub fn splash_transition(&self) -> Option<SplashTransition> {
        self.transition
    }

    /// Whether the splash is still fading out over the browser.
    pub fn splash_fading(&self) -> bool {
        self.splash_fade.is_some()
    }

    pub fn stack(&self) -> Option<&NavigationStack<S>> {
        self.stack.as_ref()
    }

    pub fn stack_mut(&mut self) -> Option<&mut NavigationStack<S>> {
        self.stack.as_mut()
    }

    pub fn screen(&self) -> Screen {
        match (&self.stack, self.splash.screen()) {
            (Some(_), _) | (None, SplashScreen::Main) => Screen::Browser,
            (None, splash) => Screen::Splash(splash),
        }
    }

    /// Startup sequence: show the splash, or in the crossfade variant create
    /// the browser at once under its overlay.
    pub fn startup(&mut self, factory: &mut dyn SurfaceFactory<S>) -> Result<(), NavigationError> {
        match self.settings.splash.variant {
            SplashVariant::FixedDelay => {
                self.splash.on_appear(&self.scheduler);
                Ok(())
            }
            SplashVariant::Crossfade => self.show_browser(factory),
        }
    }

    /// Advances the clock by `elapsed` and applies every event that fell due.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<Vec<ShellEvent>, NavigationError> {
        let now = self.scheduler.now() + elapsed;
        self.advance_to(now, factory)
    }

    /// Moves the clock to `now` and applies every event that fell due.
    ///
    /// The event loop calls this with the current time before it applies any
    /// engine event, so that delays scheduled by that event start from now.
    pub fn advance_to(
        &mut self,
        now: Duration,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<Vec<ShellEvent>, NavigationError> {
        let events = self.scheduler.advance_to(now);
        for event in &events {
            match event {
                ShellEvent::SplashExpired => {
                    if let Some(transition) = self.splash.on_timer_expired() {
                        self.transition = Some(transition);
                        if transition.animated {
                            let duration = Duration::from_millis(self.settings.crossfade.duration_ms);
                            self.splash_fade = Some(
                                self.scheduler.schedule(duration, ShellEvent::SplashFadeFinished),
                            );
                        }
                        self.show_browser(factory)?;
                    }
                }
                ShellEvent::SplashFadeFinished => {
                    debug!("splash faded out");
                    self.splash_fade = None;
                }
                other => {
                    if let Some(stack) = self.stack.as_mut() {
                        stack.dispatch(other);
                    }
                }
            }
        }
        Ok(events)
    }

    /// Deadline the event loop should wake up at.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn on_navigation_finished(&mut self, id: &ContainerId, url: Option<&Url>) {
        if let Some(stack) = self.stack.as_mut() {
            stack.on_navigation_finished(id, url);
        }
    }

    pub fn on_swipe(&mut self, id: &ContainerId, direction: SwipeDirection) -> Option<NavigationCommand> {
        self.stack.as_mut()?.on_swipe(id, direction)
    }

    pub fn on_new_window(
        &mut self,
        from: &ContainerId,
        request: &NewWindowRequest,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<Option<ContainerId>, NavigationError> {
        match self.stack.as_mut() {
            Some(stack) => stack.handle_new_window(from, request, factory),
            None => Err(NavigationError::ContainerNotFound(from.to_string())),
        }
    }

    /// Closes the top-most modal or pushed pop-up.
    pub fn dismiss_top(&mut self) -> bool {
        self.stack.as_mut().and_then(|s| s.dismiss()).is_some()
    }

    /// Title of the container on screen.
    pub fn title(&self) -> Option<&str> {
        self.stack.as_ref().map(|s| s.visible().title())
    }

    /// Shutdown sequence: drop every container, which cancels their timers.
    pub fn shutdown(&mut self) {
        info!("shutting down");
        self.splash_fade = None;
        self.stack = None;
    }

    fn show_browser(&mut self, factory: &mut dyn SurfaceFactory<S>) -> Result<(), NavigationError> {
        if self.stack.is_some() {
            return Ok(());
        }

        let id = ContainerId::new();
        let surface = factory.create_surface(&id)?;
        let embedding = if self.settings.navigation.embed_in_stack {
            Embedding::NavigationStack
        } else {
            Embedding::Standalone
        };
        let crossfade = match self.settings.splash.variant {
            SplashVariant::Crossfade => Some(self.settings.crossfade),
            SplashVariant::FixedDelay => None,
        };
        let options = ContainerOptions {
            embedding,
            swipe_wiring: self.settings.navigation.swipe_wiring,
            crossfade,
        };

        let root = BrowserContainer::new(
            id,
            Some(self.start_url.clone()),
            surface,
            options,
            self.scheduler.clone(),
        );
        info!(url = %self.start_url, ?embedding, "browser shown");
        self.stack = Some(NavigationStack::new(root, embedding));
        Ok(())
    }
}
