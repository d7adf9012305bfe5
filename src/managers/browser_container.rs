//! Browser Container.
//!
//! Hosts one rendering surface bound to one navigation target. Reacts to the
//! engine through [`NavigationObserver`] and [`WindowRequestHandler`], and maps
//! swipe gestures to back/forward commands.

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::managers::rendering_surface::{RenderingSurface, SurfaceFactory};
use crate::managers::scheduler::{Scheduler, TaskGuard};
use crate::types::navigation::{
    default_start_url, parse_address, ContainerId, ContainerState, Embedding, NavigationCommand,
    NewWindowRequest, ShellEvent, SwipeDirection,
};
use crate::types::settings::{CrossfadeSettings, SwipeWiring};

/// Reacts to top-level navigations completing.
pub trait NavigationObserver {
    fn on_navigation_finished(&mut self, url: Option<&Url>);
}

/// Reacts to the engine asking for a new browsing context.
pub trait WindowRequestHandler<S> {
    fn on_new_window_requested(
        &mut self,
        request: &NewWindowRequest,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> NewWindowOutcome<S>;
}

/// How a spawned pop-up container should be shown.
pub enum NewWindowOutcome<S> {
    /// Not a new top-level context, or no surface could be created.
    Ignored,
    /// Push onto the spawning container's navigation stack without animation.
    Push(BrowserContainer<S>),
    /// Present modally over the spawning container.
    Present(BrowserContainer<S>),
}

impl<S> NewWindowOutcome<S> {
    /// The surface the engine should attach the new context to. Only pushed
    /// containers hand one back.
    pub fn surface(&self) -> Option<&ContainerId> {
        match self {
            NewWindowOutcome::Push(container) => Some(container.id()),
            _ => None,
        }
    }

    pub fn container(&self) -> Option<&BrowserContainer<S>> {
        match self {
            NewWindowOutcome::Push(c) | NewWindowOutcome::Present(c) => Some(c),
            NewWindowOutcome::Ignored => None,
        }
    }
}

/// Construction options shared by a container and the pop-ups it spawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerOptions {
    pub embedding: Embedding,
    pub swipe_wiring: SwipeWiring,
    /// `Some` puts a splash overlay over the surface until the first load.
    pub crossfade: Option<CrossfadeSettings>,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            embedding: Embedding::NavigationStack,
            swipe_wiring: SwipeWiring::BothDirections,
            crossfade: None,
        }
    }
}

/// Progress of the splash overlay in the crossfade variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Covering the surface, waiting for the first load.
    Shown,
    /// First load finished; fade starts after the crossfade delay.
    FadePending,
    /// Overlay fading out while the surface fades in.
    FadingOut,
}

/// Opacity targets for the surface and its overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// `None` once the overlay has been removed.
    pub overlay_opacity: Option<f32>,
    pub surface_opacity: f32,
}

pub struct BrowserContainer<S> {
    id: ContainerId,
    target: Url,
    title: String,
    state: ContainerState,
    surface: S,
    options: ContainerOptions,
    overlay: Option<OverlayPhase>,
    surface_opacity: f32,
    scheduler: Scheduler<ShellEvent>,
    timers: Vec<TaskGuard>,
}

impl<S> BrowserContainer<S> {
    /// Creates a container for `target`, or for the default site when `None`.
    pub fn new(
        id: ContainerId,
        target: Option<Url>,
        surface: S,
        options: ContainerOptions,
        scheduler: Scheduler<ShellEvent>,
    ) -> Self {
        let target = target.unwrap_or_else(default_start_url);
        let overlay = options.crossfade.map(|_| OverlayPhase::Shown);
        let surface_opacity = if overlay.is_some() { 0.0 } else { 1.0 };
        debug!(%id, %target, "container created");
        Self {
            id,
            target,
            title: String::new(),
            state: ContainerState::Constructed,
            surface,
            options,
            overlay,
            surface_opacity,
            scheduler,
            timers: Vec::new(),
        }
    }

    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> ContainerState {
        self.state
    }

    pub fn embedding(&self) -> Embedding {
        self.options.embedding
    }

    pub(crate) fn set_embedding(&mut self, embedding: Embedding) {
        self.options.embedding = embedding;
    }

    pub fn options(&self) -> ContainerOptions {
        self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn overlay_phase(&self) -> Option<OverlayPhase> {
        self.overlay
    }

    pub fn visibility(&self) -> Visibility {
        let overlay_opacity = self.overlay.map(|phase| match phase {
            OverlayPhase::Shown | OverlayPhase::FadePending => 1.0,
            OverlayPhase::FadingOut => 0.0,
        });
        Visibility {
            overlay_opacity,
            surface_opacity: self.surface_opacity,
        }
    }

}

impl<S: RenderingSurface> BrowserContainer<S> {
    /// Requests the navigation target from the surface.
    pub fn load(&mut self) {
        info!(id = %self.id, url = %self.target, "loading");
        self.surface.load(&self.target);
        self.state = ContainerState::Loading;
    }

    /// Loads an address string. Malformed addresses are ignored.
    pub fn load_address(&mut self, address: &str) {
        match parse_address(address) {
            Ok(url) => {
                debug!(id = %self.id, %url, "loading address");
                self.surface.load(&url);
                self.state = ContainerState::Loading;
            }
            Err(e) => debug!(id = %self.id, "ignoring address: {}", e),
        }
    }

    /// Maps a swipe to history navigation and returns the command issued.
    pub fn on_swipe_gesture(&mut self, direction: SwipeDirection) -> Option<NavigationCommand> {
        match direction {
            SwipeDirection::Right if self.surface.can_go_back() => {
                self.surface.go_back();
                Some(NavigationCommand::GoBack)
            }
            SwipeDirection::Left
                if self.options.swipe_wiring == SwipeWiring::BothDirections
                    && self.surface.can_go_forward() =>
            {
                self.surface.go_forward();
                Some(NavigationCommand::GoForward)
            }
            _ => None,
        }
    }

    /// Applies a scheduler event addressed to this container.
    pub fn handle_event(&mut self, event: &ShellEvent) {
        match event {
            ShellEvent::BeginCrossfade(id) if *id == self.id => self.begin_crossfade(),
            ShellEvent::FinishCrossfade(id) if *id == self.id => self.finish_crossfade(),
            _ => {}
        }
    }

    fn begin_crossfade(&mut self) {
        if self.overlay != Some(OverlayPhase::FadePending) {
            return;
        }
        let duration = self.options.crossfade.unwrap_or_default().duration_ms;
        debug!(id = %self.id, duration_ms = duration, "crossfade started");
        self.overlay = Some(OverlayPhase::FadingOut);
        self.surface_opacity = 1.0;
        let guard = self.scheduler.schedule(
            Duration::from_millis(duration),
            ShellEvent::FinishCrossfade(self.id.clone()),
        );
        self.timers.push(guard);
    }

    fn finish_crossfade(&mut self) {
        if self.overlay != Some(OverlayPhase::FadingOut) {
            return;
        }
        debug!(id = %self.id, "overlay removed");
        self.overlay = None;
        self.timers.clear();
    }
}

impl<S: RenderingSurface> NavigationObserver for BrowserContainer<S> {
    fn on_navigation_finished(&mut self, url: Option<&Url>) {
        self.state = ContainerState::Loaded;

        match url.and_then(|u| u.host_str()) {
            Some(host) => {
                debug!(id = %self.id, host, "navigation finished");
                self.title = host.to_string();
            }
            None => debug!(id = %self.id, "navigation finished without host"),
        }

        if self.overlay == Some(OverlayPhase::Shown) {
            self.overlay = Some(OverlayPhase::FadePending);
            let delay = self.options.crossfade.unwrap_or_default().delay_ms;
            let guard = self.scheduler.schedule(
                Duration::from_millis(delay),
                ShellEvent::BeginCrossfade(self.id.clone()),
            );
            self.timers.push(guard);
        }
    }
}

impl<S: RenderingSurface> WindowRequestHandler<S> for BrowserContainer<S> {
    fn on_new_window_requested(
        &mut self,
        request: &NewWindowRequest,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> NewWindowOutcome<S> {
        if !request.opens_new_context {
            return NewWindowOutcome::Ignored;
        }

        let id = ContainerId::new();
        let surface = match factory.create_surface(&id) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(from = %self.id, url = %request.url, "pop-up dropped: {}", e);
                return NewWindowOutcome::Ignored;
            }
        };

        let options = ContainerOptions {
            crossfade: None,
            ..self.options
        };
        let container = BrowserContainer::new(
            id,
            Some(request.url.clone()),
            surface,
            options,
            self.scheduler.clone(),
        );

        match self.options.embedding {
            Embedding::NavigationStack => {
                info!(from = %self.id, url = %request.url, "pushing pop-up");
                NewWindowOutcome::Push(container)
            }
            Embedding::Standalone => {
                info!(from = %self.id, url = %request.url, "presenting pop-up");
                NewWindowOutcome::Present(container)
            }
        }
    }
}
