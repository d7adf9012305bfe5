//! Rendering surface abstraction.
//!
//! A browser container drives exactly one surface through this trait. The
//! `gui` build implements it on top of a `wry` webview; [`HeadlessSurface`]
//! implements it in memory for the console demo and for tests.

use url::Url;

use crate::managers::session_history::SessionHistory;
use crate::types::errors::NavigationError;
use crate::types::navigation::{ContainerId, NavigationCommand};

/// Commands a container may issue to its embedded web view.
pub trait RenderingSurface {
    fn load(&mut self, url: &Url);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn current_url(&self) -> Option<Url>;
}

/// Creates surfaces for newly spawned containers.
pub trait SurfaceFactory<S> {
    fn create_surface(&mut self, id: &ContainerId) -> Result<S, NavigationError>;
}

impl<S, F> SurfaceFactory<S> for F
where
    F: FnMut(&ContainerId) -> Result<S, NavigationError>,
{
    fn create_surface(&mut self, id: &ContainerId) -> Result<S, NavigationError> {
        self(id)
    }
}

/// In-memory surface that records every command it receives.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    history: SessionHistory,
    commands: Vec<NavigationCommand>,
    in_flight: Option<Url>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received, in order.
    pub fn commands(&self) -> &[NavigationCommand] {
        &self.commands
    }

    /// URLs requested through [`RenderingSurface::load`], in order.
    pub fn load_requests(&self) -> Vec<&Url> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                NavigationCommand::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    /// Simulates the engine finishing the outstanding navigation and returns
    /// the committed URL.
    pub fn finish_navigation(&mut self) -> Option<Url> {
        let url = self.in_flight.take()?;
        self.history.commit(url.clone());
        Some(url)
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl RenderingSurface for HeadlessSurface {
    fn load(&mut self, url: &Url) {
        self.commands.push(NavigationCommand::Load(url.clone()));
        self.in_flight = Some(url.clone());
    }

    fn go_back(&mut self) {
        self.commands.push(NavigationCommand::GoBack);
        self.in_flight = self.history.go_back().cloned();
    }

    fn go_forward(&mut self) {
        self.commands.push(NavigationCommand::GoForward);
        self.in_flight = self.history.go_forward().cloned();
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn current_url(&self) -> Option<Url> {
        self.history.current().cloned()
    }
}
