//! Navigation Stack.
//!
//! Owns every browser container in a window: the root, pop-ups pushed on top
//! of it, and pop-ups presented modally. Engine events are routed here by
//! container ID; events for containers that are gone are dropped.

use tracing::{debug, warn};
use url::Url;

use crate::managers::browser_container::{
    BrowserContainer, NavigationObserver, NewWindowOutcome, WindowRequestHandler,
};
use crate::managers::rendering_surface::{RenderingSurface, SurfaceFactory};
use crate::types::errors::NavigationError;
use crate::types::navigation::{
    ContainerId, Embedding, NavigationCommand, NewWindowRequest, ShellEvent, SwipeDirection,
};

pub struct NavigationStack<S> {
    stack: Vec<BrowserContainer<S>>,
    modals: Vec<BrowserContainer<S>>,
}

impl<S: RenderingSurface> NavigationStack<S> {
    /// Installs `root` and starts loading it.
    pub fn new(mut root: BrowserContainer<S>, embedding: Embedding) -> Self {
        root.set_embedding(embedding);
        root.load();
        Self {
            stack: vec![root],
            modals: Vec::new(),
        }
    }

    /// Pushes a container and loads it. Returns the ID of its surface.
    pub fn push(&mut self, mut container: BrowserContainer<S>, animated: bool) -> ContainerId {
        container.set_embedding(Embedding::NavigationStack);
        container.load();
        let id = container.id().clone();
        debug!(%id, animated, depth = self.stack.len() + 1, "container pushed");
        self.stack.push(container);
        id
    }

    /// Removes the top pushed container. The root is never popped.
    pub fn pop(&mut self) -> Option<BrowserContainer<S>> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        if let Some(c) = &popped {
            debug!(id = %c.id(), "container popped");
        }
        popped
    }

    /// Presents a container modally over everything else and loads it.
    pub fn present(&mut self, mut container: BrowserContainer<S>, animated: bool) {
        container.set_embedding(Embedding::Standalone);
        container.load();
        debug!(id = %container.id(), animated, "container presented");
        self.modals.push(container);
    }

    /// Dismisses the top-most modal, or pops when no modal is shown.
    pub fn dismiss(&mut self) -> Option<BrowserContainer<S>> {
        match self.modals.pop() {
            Some(modal) => {
                debug!(id = %modal.id(), "modal dismissed");
                Some(modal)
            }
            None => self.pop(),
        }
    }

    pub fn root(&self) -> &BrowserContainer<S> {
        &self.stack[0]
    }

    pub fn root_mut(&mut self) -> &mut BrowserContainer<S> {
        &mut self.stack[0]
    }

    /// The container currently on screen.
    pub fn visible(&self) -> &BrowserContainer<S> {
        self.modals
            .last()
            .or_else(|| self.stack.last())
            .unwrap_or(&self.stack[0])
    }

    pub fn visible_mut(&mut self) -> &mut BrowserContainer<S> {
        if !self.modals.is_empty() {
            let last = self.modals.len() - 1;
            return &mut self.modals[last];
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn get(&self, id: &ContainerId) -> Option<&BrowserContainer<S>> {
        self.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: &ContainerId) -> Option<&mut BrowserContainer<S>> {
        self.stack
            .iter_mut()
            .chain(self.modals.iter_mut())
            .find(|c| c.id() == id)
    }

    /// All containers, stack first (root at the bottom), then modals.
    pub fn iter(&self) -> impl Iterator<Item = &BrowserContainer<S>> {
        self.stack.iter().chain(self.modals.iter())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }

    pub fn len(&self) -> usize {
        self.stack.len() + self.modals.len()
    }

    /// Always false: the root stays for the lifetime of the stack.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Lets the container `from` handle a new-window request and shows the
    /// pop-up it spawns. Returns the pushed pop-up's surface ID.
    pub fn handle_new_window(
        &mut self,
        from: &ContainerId,
        request: &NewWindowRequest,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<Option<ContainerId>, NavigationError> {
        let container = self
            .get_mut(from)
            .ok_or_else(|| NavigationError::ContainerNotFound(from.to_string()))?;

        match container.on_new_window_requested(request, factory) {
            NewWindowOutcome::Ignored => Ok(None),
            NewWindowOutcome::Push(popup) => Ok(Some(self.push(popup, false))),
            NewWindowOutcome::Present(popup) => {
                self.present(popup, true);
                Ok(None)
            }
        }
    }

    /// Forwards a finished navigation to its container.
    pub fn on_navigation_finished(&mut self, id: &ContainerId, url: Option<&Url>) {
        match self.get_mut(id) {
            Some(container) => container.on_navigation_finished(url),
            None => debug!(%id, "navigation event for closed container dropped"),
        }
    }

    /// Forwards a swipe to its container.
    pub fn on_swipe(
        &mut self,
        id: &ContainerId,
        direction: SwipeDirection,
    ) -> Option<NavigationCommand> {
        match self.get_mut(id) {
            Some(container) => container.on_swipe_gesture(direction),
            None => {
                warn!(%id, ?direction, "swipe for unknown container");
                None
            }
        }
    }

    /// Routes a scheduler event to the container it names.
    pub fn dispatch(&mut self, event: &ShellEvent) {
        let Some(id) = event.container() else {
            return;
        };
        match self.get_mut(id) {
            Some(container) => container.handle_event(event),
            None => debug!(%id, ?event, "event for closed container dropped"),
        }
    }
}
