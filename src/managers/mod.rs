// DruckerForum shell state managers
// Managers handle stateful behavior: the splash, browser containers, the navigation stack and timers.

pub mod browser_container;
pub mod navigation_stack;
pub mod rendering_surface;
pub mod scheduler;
pub mod session_history;
pub mod splash_controller;
