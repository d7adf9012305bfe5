// DruckerForum shell shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod navigation;
pub mod settings;
