// DruckerForum shell services
// Services provide supporting functionality around the managers: configuration and page IPC.

pub mod ipc;
pub mod settings_engine;
