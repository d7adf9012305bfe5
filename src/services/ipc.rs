//! Messages posted by the injected page script over `window.ipc.postMessage`.

use serde::Deserialize;

use crate::types::navigation::SwipeDirection;

/// A command sent from a page to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcCommand {
    /// A horizontal swipe was recognized.
    Swipe { direction: SwipeDirection },
    /// Escape was pressed: close the top pop-up.
    Dismiss,
}

/// Parses an IPC message body. Unknown or malformed messages yield `None`.
pub fn parse_ipc(message: &str) -> Option<IpcCommand> {
    serde_json::from_str(message).ok()
}
