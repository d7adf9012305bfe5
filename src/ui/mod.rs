//! DruckerForum shell UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! Every browser container gets its own child webview inside the main `tao`
//! window; the splash (or crossfade overlay) is one more child webview on top.

pub mod webview_app;
