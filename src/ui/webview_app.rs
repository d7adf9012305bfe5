//! WebView-based shell using `wry` + `tao`.
//!
//! Architecture:
//! - The splash page is served over the `df://` custom protocol into a child
//!   webview that sits on top of the browser webviews.
//! - Each browser container owns one child webview wrapped in [`WrySurface`].
//! - Engine callbacks (page load, new window, IPC) run on the main thread but
//!   outside the event loop closure, so they are forwarded as [`UserEvent`]s
//!   through the event loop proxy and applied to the [`App`] there.
//! - Timers are driven by `ControlFlow::WaitUntil` on the app's next deadline.
//!   The app clock is advanced on every wake-up before the event is applied.

use std::borrow::Cow;
use std::fs;
use std::time::Instant;

use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::keyboard::Key;
use tao::window::{Window, WindowBuilder};
use tracing::{debug, warn};
use url::Url;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::browser_container::OverlayPhase;
use crate::managers::rendering_surface::RenderingSurface;
use crate::managers::session_history::SessionHistory;
use crate::platform;
use crate::services::ipc::{parse_ipc, IpcCommand};
use crate::types::errors::NavigationError;
use crate::types::navigation::{parse_address, ContainerId, NewWindowRequest, SwipeDirection};
use crate::types::settings::ShellSettings;

#[derive(Debug)]
enum UserEvent {
    PageLoaded { container: ContainerId, url: String },
    NewWindow { container: ContainerId, url: String },
    Swipe { container: ContainerId, direction: SwipeDirection },
    Dismiss,
}

const SWIPE_JS: &str = include_str!("../../resources/ui/swipe.js");
const BUNDLED_SPLASH_SVG: &[u8] = include_bytes!("../../resources/splash.svg");

#[cfg(not(target_os = "windows"))]
const SPLASH_URL: &str = "df://localhost/splash";
// WebView2 exposes custom protocols as http://<scheme>.localhost
#[cfg(target_os = "windows")]
const SPLASH_URL: &str = "http://df.localhost/splash";

// ─── Rendering surface ───

/// A child webview driven by one browser container.
pub struct WrySurface {
    webview: WebView,
    history: SessionHistory,
}

impl WrySurface {
    /// Records a finished top-level navigation.
    fn commit(&mut self, url: Url) {
        self.history.commit(url);
    }

    fn set_visible(&self, visible: bool) {
        if let Err(e) = self.webview.set_visible(visible) {
            debug!("set_visible failed: {}", e);
        }
    }

    fn set_bounds(&self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            debug!("set_bounds failed: {}", e);
        }
    }

    fn eval(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!("script failed: {}", e);
        }
    }
}

impl RenderingSurface for WrySurface {
    fn load(&mut self, url: &Url) {
        if let Err(e) = self.webview.load_url(url.as_str()) {
            warn!(%url, "load failed: {}", e);
        }
    }

    fn go_back(&mut self) {
        if self.history.go_back().is_some() {
            self.eval("history.back()");
        }
    }

    fn go_forward(&mut self) {
        if self.history.go_forward().is_some() {
            self.eval("history.forward()");
        }
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

fn window_bounds(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(size.width, size.height).into(),
    }
}

/// Builds the hidden child webview for container `id`.
fn build_surface(
    window: &Window,
    proxy: &EventLoopProxy<UserEvent>,
    id: &ContainerId,
) -> Result<WrySurface, NavigationError> {
    let ipc_proxy = proxy.clone();
    let ipc_id = id.clone();
    let nw_proxy = proxy.clone();
    let nw_id = id.clone();
    let load_proxy = proxy.clone();
    let load_id = id.clone();

    let webview = WebViewBuilder::new()
        .with_bounds(window_bounds(window))
        .with_visible(false)
        .with_initialization_script(SWIPE_JS)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let event = match parse_ipc(msg.body()) {
                Some(IpcCommand::Swipe { direction }) => UserEvent::Swipe {
                    container: ipc_id.clone(),
                    direction,
                },
                Some(IpcCommand::Dismiss) => UserEvent::Dismiss,
                None => return,
            };
            let _ = ipc_proxy.send_event(event);
        })
        .with_new_window_req_handler(move |url, _features| {
            // The shell opens the pop-up in a container of its own.
            let _ = nw_proxy.send_event(UserEvent::NewWindow {
                container: nw_id.clone(),
                url,
            });
            wry::NewWindowResponse::Deny
        })
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                let _ = load_proxy.send_event(UserEvent::PageLoaded {
                    container: load_id.clone(),
                    url,
                });
            }
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(window)
        .map_err(|e| NavigationError::SurfaceUnavailable(e.to_string()))?;

    Ok(WrySurface {
        webview,
        history: SessionHistory::new(),
    })
}

// ─── Splash page ───

fn splash_html(settings: &ShellSettings) -> String {
    let splash = &settings.splash;
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>\
         html{{background:{bg};transition:opacity {fade}ms ease-in-out}}\
         body{{margin:0;height:100vh;display:flex;align-items:center;justify-content:center;background:{bg}}}\
         img{{width:{size}px;height:{size}px;object-fit:contain}}\
         </style></head><body><img src=\"splash-image\" alt=\"\"></body></html>",
        bg = splash.backdrop,
        size = splash.image_size,
        fade = settings.crossfade.duration_ms,
    )
}

/// Looks for `<name>.png` or `<name>.svg` in the assets directory and falls
/// back to the bundled image.
fn splash_image(name: &str) -> (Vec<u8>, &'static str) {
    let dir = platform::get_assets_dir();
    for (ext, mime) in [("png", "image/png"), ("svg", "image/svg+xml")] {
        if let Ok(bytes) = fs::read(dir.join(format!("{}.{}", name, ext))) {
            return (bytes, mime);
        }
    }
    (BUNDLED_SPLASH_SVG.to_vec(), "image/svg+xml")
}

fn build_splash_view(window: &Window, settings: &ShellSettings) -> Result<WebView, wry::Error> {
    let html = splash_html(settings);
    let image_name = settings.splash.image.clone();

    WebViewBuilder::new()
        .with_bounds(window_bounds(window))
        .with_transparent(true)
        .with_custom_protocol("df".into(), move |_wv_id, request| {
            let (body, mime): (Vec<u8>, &str) = match request.uri().path() {
                "/splash-image" => splash_image(&image_name),
                _ => (html.clone().into_bytes(), "text/html; charset=utf-8"),
            };
            wry::http::Response::builder()
                .header("Content-Type", mime)
                .body(Cow::Owned(body.clone()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Owned(body)))
        })
        .with_url(SPLASH_URL)
        .build_as_child(window)
}

// ─── View synchronization ───

/// Native view state derived from the app after every event.
struct Views {
    splash: Option<WebView>,
    fade_started: bool,
    title: String,
}

impl Views {
    fn sync(&mut self, app: &App<WrySurface>, window: &Window) {
        let Some(stack) = app.stack() else {
            return;
        };

        // A fixed-delay splash is created before the browser, so it sits
        // below it; the browser stays hidden until the splash has faded.
        let splash_fading = app.splash_fading();
        let visible = stack.visible();
        for container in stack.iter() {
            let shown = container.id() == visible.id()
                && container.visibility().surface_opacity > 0.0
                && !splash_fading;
            container.surface().set_visible(shown);
        }

        if !visible.title().is_empty() && visible.title() != self.title {
            self.title = visible.title().to_string();
            window.set_title(&self.title);
        }

        let phase = stack
            .root()
            .overlay_phase()
            .or_else(|| splash_fading.then_some(OverlayPhase::FadingOut));
        match phase {
            Some(OverlayPhase::FadingOut) if !self.fade_started => {
                self.fade_started = true;
                if let Some(splash) = &self.splash {
                    if let Err(e) =
                        splash.evaluate_script("document.documentElement.style.opacity='0'")
                    {
                        warn!("overlay fade failed: {}", e);
                    }
                }
            }
            Some(_) => {}
            None => {
                if self.splash.take().is_some() {
                    debug!("splash view removed");
                }
            }
        }
    }

    fn resize(&self, app: &App<WrySurface>, window: &Window) {
        let bounds = window_bounds(window);
        if let Some(splash) = &self.splash {
            if let Err(e) = splash.set_bounds(bounds) {
                debug!("splash set_bounds failed: {}", e);
            }
        }
        if let Some(stack) = app.stack() {
            for container in stack.iter() {
                container.surface().set_bounds(bounds);
            }
        }
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app: App<WrySurface> = App::from_config(None)?;
    let settings = app.settings().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            settings.window.width as f64,
            settings.window.height as f64,
        ))
        .build(&event_loop)?;

    let start = Instant::now();

    // Browser first, so the splash overlay stacks above it.
    app.startup(&mut |id: &ContainerId| build_surface(&window, &proxy, id))?;
    let mut views = Views {
        splash: Some(build_splash_view(&window, &settings)?),
        fade_started: false,
        title: String::new(),
    };
    views.sync(&app, &window);

    event_loop.run(move |event, _, control_flow| {
        {
            let mut factory = |id: &ContainerId| build_surface(&window, &proxy, id);
            if let Err(e) = app.advance_to(start.elapsed(), &mut factory) {
                warn!("timer event failed: {}", e);
            }
        }

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                app.shutdown();
                views.splash = None;
                *control_flow = ControlFlow::Exit;
                return;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => views.resize(&app, &window),

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key, .. },
                ..
            } => {
                if key.state == ElementState::Pressed && key.logical_key == Key::Escape {
                    app.dismiss_top();
                }
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::PageLoaded { container, url } => match Url::parse(&url) {
                    Ok(url) if url.scheme() != "about" => {
                        if let Some(c) = app.stack_mut().and_then(|s| s.get_mut(&container)) {
                            c.surface_mut().commit(url.clone());
                        }
                        app.on_navigation_finished(&container, Some(&url));
                    }
                    Ok(_) => {}
                    Err(e) => debug!("page load ignored: {}", e),
                },
                UserEvent::NewWindow { container, url } => match parse_address(&url) {
                    Ok(url) => {
                        // wry only reports requests for new top-level contexts here.
                        let request = NewWindowRequest::new(url, true);
                        let mut factory = |id: &ContainerId| build_surface(&window, &proxy, id);
                        if let Err(e) = app.on_new_window(&container, &request, &mut factory) {
                            warn!("new window ignored: {}", e);
                        }
                    }
                    Err(e) => debug!("new window ignored: {}", e),
                },
                UserEvent::Swipe {
                    container,
                    direction,
                } => {
                    app.on_swipe(&container, direction);
                }
                UserEvent::Dismiss => {
                    app.dismiss_top();
                }
            },

            _ => {}
        }

        views.sync(&app, &window);

        *control_flow = match app.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(start + deadline),
            None => ControlFlow::Wait,
        };
    });
}
