//! DruckerForum WebView: splash screen, then the Drucker Forum site in a webview.
//!
//! Entry point: opens the `tao` window with the `wry` webview shell.
//! When built without the `gui` feature, runs the same control flow headless
//! against an in-memory rendering surface.

#[cfg(feature = "gui")]
fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = druckerforum_webview::ui::webview_app::run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    tracing_subscriber::fmt::init();

    println!();
    println!("DruckerForum WebView v{} (headless mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let result = demo_fixed_delay().and_then(|_| demo_crossfade());
    match result {
        Ok(()) => {
            println!();
            println!("  Both splash variants completed.");
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn headless_factory(
) -> impl FnMut(&druckerforum_webview::types::navigation::ContainerId) -> Result<
    druckerforum_webview::managers::rendering_surface::HeadlessSurface,
    druckerforum_webview::types::errors::NavigationError,
> {
    |_id| Ok(druckerforum_webview::managers::rendering_surface::HeadlessSurface::new())
}

/// Commits the visible container's outstanding navigation and reports it.
#[cfg(not(feature = "gui"))]
fn finish_visible(app: &mut druckerforum_webview::app::App<druckerforum_webview::managers::rendering_surface::HeadlessSurface>) {
    let Some(stack) = app.stack_mut() else {
        return;
    };
    let container = stack.visible_mut();
    let id = container.id().clone();
    let url = container.surface_mut().finish_navigation();
    app.on_navigation_finished(&id, url.as_ref());
}

#[cfg(not(feature = "gui"))]
fn demo_fixed_delay() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Duration;

    use druckerforum_webview::app::{App, Screen};
    use druckerforum_webview::managers::rendering_surface::HeadlessSurface;
    use druckerforum_webview::types::navigation::{NewWindowRequest, SwipeDirection};

    section("Fixed-delay splash");

    let mut app: App<HeadlessSurface> = App::from_config(None)?;
    let mut factory = headless_factory();
    app.startup(&mut factory)?;
    println!("  Screen: {:?}", app.screen());

    app.advance(Duration::from_millis(2500), &mut factory)?;
    println!("  After 2.5s: {}", if app.screen() == Screen::Browser { "browser" } else { "splash" });

    finish_visible(&mut app);
    println!("  Title: {}", app.title().unwrap_or_default());

    let root = app.stack().map(|s| s.root().id().clone()).ok_or("browser missing")?;
    let popup = NewWindowRequest::new(url::Url::parse("https://www.druckerforum.org/programme/")?, true);
    let surface = app.on_new_window(&root, &popup, &mut factory)?;
    println!("  Pop-up pushed, surface: {:?}", surface.map(|id| id.to_string()));

    finish_visible(&mut app);
    println!("  Title: {}", app.title().unwrap_or_default());

    let top = app.stack().map(|s| s.visible().id().clone()).ok_or("browser missing")?;
    println!("  Swipe right: {:?}", app.on_swipe(&top, SwipeDirection::Right));

    app.dismiss_top();
    println!("  Dismissed pop-up, title: {}", app.title().unwrap_or_default());
    app.shutdown();
    println!();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn demo_crossfade() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Duration;

    use druckerforum_webview::app::App;
    use druckerforum_webview::managers::rendering_surface::HeadlessSurface;
    use druckerforum_webview::types::settings::{ShellSettings, SplashVariant};

    section("Crossfade splash");

    let mut settings = ShellSettings::default();
    settings.splash.variant = SplashVariant::Crossfade;
    let mut app: App<HeadlessSurface> = App::new(settings);
    let mut factory = headless_factory();
    app.startup(&mut factory)?;

    let visibility = |app: &App<HeadlessSurface>| app.stack().map(|s| s.root().visibility());
    println!("  Created: {:?}", visibility(&app));

    finish_visible(&mut app);
    app.advance(Duration::from_millis(500), &mut factory)?;
    println!("  Fading: {:?}", visibility(&app));

    app.advance(Duration::from_millis(400), &mut factory)?;
    println!("  Done: {:?}", visibility(&app));
    app.shutdown();
    Ok(())
}
