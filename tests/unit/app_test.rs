//! End-to-end tests of the App against headless surfaces: both splash
//! variants, title updates, pop-ups and shutdown.

use std::time::Duration;

use url::Url;

use druckerforum_webview::app::{App, Screen};
use druckerforum_webview::managers::rendering_surface::HeadlessSurface;
use druckerforum_webview::managers::splash_controller::{SplashControllerTrait, SplashTransition};
use druckerforum_webview::types::errors::NavigationError;
use druckerforum_webview::types::navigation::{
    ContainerId, NewWindowRequest, ShellEvent, SplashScreen, SwipeDirection,
};
use druckerforum_webview::types::settings::{ShellSettings, SplashVariant};

fn headless() -> impl FnMut(&ContainerId) -> Result<HeadlessSurface, NavigationError> {
    |_| Ok(HeadlessSurface::new())
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn crossfade_settings() -> ShellSettings {
    let mut settings = ShellSettings::default();
    settings.splash.variant = SplashVariant::Crossfade;
    settings
}

/// Commits the visible container's pending navigation, as the engine would.
fn finish_visible(app: &mut App<HeadlessSurface>) {
    let stack = app.stack_mut().unwrap();
    let container = stack.visible_mut();
    let id = container.id().clone();
    let committed = container.surface_mut().finish_navigation();
    app.on_navigation_finished(&id, committed.as_ref());
}

#[test]
fn test_fixed_delay_shows_splash_then_browser() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();

    assert!(matches!(app.screen(), Screen::Splash(SplashScreen::Splash { .. })));
    assert!(app.stack().is_none());

    app.advance(Duration::from_millis(2499), &mut factory).unwrap();
    assert!(app.stack().is_none());

    let events = app.advance(Duration::from_millis(1), &mut factory).unwrap();
    assert_eq!(events, vec![ShellEvent::SplashExpired]);
    assert_eq!(app.screen(), Screen::Browser);
    assert!(app.splash().is_active());

    let root = app.stack().unwrap().root();
    assert_eq!(
        root.surface().load_requests(),
        vec![&url("https://www.druckerforum.org")]
    );
}

#[test]
fn test_fixed_delay_handover_fades_the_splash() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    assert_eq!(app.splash_transition(), None);
    assert!(!app.splash_fading());

    app.advance(Duration::from_millis(2500), &mut factory).unwrap();
    assert_eq!(app.splash_transition(), Some(SplashTransition { animated: true }));
    assert!(app.splash_fading());
    assert_eq!(app.next_deadline(), Some(Duration::from_millis(2900)));

    assert!(app.advance(Duration::from_millis(399), &mut factory).unwrap().is_empty());
    let events = app.advance(Duration::from_millis(1), &mut factory).unwrap();
    assert_eq!(events, vec![ShellEvent::SplashFadeFinished]);
    assert!(!app.splash_fading());
    assert_eq!(app.splash_transition(), Some(SplashTransition { animated: true }));
}

#[test]
fn test_shutdown_cancels_splash_fade() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    app.advance(Duration::from_millis(2500), &mut factory).unwrap();
    assert!(app.splash_fading());

    app.shutdown();
    assert!(!app.splash_fading());
    assert_eq!(app.next_deadline(), None);
}

#[test]
fn test_default_url_scenario_sets_title() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    app.advance(Duration::from_millis(2500), &mut factory).unwrap();

    finish_visible(&mut app);
    assert_eq!(app.title(), Some("www.druckerforum.org"));
}

#[test]
fn test_crossfade_creates_browser_immediately() {
    let mut app: App<HeadlessSurface> = App::new(crossfade_settings());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();

    assert_eq!(app.screen(), Screen::Browser);
    assert!(!app.splash().is_active());
    let visibility = app.stack().unwrap().root().visibility();
    assert_eq!(visibility.overlay_opacity, Some(1.0));
    assert_eq!(visibility.surface_opacity, 0.0);

    // Nothing happens until the page finishes loading.
    app.advance(Duration::from_secs(10), &mut factory).unwrap();
    assert_eq!(app.stack().unwrap().root().visibility().surface_opacity, 0.0);

    finish_visible(&mut app);
    app.advance(Duration::from_millis(500), &mut factory).unwrap();
    assert_eq!(app.stack().unwrap().root().visibility().surface_opacity, 1.0);

    app.advance(Duration::from_millis(400), &mut factory).unwrap();
    assert!(app.stack().unwrap().root().overlay_phase().is_none());
    assert_eq!(app.next_deadline(), None);
}

#[test]
fn test_crossfade_delay_starts_when_a_slow_load_finishes() {
    let mut app: App<HeadlessSurface> = App::new(crossfade_settings());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();

    // Idle while the page loads; the clock is brought up to date before the
    // finished event is applied.
    assert!(app.advance_to(Duration::from_secs(3), &mut factory).unwrap().is_empty());
    finish_visible(&mut app);
    assert_eq!(app.next_deadline(), Some(Duration::from_millis(3500)));

    assert!(app.advance_to(Duration::from_secs(3), &mut factory).unwrap().is_empty());
    assert!(app.advance_to(Duration::from_millis(3499), &mut factory).unwrap().is_empty());
    assert_eq!(app.stack().unwrap().root().visibility().surface_opacity, 0.0);

    let root = app.stack().unwrap().root().id().clone();
    let events = app.advance_to(Duration::from_millis(3500), &mut factory).unwrap();
    assert_eq!(events, vec![ShellEvent::BeginCrossfade(root)]);
    assert_eq!(app.stack().unwrap().root().visibility().surface_opacity, 1.0);
}

#[test]
fn test_popup_push_and_dismiss() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    app.advance(Duration::from_millis(2500), &mut factory).unwrap();
    finish_visible(&mut app);

    let root = app.stack().unwrap().root().id().clone();
    let request = NewWindowRequest::new(url("https://www.druckerforum.org/programme/"), true);
    let surface = app.on_new_window(&root, &request, &mut factory).unwrap();
    assert!(surface.is_some());

    finish_visible(&mut app);
    assert_eq!(app.title(), Some("www.druckerforum.org"));
    assert_eq!(app.stack().unwrap().depth(), 2);

    assert!(app.dismiss_top());
    assert!(!app.dismiss_top());
    assert_eq!(app.stack().unwrap().visible().id(), &root);
}

#[test]
fn test_popup_presented_when_not_embedded() {
    let mut settings = ShellSettings::default();
    settings.navigation.embed_in_stack = false;
    let mut app: App<HeadlessSurface> = App::new(settings);
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    app.advance(Duration::from_millis(2500), &mut factory).unwrap();

    let root = app.stack().unwrap().root().id().clone();
    let request = NewWindowRequest::new(url("https://example.org/"), true);
    assert_eq!(app.on_new_window(&root, &request, &mut factory), Ok(None));
    assert_eq!(app.stack().unwrap().modal_count(), 1);
}

#[test]
fn test_events_before_browser_exists() {
    let mut app: App<HeadlessSurface> = App::new(ShellSettings::default());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();

    let id = ContainerId::new();
    assert_eq!(app.on_swipe(&id, SwipeDirection::Right), None);
    assert!(app.title().is_none());
    let request = NewWindowRequest::new(url("https://example.org/"), true);
    assert!(matches!(
        app.on_new_window(&id, &request, &mut factory),
        Err(NavigationError::ContainerNotFound(_))
    ));
}

#[test]
fn test_invalid_start_url_falls_back_to_default() {
    let mut settings = ShellSettings::default();
    settings.start_url = "::not a url::".to_string();
    let app: App<HeadlessSurface> = App::new(settings);
    assert_eq!(app.start_url(), &url("https://www.druckerforum.org"));
}

#[test]
fn test_shutdown_cancels_pending_crossfade() {
    let mut app: App<HeadlessSurface> = App::new(crossfade_settings());
    let mut factory = headless();
    app.startup(&mut factory).unwrap();
    finish_visible(&mut app);
    assert!(app.next_deadline().is_some());

    app.shutdown();
    assert_eq!(app.next_deadline(), None);
    assert!(app.advance(Duration::from_secs(1), &mut factory).unwrap().is_empty());
}

#[test]
fn test_surface_failure_surfaces_from_startup() {
    let mut app: App<HeadlessSurface> = App::new(crossfade_settings());
    let mut failing = |_: &ContainerId| -> Result<HeadlessSurface, NavigationError> {
        Err(NavigationError::SurfaceUnavailable("headless".to_string()))
    };
    assert!(app.startup(&mut failing).is_err());
    assert!(app.stack().is_none());
}
