use std::time::Duration;

use druckerforum_webview::managers::scheduler::Scheduler;
use druckerforum_webview::managers::splash_controller::{SplashController, SplashControllerTrait};
use druckerforum_webview::types::navigation::{ShellEvent, SplashScreen};
use druckerforum_webview::types::settings::SplashSettings;

fn controller() -> (SplashController, Scheduler<ShellEvent>) {
    (SplashController::new(SplashSettings::default()), Scheduler::new())
}

#[test]
fn test_inactive_after_construction() {
    let (splash, _) = controller();
    assert!(!splash.is_active());
    assert!(!splash.is_scheduled());
}

#[test]
fn test_splash_screen_shows_image_over_black() {
    let (splash, _) = controller();
    assert_eq!(
        splash.screen(),
        SplashScreen::Splash {
            image: "GPDF SplashScreen".to_string(),
            backdrop: "#000000".to_string(),
            size: 300,
        }
    );
}

#[test]
fn test_on_appear_schedules_exactly_one_callback() {
    let (mut splash, scheduler) = controller();
    splash.on_appear(&scheduler);
    splash.on_appear(&scheduler);

    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_becomes_active_after_delay() {
    let (mut splash, scheduler) = controller();
    splash.on_appear(&scheduler);

    assert!(scheduler.advance(Duration::from_millis(2400)).is_empty());
    assert!(!splash.is_active());

    let events = scheduler.advance(Duration::from_millis(100));
    assert_eq!(events, vec![ShellEvent::SplashExpired]);

    let transition = splash.on_timer_expired().unwrap();
    assert!(transition.animated);
    assert!(splash.is_active());
    assert_eq!(splash.screen(), SplashScreen::Main);
}

#[test]
fn test_transition_happens_exactly_once() {
    let (mut splash, scheduler) = controller();
    splash.on_appear(&scheduler);
    scheduler.advance(Duration::from_secs(10));

    assert!(splash.on_timer_expired().is_some());
    assert!(splash.on_timer_expired().is_none());
    assert!(splash.is_active());
}

#[test]
fn test_on_appear_after_activation_schedules_nothing() {
    let (mut splash, scheduler) = controller();
    splash.on_appear(&scheduler);
    scheduler.advance(Duration::from_millis(2500));
    splash.on_timer_expired();

    splash.on_appear(&scheduler);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_dropping_controller_cancels_timer() {
    let (mut splash, scheduler) = controller();
    splash.on_appear(&scheduler);
    drop(splash);

    assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
}

#[test]
fn test_custom_delay() {
    let settings = SplashSettings {
        delay_ms: 1000,
        ..SplashSettings::default()
    };
    let mut splash = SplashController::new(settings);
    let scheduler = Scheduler::new();
    splash.on_appear(&scheduler);

    assert_eq!(splash.delay(), Duration::from_secs(1));
    assert_eq!(scheduler.advance(Duration::from_secs(1)), vec![ShellEvent::SplashExpired]);
}
