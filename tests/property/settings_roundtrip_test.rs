//! Property-based tests for reading the settings file.
//!
//! Any settings serialized to the config file load back unchanged.

use std::fs;

use druckerforum_webview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use druckerforum_webview::types::settings::{ShellSettings, SplashVariant, SwipeWiring};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_settings() -> impl Strategy<Value = ShellSettings> {
    (
        "[a-z]{1,12}",
        0u64..10_000,
        prop_oneof![Just(SplashVariant::FixedDelay), Just(SplashVariant::Crossfade)],
        0u64..2_000,
        0u64..2_000,
        prop_oneof![Just(SwipeWiring::BothDirections), Just(SwipeWiring::BackOnly)],
        any::<bool>(),
        "#[0-9a-f]{6}",
    )
        .prop_map(
            |(host, delay_ms, variant, fade_delay, fade_duration, wiring, embed, backdrop)| {
                let mut settings = ShellSettings::default();
                settings.start_url = format!("https://{}.org/", host);
                settings.splash.delay_ms = delay_ms;
                settings.splash.variant = variant;
                settings.splash.backdrop = backdrop;
                settings.crossfade.delay_ms = fade_delay;
                settings.crossfade.duration_ms = fade_duration;
                settings.navigation.swipe_wiring = wiring;
                settings.navigation.embed_in_stack = embed;
                settings
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_file_loads_unchanged(settings in arb_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
        let loaded = engine.load().unwrap();

        prop_assert_eq!(&loaded, &settings);
        prop_assert_eq!(engine.get_settings(), &settings);
    }
}
