use druckerforum_webview::types::errors::*;

// === NavigationError Tests ===

#[test]
fn navigation_error_display_variants() {
    assert_eq!(
        NavigationError::InvalidUrl("not a url".to_string()).to_string(),
        "Invalid URL: not a url"
    );
    assert_eq!(
        NavigationError::InvalidDirection("up".to_string()).to_string(),
        "Invalid swipe direction: up"
    );
    assert_eq!(
        NavigationError::SurfaceUnavailable("no window".to_string()).to_string(),
        "Rendering surface unavailable: no window"
    );
    assert_eq!(
        NavigationError::ContainerNotFound("c-1".to_string()).to_string(),
        "Container not found: c-1"
    );
}

#[test]
fn navigation_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(NavigationError::InvalidUrl("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
}

#[test]
fn settings_error_converts_into_boxed_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error>> {
        Err(SettingsError::IoError("permission denied".to_string()))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert_eq!(err.to_string(), "Settings I/O error: permission denied");
}
