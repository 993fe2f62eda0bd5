use lightbox_core::bounds::ChromeConfig;
use lightbox_core::error::LightboxError;
use lightbox_core::geometry::Size;

#[test]
fn test_fit_bounds_large_window_hits_absolute_caps() {
    let chrome = ChromeConfig::default();
    assert_eq!(chrome.fit_bounds(Size::new(1920, 1080)).unwrap(), Size::new(1000, 800));
}

#[test]
fn test_fit_bounds_subtracts_chrome_margins() {
    let chrome = ChromeConfig::default();
    assert_eq!(chrome.fit_bounds(Size::new(1280, 800)).unwrap(), Size::new(1000, 640));
    assert_eq!(chrome.fit_bounds(Size::new(600, 500)).unwrap(), Size::new(520, 340));
}

#[test]
fn test_fit_bounds_window_smaller_than_chrome() {
    let chrome = ChromeConfig::default();
    let err = chrome.fit_bounds(Size::new(40, 900)).unwrap_err();
    assert!(matches!(err, LightboxError::InvalidViewport { width: 0, .. }));
    let err = chrome.fit_bounds(Size::new(900, 160)).unwrap_err();
    assert!(matches!(err, LightboxError::InvalidViewport { height: 0, .. }));
}

#[test]
fn test_max_display_width() {
    let chrome = ChromeConfig::default();
    assert_eq!(chrome.max_display_width(Size::new(1920, 1080)).unwrap(), 1100);
    assert_eq!(chrome.max_display_width(Size::new(600, 500)).unwrap(), 552);
}

#[test]
fn test_max_display_width_tracks_window_changes() {
    let chrome = ChromeConfig::default();
    let wide = chrome.max_display_width(Size::new(1400, 900)).unwrap();
    let narrow = chrome.max_display_width(Size::new(700, 900)).unwrap();
    assert_eq!(wide, 1100);
    assert_eq!(narrow, 652);
}

#[test]
fn test_max_display_width_rejects_tiny_window() {
    let chrome = ChromeConfig::default();
    let err = chrome.max_display_width(Size::new(48, 600)).unwrap_err();
    assert!(matches!(err, LightboxError::InvalidViewport { .. }));
}

#[test]
fn test_custom_chrome() {
    let chrome = ChromeConfig {
        fit_max_width: 400,
        fit_max_height: 300,
        fit_margin_x: 0,
        fit_margin_y: 0,
        display_max_width: 500,
        display_margin_x: 0,
    };
    assert_eq!(chrome.fit_bounds(Size::new(1000, 1000)).unwrap(), Size::new(400, 300));
    assert_eq!(chrome.max_display_width(Size::new(1000, 1000)).unwrap(), 500);
}
