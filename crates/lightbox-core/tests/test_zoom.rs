use approx::assert_relative_eq;

use lightbox_core::zoom::{Zoom, ZoomLimits};

#[test]
fn test_zoom_default_is_unit() {
    let z = Zoom::default();
    assert_eq!(z.value(), 1.0);
    assert_eq!(z.limits(), ZoomLimits::default());
}

#[test]
fn test_zoom_limits_default_range() {
    let limits = ZoomLimits::default();
    assert_eq!(limits.min, 0.3);
    assert_eq!(limits.max, 3.0);
    assert_eq!(limits.step, 0.15);
}

#[test]
fn test_zoom_in_steps_by_fixed_amount() {
    let z = Zoom::default().zoom_in();
    assert_relative_eq!(z.value(), 1.15, epsilon = 1e-9);
    let z = z.zoom_in();
    assert_relative_eq!(z.value(), 1.30, epsilon = 1e-9);
}

#[test]
fn test_zoom_out_steps_by_fixed_amount() {
    let z = Zoom::default().zoom_out().zoom_out();
    assert_relative_eq!(z.value(), 0.70, epsilon = 1e-9);
}

#[test]
fn test_zoom_in_saturates_at_max() {
    let mut z = Zoom::default();
    for _ in 0..40 {
        z = z.zoom_in();
    }
    assert_eq!(z.value(), 3.0);
    assert!(z.at_max());
    assert_eq!(z.zoom_in().value(), 3.0);
}

#[test]
fn test_zoom_out_saturates_at_min() {
    let mut z = Zoom::default();
    for _ in 0..40 {
        z = z.zoom_out();
    }
    assert_eq!(z.value(), 0.3);
    assert!(z.at_min());
    assert_eq!(z.zoom_out().value(), 0.3);
}

#[test]
fn test_zoom_request_out_of_range_is_clamped() {
    let limits = ZoomLimits::default();
    assert_eq!(Zoom::new(3.5, limits).value(), 3.0);
    assert_eq!(Zoom::new(0.1, limits).value(), 0.3);
    assert_eq!(Zoom::new(-2.0, limits).value(), 0.3);
}

#[test]
fn test_zoom_non_finite_falls_back_to_unit() {
    let limits = ZoomLimits::default();
    assert_eq!(Zoom::new(f64::NAN, limits).value(), 1.0);
    assert_eq!(Zoom::new(f64::INFINITY, limits).value(), 1.0);
}

#[test]
fn test_zoom_custom_limits() {
    let limits = ZoomLimits {
        min: 0.5,
        max: 2.0,
        step: 0.5,
    };
    let z = Zoom::reset(limits).zoom_in().zoom_in().zoom_in();
    assert_eq!(z.value(), 2.0);
    // Reset clamps 1.0 into a range that excludes it.
    let narrow = ZoomLimits {
        min: 1.5,
        max: 2.0,
        step: 0.1,
    };
    assert_eq!(Zoom::reset(narrow).value(), 1.5);
}

#[test]
fn test_zoom_inverted_limits_do_not_panic() {
    let inverted = ZoomLimits {
        min: 2.0,
        max: 1.0,
        step: 0.1,
    };
    assert_eq!(inverted.clamp(1.5), 1.0);
}

#[test]
fn test_zoom_display_as_percentage() {
    assert_eq!(Zoom::default().to_string(), "100%");
    assert_eq!(Zoom::default().zoom_in().to_string(), "115%");
    assert_eq!(Zoom::new(3.0, ZoomLimits::default()).to_string(), "300%");
}

#[test]
fn test_zoom_deserialize_reclamps() {
    let z: Zoom = serde_json::from_str(r#"{"value": 9.0}"#).unwrap();
    assert_eq!(z.value(), 3.0);
    assert_eq!(z.limits(), ZoomLimits::default());
}
