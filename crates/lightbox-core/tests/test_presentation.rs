use lightbox_core::geometry::Size;
use lightbox_core::video::{VideoConfig, VideoPresentation};
use lightbox_core::watermark::WatermarkConfig;

// ---------------------------------------------------------------------------
// Watermark
// ---------------------------------------------------------------------------

#[test]
fn test_watermark_scales_with_width() {
    let layout = WatermarkConfig::default().layout(Size::new(1100, 825));
    assert_eq!(layout.font_size, 50);
    assert_eq!(layout.anchor_x, 1088);
    assert_eq!(layout.anchor_y, 805);
    assert_eq!(layout.text, "Neiropodarok");
    assert_eq!(layout.opacity, 0.12);
}

#[test]
fn test_watermark_font_size_floor() {
    let config = WatermarkConfig::default();
    assert_eq!(config.layout(Size::new(200, 100)).font_size, 12);
    assert_eq!(config.layout(Size::new(242, 100)).font_size, 12);
    assert_eq!(config.layout(Size::new(275, 100)).font_size, 13);
}

#[test]
fn test_watermark_anchor_bottom_right() {
    let layout = WatermarkConfig::default().layout(Size::new(200, 100));
    assert_eq!((layout.anchor_x, layout.anchor_y), (188, 80));
}

#[test]
fn test_watermark_anchor_saturates_on_tiny_surface() {
    let layout = WatermarkConfig::default().layout(Size::new(5, 5));
    assert_eq!((layout.anchor_x, layout.anchor_y), (0, 0));
}

#[test]
fn test_watermark_zero_divisor_does_not_panic() {
    let config = WatermarkConfig {
        width_divisor: 0,
        ..WatermarkConfig::default()
    };
    assert_eq!(config.layout(Size::new(30, 30)).font_size, 30);
}

#[test]
fn test_watermark_is_faint_black_by_default() {
    let layout = WatermarkConfig::default().layout(Size::new(800, 600));
    assert_eq!(layout.color, [0, 0, 0]);
    assert_eq!(layout.opacity, 0.12);
}

#[test]
fn test_watermark_color_from_config() {
    let config = WatermarkConfig {
        color: [255, 255, 255],
        ..WatermarkConfig::default()
    };
    assert_eq!(config.layout(Size::new(800, 600)).color, [255, 255, 255]);
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[test]
fn test_portrait_video_is_vertical() {
    let p = VideoConfig::default().classify(Size::new(1080, 1920), 900);
    assert_eq!(p, VideoPresentation::Vertical { max_height: 702 });
    assert!(p.is_vertical());
}

#[test]
fn test_vertical_video_height_capped() {
    let p = VideoConfig::default().classify(Size::new(1080, 1920), 1200);
    assert_eq!(p, VideoPresentation::Vertical { max_height: 800 });
}

#[test]
fn test_landscape_and_square_videos_are_standard() {
    let config = VideoConfig::default();
    assert_eq!(config.classify(Size::new(1920, 1080), 900), VideoPresentation::Standard);
    assert_eq!(config.classify(Size::new(1000, 1000), 900), VideoPresentation::Standard);
}

#[test]
fn test_video_without_metadata_is_standard() {
    let config = VideoConfig::default();
    assert_eq!(config.classify(Size::new(0, 0), 900), VideoPresentation::Standard);
    assert_eq!(config.classify(Size::new(0, 1920), 900), VideoPresentation::Standard);
}

#[test]
fn test_vertical_video_render_size_contains() {
    let p = VideoPresentation::Vertical { max_height: 702 };
    assert_eq!(p.render_size(Size::new(1080, 1920)), Size::new(395, 702));
    assert_eq!(p.render_size(Size::new(360, 640)), Size::new(360, 640));
    assert_eq!(
        VideoPresentation::Standard.render_size(Size::new(1920, 1080)),
        Size::new(1920, 1080)
    );
}
