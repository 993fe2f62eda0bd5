/// Smallest zoom factor reachable through the zoom controls.
pub const ZOOM_MIN: f64 = 0.3;

/// Largest zoom factor reachable through the zoom controls.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change applied by a single zoom-in or zoom-out activation.
pub const ZOOM_STEP: f64 = 0.15;

/// Absolute cap on the width of the fitted (zoom 1.0) preview.
pub const FIT_MAX_WIDTH: u32 = 1000;

/// Absolute cap on the height of the fitted (zoom 1.0) preview.
pub const FIT_MAX_HEIGHT: u32 = 800;

/// Horizontal space reserved around the preview when fitting.
pub const FIT_MARGIN_X: u32 = 80;

/// Vertical space reserved for the close button and zoom controls when fitting.
pub const FIT_MARGIN_Y: u32 = 160;

/// Absolute cap on the rendered preview width, whatever the zoom.
pub const DISPLAY_MAX_WIDTH: u32 = 1100;

/// Horizontal space reserved around the rendered preview.
pub const DISPLAY_MARGIN_X: u32 = 48;

/// Text drawn over every rendered preview.
pub const WATERMARK_TEXT: &str = "Neiropodarok";

/// Watermark text colour as RGB.
pub const WATERMARK_COLOR: [u8; 3] = [0, 0, 0];

/// Watermark opacity (0.0 = invisible, 1.0 = opaque).
pub const WATERMARK_OPACITY: f32 = 0.12;

/// Watermark font size is the render width divided by this value.
pub const WATERMARK_WIDTH_DIVISOR: u32 = 22;

/// Smallest watermark font size, in pixels.
pub const WATERMARK_MIN_FONT_SIZE: u32 = 12;

/// Distance between the watermark's right edge and the surface's right edge.
pub const WATERMARK_INSET_RIGHT: u32 = 12;

/// Distance between the watermark baseline and the surface's bottom edge.
pub const WATERMARK_INSET_BOTTOM: u32 = 20;

/// Fraction of the window height a vertical video may occupy.
pub const VIDEO_MAX_HEIGHT_FRACTION: f32 = 0.78;

/// Absolute cap on the height of a vertical video, in pixels.
pub const VIDEO_MAX_HEIGHT: u32 = 800;

/// File extensions recognised as gallery images (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// Subdirectory of a gallery folder holding per-image thumbnails.
pub const THUMBNAIL_DIR: &str = "thumbs";
