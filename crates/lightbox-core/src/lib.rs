pub mod bounds;
pub mod config;
pub mod consts;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod io;
pub mod preview;
pub mod source;
pub mod video;
pub mod watermark;
pub mod zoom;
