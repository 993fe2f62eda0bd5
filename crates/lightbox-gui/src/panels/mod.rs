pub mod gallery;
pub mod menu_bar;
pub mod preview;
pub mod status;
