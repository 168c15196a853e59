//! Greyscale histogram viewer: decode an image, reduce it to BT.601 luma,
//! count the 256 intensity levels and show image and curve side by side.

pub mod app;
pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod settings;
pub mod ui;
