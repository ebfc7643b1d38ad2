pub mod display_list;
pub mod hit;
pub mod measure;
pub mod paint;
pub mod raster;
pub mod surface;

pub use display_list::{DisplayList, DrawCommand};
pub use hit::{bounding_box, hit_test, hit_test_rect};
pub use measure::{FixedMetrics, TextMeasure};
pub use paint::{RenderOptions, SELECTION_PADDING, render_scene};
pub use raster::{RasterSurface, export_png};
pub use surface::Surface;

/// Errors from raster surfaces and PNG export.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} raster surface")]
    Allocation { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
