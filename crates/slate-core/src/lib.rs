pub mod bitmap;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod id;
pub mod journal;
pub mod model;
pub mod scene;
pub mod templates;

pub use bitmap::{
    Bitmap, BitmapSlot, decode_data_url, decode_image, decode_source, encode_data_url,
};
pub use color::Color;
pub use config::{DocumentPreset, DocumentSize, EditorConfig};
pub use document::{SavedElement, SavedScene, load_json, save_json};
pub use error::SceneError;
pub use id::{ElementId, SceneGeneration};
pub use journal::{DEFAULT_HISTORY_CAP, Journal};
pub use model::*;
pub use scene::{Background, BackgroundImage, Scene, ZDirection};
pub use templates::Template;

// Re-export kurbo geometry so downstream crates share one set of types
pub use kurbo::{Point, Rect, Vec2};
