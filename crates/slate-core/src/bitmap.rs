//! Decoded image pixels owned by image elements and backgrounds.
//!
//! Pixels live behind an `Arc` so undo snapshots of the same element
//! share one allocation. The allocation is released when the last
//! element or snapshot holding it is dropped.

use crate::error::SceneError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::sync::Arc;

/// Straight (non-premultiplied) RGBA8 pixels.
#[derive(Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Bitmap {
    /// Wrap raw RGBA8 pixels. `pixels.len()` must equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SceneError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(SceneError::Decode(format!(
                "expected {expected} bytes for a {width}x{height} bitmap, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// A bitmap filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, SceneError> {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba8(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether two bitmaps share the same pixel allocation.
    pub fn shares_pixels(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Decode state of an element's image resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BitmapSlot {
    /// No pixel data attached (e.g. an image element loaded from JSON).
    #[default]
    Empty,
    /// A decode has been requested and not yet completed.
    Pending,
    Ready(Bitmap),
    /// Decoding failed; the element is kept but never painted.
    Failed,
}

impl BitmapSlot {
    pub fn bitmap(&self) -> Option<&Bitmap> {
        match self {
            BitmapSlot::Ready(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, BitmapSlot::Ready(_))
    }
}

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into a bitmap.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, SceneError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| SceneError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Bitmap::from_rgba8(width, height, rgba.into_raw())
}

/// Extract the payload of a `data:<mime>;base64,<payload>` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, SceneError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| SceneError::DataUrl("missing `data:` scheme".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| SceneError::DataUrl("missing `,` separator".into()))?;
    if !header.ends_with(";base64") {
        return Err(SceneError::DataUrl(format!(
            "unsupported encoding in header {header:?}"
        )));
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| SceneError::DataUrl(e.to_string()))
}

/// Build a base64 data URL for `bytes`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Data URL → decoded bitmap in one step.
pub fn decode_source(url: &str) -> Result<Bitmap, SceneError> {
    decode_image(&decode_data_url(url)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_checks_length() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Bitmap::from_rgba8(2, 2, vec![0; 15]),
            Err(SceneError::Decode(_))
        ));
        assert!(Bitmap::from_rgba8(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn clones_share_pixels() {
        let a = Bitmap::solid(4, 4, [1, 2, 3, 255]).unwrap();
        let b = a.clone();
        assert!(a.shares_pixels(&b));
        assert_eq!(&a.pixels()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn data_url_roundtrip() {
        let url = encode_data_url("image/png", b"\x89PNG");
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&url).unwrap(), b"\x89PNG");
    }

    #[test]
    fn data_url_rejects_non_base64() {
        assert!(decode_data_url("data:text/plain,hello").is_err());
        assert!(decode_data_url("https://example.com/a.png").is_err());
    }

    #[test]
    fn decode_png_bytes() {
        let mut png = Vec::new();
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let bitmap = decode_image(&png).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(&bitmap.pixels()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"not an image"),
            Err(SceneError::Decode(_))
        ));
    }
}
