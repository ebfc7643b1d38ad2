//! Text measurement.
//!
//! Layout is recomputed on every render and hit test, so measurement is
//! a trait: hosts with real font metrics (a browser canvas) plug those in,
//! everything else uses the deterministic `FixedMetrics`.

use slate_core::FontSpec;

pub trait TextMeasure {
    /// Advance width of a single line of `text`, in document pixels.
    fn measure(&self, text: &str, font: &FontSpec) -> f64;
}

/// Deterministic per-character advance table, in ems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub narrow: f64,
    pub regular: f64,
    pub wide: f64,
    pub space: f64,
    /// Multiplier applied to every advance for bold text.
    pub bold_factor: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            narrow: 0.28,
            regular: 0.55,
            wide: 0.8,
            space: 0.28,
            bold_factor: 1.08,
        }
    }
}

impl FixedMetrics {
    fn advance_em(&self, c: char) -> f64 {
        match c {
            c if c.is_whitespace() => self.space,
            'i' | 'j' | 'l' | 'I' | 'f' | 't' | 'r' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => {
                self.narrow
            }
            'm' | 'w' | 'M' | 'W' | '@' => self.wide,
            c if c.is_uppercase() => (self.regular + self.wide) / 2.0,
            _ => self.regular,
        }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        let ems: f64 = text.chars().map(|c| self.advance_em(c)).sum();
        let weight = if font.bold { self.bold_factor } else { 1.0 };
        ems * font.size_px * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(FixedMetrics::default().measure("", &FontSpec::default()), 0.0);
    }

    #[test]
    fn width_scales_with_size_and_weight() {
        let metrics = FixedMetrics::default();
        let mut font = FontSpec::default();
        let base = metrics.measure("Hello", &font);
        font.size_px *= 2.0;
        assert!((metrics.measure("Hello", &font) - base * 2.0).abs() < 1e-9);
        font.bold = true;
        assert!(metrics.measure("Hello", &font) > base * 2.0);
    }

    #[test]
    fn wide_glyphs_are_wider() {
        let metrics = FixedMetrics::default();
        let font = FontSpec::default();
        assert!(metrics.measure("WWW", &font) > metrics.measure("iii", &font));
    }
}
