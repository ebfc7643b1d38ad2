//! Built-in starting documents for "load template".

use crate::color::Color;
use crate::config::DocumentPreset;
use crate::model::*;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Centered name and title on white, contact line below.
    ClassicCard,
    /// Dark card with an accent bar on the left.
    ModernCard,
    /// Circle mark with a wordmark underneath.
    MinimalLogo,
}

impl Template {
    pub const ALL: [Template; 3] = [
        Template::ClassicCard,
        Template::ModernCard,
        Template::MinimalLogo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::ClassicCard => "Classic card",
            Template::ModernCard => "Modern card",
            Template::MinimalLogo => "Minimal logo",
        }
    }

    pub fn preset(self) -> DocumentPreset {
        match self {
            Template::ClassicCard | Template::ModernCard => DocumentPreset::BusinessCard,
            Template::MinimalLogo => DocumentPreset::Logo,
        }
    }

    /// Build a fresh scene for this template.
    pub fn build(self) -> Scene {
        match self {
            Template::ClassicCard => classic_card(),
            Template::ModernCard => modern_card(),
            Template::MinimalLogo => minimal_logo(),
        }
    }
}

fn text(content: &str, x: f64, y: f64, size: f64, bold: bool, color: Color) -> Element {
    let mut t = TextElement::new(content, x, y);
    t.font.size_px = size;
    t.font.bold = bold;
    t.color = color;
    Element::text(t)
}

fn centered(mut element: Element) -> Element {
    if let ElementKind::Text(t) = &mut element.kind {
        t.align = Some(TextAlign::Center);
    }
    element
}

fn classic_card() -> Scene {
    let ink = Color::from_rgba8(0x33, 0x33, 0x33, 0xFF);
    let muted = Color::from_rgba8(0x77, 0x77, 0x77, 0xFF);
    let mut scene = Scene::with_background(Color::WHITE);
    scene.add_element(centered(text("Jane Doe", 175.0, 60.0, 24.0, true, ink)));
    scene.add_element(centered(text("Product Designer", 175.0, 95.0, 14.0, false, muted)));
    scene.add_element(centered(text(
        "jane@example.com  ·  +1 555 0100",
        175.0,
        150.0,
        11.0,
        false,
        muted,
    )));
    scene
}

fn modern_card() -> Scene {
    let light = Color::from_rgba8(0xEC, 0xF0, 0xF1, 0xFF);
    let accent = Color::from_rgba8(0xE6, 0x7E, 0x22, 0xFF);
    let mut scene = Scene::with_background(Color::from_rgba8(0x2C, 0x3E, 0x50, 0xFF));
    let mut bar = ShapeElement::rectangle(0.0, 0.0, 12.0, 200.0);
    bar.fill = accent;
    bar.stroke = accent;
    scene.add_element(Element::shape(bar));
    scene.add_element(text("JOHN SMITH", 40.0, 50.0, 22.0, true, light));
    scene.add_element(text("Software Engineer", 40.0, 82.0, 13.0, false, accent));
    scene.add_element(text(
        "john@example.com\nexample.com",
        40.0,
        140.0,
        11.0,
        false,
        light,
    ));
    scene
}

fn minimal_logo() -> Scene {
    let brand = Color::from_rgba8(0x4A, 0x90, 0xE2, 0xFF);
    let ink = Color::from_rgba8(0x2C, 0x3E, 0x50, 0xFF);
    let mut scene = Scene::with_background(Color::WHITE);
    let mut mark = ShapeElement::circle(200.0, 160.0, 70.0);
    mark.fill = brand;
    mark.stroke = ink;
    mark.stroke_width = 4.0;
    scene.add_element(Element::shape(mark));
    scene.add_element(centered(text("ACME", 200.0, 260.0, 40.0, true, ink)));
    scene
}
