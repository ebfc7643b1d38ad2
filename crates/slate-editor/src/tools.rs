//! Tool system for canvas interactions.
//!
//! The select tool picks and drags existing elements. The creation tools
//! drop a new element with the configured default style at the pointer.
//!
//! | Tool | Pointer down on empty space | Pointer down on an element |
//! |------|-----------------------------|----------------------------|
//! | **Select** | Clear selection | Select + start drag |
//! | **Text** | New text at pointer | New text at pointer |
//! | **Rectangle** | New rectangle, top-left at pointer | same |
//! | **Circle** | New circle, centered at pointer | same |

use slate_core::{EditorConfig, Element};

/// The active tool determines how pointer-down is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolKind {
    #[default]
    Select,
    Text,
    Rectangle,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Select,
        ToolKind::Text,
        ToolKind::Rectangle,
        ToolKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Text => "text",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
        }
    }

    /// Parse a host-side tool name (`"select"`, `"rect"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" => Some(ToolKind::Select),
            "text" => Some(ToolKind::Text),
            "rect" | "rectangle" => Some(ToolKind::Rectangle),
            "circle" | "ellipse" => Some(ToolKind::Circle),
            _ => None,
        }
    }

    pub fn creates_elements(self) -> bool {
        self != ToolKind::Select
    }

    /// The element this tool places at `(x, y)`, or `None` for the select tool.
    pub fn create(self, config: &EditorConfig, x: f64, y: f64) -> Option<Element> {
        match self {
            ToolKind::Select => None,
            ToolKind::Text => Some(Element::text(config.text.build(x, y))),
            ToolKind::Rectangle => Some(Element::shape(config.shape.rectangle(x, y))),
            ToolKind::Circle => Some(Element::shape(config.shape.circle(x, y))),
        }
    }
}
