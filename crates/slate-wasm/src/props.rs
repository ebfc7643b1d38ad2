//! Side-panel property bridge.
//!
//! The page's form controls speak in the saved-document field names
//! (`fontSize`, `fillColor`, ...) with string values straight from
//! `<input>` elements.

use slate_core::{Color, ElementPatch, SavedElement, TextAlign};
use slate_editor::Editor;

pub fn selected_props(editor: &Editor) -> String {
    editor
        .selected_element()
        .and_then(|element| serde_json::to_string(&SavedElement::from(element)).ok())
        .unwrap_or_else(|| "{}".to_string())
}

/// Build a single-field patch from a form control's key and value.
pub fn patch_for(key: &str, value: &str) -> Result<ElementPatch, String> {
    let mut patch = ElementPatch::default();
    match key {
        "x" => patch.x = Some(number(value)?),
        "y" => patch.y = Some(number(value)?),
        "content" => patch.content = Some(value.to_string()),
        "fontFamily" => patch.font_family = Some(value.to_string()),
        "fontSize" => patch.font_size = Some(positive(value)?),
        "bold" => patch.bold = Some(flag(value)?),
        "italic" => patch.italic = Some(flag(value)?),
        "underline" => patch.underline = Some(flag(value)?),
        "color" => patch.color = Some(color(value)?),
        "textAlign" => patch.align = Some(align(value)?),
        "radius" => patch.radius = Some(positive(value)?),
        "width" => patch.width = Some(positive(value)?),
        "height" => patch.height = Some(positive(value)?),
        "fillColor" => patch.fill = Some(color(value)?),
        "strokeColor" => patch.stroke = Some(color(value)?),
        "strokeWidth" => {
            let width = number(value)?;
            if width < 0.0 {
                return Err(format!("stroke width must not be negative, got {width}"));
            }
            patch.stroke_width = Some(width);
        }
        _ => return Err(format!("unknown property `{key}`")),
    }
    Ok(patch)
}

fn number(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("`{value}` is not a number")),
    }
}

fn positive(value: &str) -> Result<f64, String> {
    let n = number(value)?;
    if n > 0.0 {
        Ok(n)
    } else {
        Err(format!("expected a positive number, got {n}"))
    }
}

fn flag(value: &str) -> Result<bool, String> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        _ => Err(format!("`{value}` is not a boolean")),
    }
}

fn color(value: &str) -> Result<Color, String> {
    Color::parse(value).map_err(|e| e.to_string())
}

fn align(value: &str) -> Result<Option<TextAlign>, String> {
    match value {
        "" => Ok(None),
        "left" => Ok(Some(TextAlign::Left)),
        "center" => Ok(Some(TextAlign::Center)),
        "right" => Ok(Some(TextAlign::Right)),
        _ => Err(format!("unknown alignment `{value}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slate_editor::ToolKind;

    #[test]
    fn numeric_fields() {
        assert_eq!(patch_for("fontSize", "24").unwrap().font_size, Some(24.0));
        assert_eq!(patch_for("x", " -5 ").unwrap().x, Some(-5.0));
        assert!(patch_for("radius", "0").is_err());
        assert!(patch_for("width", "wide").is_err());
        assert!(patch_for("strokeWidth", "-1").is_err());
        assert_eq!(patch_for("strokeWidth", "0").unwrap().stroke_width, Some(0.0));
    }

    #[test]
    fn colors_and_flags() {
        assert_eq!(
            patch_for("fillColor", "#ff0000").unwrap().fill,
            Some(Color::from_rgba8(255, 0, 0, 255))
        );
        assert!(patch_for("color", "not-a-color").is_err());
        assert_eq!(patch_for("bold", "true").unwrap().bold, Some(true));
        assert_eq!(
            patch_for("textAlign", "center").unwrap().align,
            Some(Some(TextAlign::Center))
        );
        assert_eq!(patch_for("textAlign", "").unwrap().align, Some(None));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(patch_for("cornerRadius", "4").is_err());
    }

    #[test]
    fn props_of_selection() {
        let mut editor = Editor::default();
        assert_eq!(selected_props(&editor), "{}");

        editor.set_tool(ToolKind::Rectangle);
        editor.pointer_down(10.0, 20.0);
        let value: serde_json::Value = serde_json::from_str(&selected_props(&editor)).unwrap();
        assert_eq!(value["type"], "rectangle");
        assert_eq!(value["x"], 10.0);
        assert_eq!(value["fillColor"], "#4A90E2");
    }
}
