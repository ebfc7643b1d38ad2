//! Hit testing: point → element lookup.
//!
//! Reverse-walks the element list (last painted = topmost) and checks
//! each element's axis-aligned bounding box. Boxes are derived from the
//! element fields on every call; nothing is cached between frames.

use crate::measure::TextMeasure;
use kurbo::{Point, Rect};
use slate_core::model::*;

/// Axis-aligned box approximating an element's painted extent.
pub fn bounding_box(element: &Element, measure: &dyn TextMeasure) -> Rect {
    match &element.kind {
        ElementKind::Text(t) => text_bounds(t, measure),
        ElementKind::Shape(s) => match s.geometry {
            ShapeGeometry::Circle { radius } => {
                Rect::new(s.x - radius, s.y - radius, s.x + radius, s.y + radius)
            }
            ShapeGeometry::Rectangle { width, height } => {
                Rect::from_origin_size((s.x, s.y), (width, height))
            }
        },
        ElementKind::Image(i) => Rect::from_origin_size((i.x, i.y), (i.width, i.height)),
    }
}

fn text_bounds(t: &TextElement, measure: &dyn TextMeasure) -> Rect {
    let lines = t.lines();
    let width = lines
        .iter()
        .map(|line| measure.measure(line, &t.font))
        .fold(0.0, f64::max);
    let height = lines.len() as f64 * t.font.line_height();
    let left = align_left(t.x, width, t.align);
    Rect::from_origin_size((left, t.y), (width, height))
}

/// Left edge of a run of `width` anchored at `x` with `align`.
pub fn align_left(x: f64, width: f64, align: Option<TextAlign>) -> f64 {
    match align.unwrap_or_default() {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    }
}

/// Edges are inclusive so zero-width boxes (empty text) stay hittable.
fn contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Find the topmost element at `point`.
/// Returns its index in paint order, or `None` for the background.
pub fn hit_test<'a, I>(elements: I, point: Point, measure: &dyn TextMeasure) -> Option<usize>
where
    I: IntoIterator<Item = &'a Element>,
    I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    elements
        .into_iter()
        .enumerate()
        .rev()
        .find(|(_, element)| contains(bounding_box(element, measure), point))
        .map(|(idx, _)| idx)
}

/// All elements whose bounds intersect `rect`, in paint order.
/// Used for marquee (box) selection.
pub fn hit_test_rect<'a, I>(elements: I, rect: Rect, measure: &dyn TextMeasure) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Element>,
{
    let rect = rect.abs();
    elements
        .into_iter()
        .enumerate()
        .filter(|(_, element)| {
            let b = bounding_box(element, measure);
            b.x0 <= rect.x1 && b.x1 >= rect.x0 && b.y0 <= rect.y1 && b.y1 >= rect.y0
        })
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedMetrics;
    use slate_core::Scene;

    fn metrics() -> FixedMetrics {
        FixedMetrics::default()
    }

    #[test]
    fn topmost_of_overlapping_wins() {
        let mut scene = Scene::new();
        scene.add_element(Element::shape(ShapeElement::rectangle(10.0, 10.0, 50.0, 50.0)));
        scene.add_element(Element::shape(ShapeElement::circle(30.0, 30.0, 20.0)));
        scene.add_element(Element::text(TextElement::new("C", 10.0, 10.0)));

        assert_eq!(
            hit_test(scene.elements(), Point::new(12.0, 12.0), &metrics()),
            Some(2)
        );
    }

    #[test]
    fn miss_returns_none() {
        let mut scene = Scene::new();
        scene.add_element(Element::shape(ShapeElement::rectangle(10.0, 10.0, 50.0, 50.0)));
        assert_eq!(
            hit_test(scene.elements(), Point::new(200.0, 200.0), &metrics()),
            None
        );
    }

    #[test]
    fn multiline_text_bounds() {
        let mut t = TextElement::new("ab\nabcd", 100.0, 20.0);
        t.font.size_px = 10.0;
        let m = metrics();
        let b = bounding_box(&Element::text(t.clone()), &m);
        let widest = m.measure("abcd", &t.font);
        assert!((b.width() - widest).abs() < 1e-9);
        assert!((b.height() - 24.0).abs() < 1e-9);
        assert_eq!(b.x0, 100.0);

        t.align = Some(TextAlign::Center);
        let centered = bounding_box(&Element::text(t.clone()), &m);
        assert!((centered.x0 - (100.0 - widest / 2.0)).abs() < 1e-9);

        t.align = Some(TextAlign::Right);
        let right = bounding_box(&Element::text(t), &m);
        assert!((right.x1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn circle_bounds_are_centered() {
        let b = bounding_box(
            &Element::shape(ShapeElement::circle(50.0, 50.0, 20.0)),
            &metrics(),
        );
        assert_eq!(b, Rect::new(30.0, 30.0, 70.0, 70.0));
    }

    #[test]
    fn empty_text_is_still_hittable() {
        let mut scene = Scene::new();
        scene.add_element(Element::text(TextElement::new("", 40.0, 40.0)));
        assert_eq!(
            hit_test(scene.elements(), Point::new(40.0, 45.0), &metrics()),
            Some(0)
        );
    }

    #[test]
    fn marquee_collects_intersecting() {
        let mut scene = Scene::new();
        scene.add_element(Element::shape(ShapeElement::rectangle(0.0, 0.0, 10.0, 10.0)));
        scene.add_element(Element::shape(ShapeElement::rectangle(100.0, 100.0, 10.0, 10.0)));
        scene.add_element(Element::shape(ShapeElement::circle(20.0, 20.0, 5.0)));

        let hits = hit_test_rect(
            scene.elements(),
            Rect::new(30.0, 30.0, 5.0, 5.0),
            &metrics(),
        );
        assert_eq!(hits, vec![0, 2]);
    }
}
