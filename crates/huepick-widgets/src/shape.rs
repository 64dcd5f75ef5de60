//! Swatch shape primitives.
//!
//! A [`SwatchShape`] knows how to paint itself filled or stroked into a
//! rect. The picker uses the same shape twice per selected swatch: filled
//! with the swatch color, then scaled up and stroked for the selection
//! ring. Hosts can supply their own implementations.

use egui::{Color32, CornerRadius, Painter, Rect, Stroke, StrokeKind};

use crate::sizing;

/// A fillable, strokeable swatch geometry.
pub trait SwatchShape: Send + Sync {
    /// Paint the shape filled with `color`, inscribed in `rect`.
    fn fill(&self, painter: &Painter, rect: Rect, color: Color32);

    /// Paint only the shape's outline, inscribed in `rect`.
    fn stroke(&self, painter: &Painter, rect: Rect, stroke: Stroke);

    /// The rect scaled by `factor` about its own center.
    fn scaled_by(&self, rect: Rect, factor: f32) -> Rect {
        Rect::from_center_size(rect.center(), rect.size() * factor)
    }
}

/// Circular swatch, inscribed in the rect (default).
#[derive(Clone, Copy, Default)]
pub struct Circle;

impl SwatchShape for Circle {
    fn fill(&self, painter: &Painter, rect: Rect, color: Color32) {
        let radius = rect.width().min(rect.height()) / 2.0;
        painter.circle_filled(rect.center(), radius, color);
    }

    fn stroke(&self, painter: &Painter, rect: Rect, stroke: Stroke) {
        let radius = rect.width().min(rect.height()) / 2.0;
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

/// Plain rectangular swatch.
#[derive(Clone, Copy, Default)]
pub struct Rectangle;

impl SwatchShape for Rectangle {
    fn fill(&self, painter: &Painter, rect: Rect, color: Color32) {
        painter.rect_filled(rect, CornerRadius::ZERO, color);
    }

    fn stroke(&self, painter: &Painter, rect: Rect, stroke: Stroke) {
        painter.rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Inside);
    }
}

/// Rounded-rectangle swatch.
#[derive(Clone, Copy)]
pub struct RoundedRect {
    /// Corner radius in points
    pub radius: u8,
}

impl RoundedRect {
    /// Create a rounded rect with the given corner radius.
    pub fn new(radius: u8) -> Self {
        Self { radius }
    }
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self {
            radius: sizing::CORNER_RADIUS,
        }
    }
}

impl SwatchShape for RoundedRect {
    fn fill(&self, painter: &Painter, rect: Rect, color: Color32) {
        painter.rect_filled(rect, CornerRadius::same(self.radius), color);
    }

    fn stroke(&self, painter: &Painter, rect: Rect, stroke: Stroke) {
        painter.rect_stroke(rect, CornerRadius::same(self.radius), stroke, StrokeKind::Inside);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_scaled_by_grows_about_center() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0));
        let scaled = Circle.scaled_by(rect, 1.3);

        assert_eq!(scaled.center(), rect.center());
        assert!((scaled.width() - 26.0).abs() < f32::EPSILON);
        assert!((scaled.height() - 26.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scaled_by_non_square() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(30.0, 15.0));
        let scaled = Rectangle.scaled_by(rect, 2.0);

        assert!((scaled.width() - 60.0).abs() < f32::EPSILON);
        assert!((scaled.height() - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rounded_rect_default_radius() {
        assert_eq!(RoundedRect::default().radius, sizing::CORNER_RADIUS);
        assert_eq!(RoundedRect::new(2).radius, 2);
    }
}
