//! Drawing surface contract.
//!
//! The engine never owns pixels. Every frame it hands screen-space circles,
//! polylines and text to whatever implements [`Renderer`]: a lyon
//! tessellator for the browser, a command recorder for tests.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::Color;

/// Number of segments used when a ring has to be approximated by a polyline.
pub const RING_SEGMENTS: usize = 64;

/// Drawing primitives consumed by the frame pass.
///
/// All coordinates are screen units, after the camera transform.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer { ctx: CanvasRenderingContext2d }
///
/// impl Renderer for CanvasRenderer {
///     fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
///         // ctx.arc(...) + ctx.fill()
///     }
///     fn draw_polyline(&mut self, points: &[Vec2], color: Color) {
///         // ctx.moveTo / lineTo + ctx.stroke()
///     }
///     fn draw_text(&mut self, content: &str, at: Vec2, color: Color) {
///         // ctx.fillText(...)
///     }
/// }
/// ```
pub trait Renderer {
    /// Filled disc.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Open polyline through `points` in order.
    fn draw_polyline(&mut self, points: &[Vec2], color: Color);

    /// Text with its top-left corner at `at`.
    fn draw_text(&mut self, content: &str, at: Vec2, color: Color);

    /// Circle outline. The default closes a [`RING_SEGMENTS`]-gon through
    /// `draw_polyline`; backends with a native stroke should override it.
    fn draw_ring(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let points = ring_points(center, radius, RING_SEGMENTS);
        self.draw_polyline(&points, color);
    }
}

/// `segments + 1` points around a circle; the last repeats the first.
pub fn ring_points(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = TAU * (i % segments) as f32 / segments as f32;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<Vec<Vec2>>);

    impl Renderer for Lines {
        fn draw_circle(&mut self, _: Vec2, _: f32, _: Color) {}
        fn draw_polyline(&mut self, points: &[Vec2], _: Color) {
            self.0.push(points.to_vec());
        }
        fn draw_text(&mut self, _: &str, _: Vec2, _: Color) {}
    }

    #[test]
    fn ring_points_are_closed_and_on_circle() {
        let center = Vec2::new(10.0, -4.0);
        let points = ring_points(center, 25.0, 16);
        assert_eq!(points.len(), 17);
        assert_eq!(points.first(), points.last());
        for p in &points {
            assert!(((*p - center).length() - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn default_ring_goes_through_polyline() {
        let mut lines = Lines::default();
        lines.draw_ring(Vec2::ZERO, 5.0, Color::WHITE);
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].len(), RING_SEGMENTS + 1);
    }

    #[test]
    fn degenerate_ring_draws_nothing() {
        let mut lines = Lines::default();
        lines.draw_ring(Vec2::ZERO, 0.0, Color::WHITE);
        assert!(lines.0.is_empty());
    }
}
