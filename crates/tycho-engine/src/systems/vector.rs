//! Lyon-based vector renderer.
//!
//! Tessellates circles, rings and polylines on the CPU into a flat
//! triangle-list vertex buffer that the host uploads as-is. Text is not
//! tessellated; it is collected as [`TextLabel`]s for an overlay canvas.
//!
//! # Usage
//!
//! ```ignore
//! let mut vectors = VectorRenderer::new();
//! vectors.clear();
//! sim.render(&mut vectors, hud);
//! upload(vectors.buffer_ptr(), vectors.vertex_count());
//! draw_labels(vectors.labels());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};
use serde::Serialize;

use crate::api::types::Color;
use crate::renderer::traits::Renderer;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(x: f32, y: f32, [r, g, b, a]: [f32; 4]) -> Self {
        Self { x, y, r, g, b, a }
    }
}

/// A piece of text for the host to draw on top of the vector layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

/// Stroke widths, in screen units.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    pub trail_width: f32,
    pub ring_width: f32,
    /// Lyon curve flattening tolerance.
    pub tolerance: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            trail_width: 1.5,
            ring_width: 1.0,
            tolerance: 0.5,
        }
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: [f32; 4],
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.color)
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: [f32; 4],
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.color)
    }
}

/// [`Renderer`] backed by lyon tessellators.
///
/// Holds the output vertex buffer and text labels.
/// Cleared each frame and populated by the frame pass.
pub struct VectorRenderer {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    labels: Vec<TextLabel>,
    style: StrokeStyle,
}

impl VectorRenderer {
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::default())
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            labels: Vec::new(),
            style,
        }
    }

    /// Clear vertices and labels. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.labels.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for the host to copy out).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// The flat float buffer, `[x, y, r, g, b, a]` per vertex.
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// The buffer viewed as vertices.
    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: [f32; 4]) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(self.style.tolerance),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: fill tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: [f32; 4]) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(self.style.tolerance).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: stroke tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VectorRenderer {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !(radius > 0.0 && center.is_finite()) {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        self.fill_path(&path, color.to_rgba_f32());
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 2 || !points.iter().all(|p| p.is_finite()) {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path
        let path = builder.build();

        self.stroke_path(&path, self.style.trail_width, color.to_rgba_f32());
    }

    fn draw_text(&mut self, content: &str, at: Vec2, color: Color) {
        self.labels.push(TextLabel {
            text: content.to_owned(),
            x: at.x,
            y: at.y,
            color,
        });
    }

    fn draw_ring(&mut self, center: Vec2, radius: f32, color: Color) {
        if !(radius > 0.0 && center.is_finite()) {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, self.style.ring_width, color.to_rgba_f32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn circle_produces_triangles_in_body_color() {
        let mut vr = VectorRenderer::new();
        vr.draw_circle(Vec2::new(50.0, 50.0), 25.0, Color::rgb(255, 0, 0));

        let count = vr.vertex_count();
        assert!(count > 0);
        assert_eq!(count % 3, 0);
        let v = vr.vertices()[0];
        assert_eq!((v.r, v.g, v.b, v.a), (1.0, 0.0, 0.0, 1.0));
        for v in vr.vertices() {
            let d = Vec2::new(v.x - 50.0, v.y - 50.0).length();
            assert!(d <= 25.5, "vertex {d} outside disc");
        }
    }

    #[test]
    fn polyline_and_ring_produce_vertices() {
        let mut vr = VectorRenderer::new();
        vr.draw_polyline(&[Vec2::ZERO, Vec2::new(100.0, 100.0)], Color::WHITE);
        let after_line = vr.vertex_count();
        assert!(after_line > 0);

        vr.draw_ring(Vec2::new(200.0, 200.0), 40.0, Color::WHITE);
        assert!(vr.vertex_count() > after_line);
    }

    #[test]
    fn degenerate_shapes_produce_nothing() {
        let mut vr = VectorRenderer::new();
        vr.draw_circle(Vec2::ZERO, 0.0, Color::WHITE);
        vr.draw_ring(Vec2::ZERO, -1.0, Color::WHITE);
        vr.draw_polyline(&[], Color::WHITE);
        vr.draw_polyline(&[Vec2::ONE], Color::WHITE);
        vr.draw_circle(Vec2::new(f32::NAN, 0.0), 5.0, Color::WHITE);
        assert_eq!(vr.vertex_count(), 0);
    }

    #[test]
    fn text_becomes_labels() {
        let mut vr = VectorRenderer::new();
        vr.draw_text("Mars", Vec2::new(3.0, 4.0), Color::MARS);
        assert_eq!(vr.vertex_count(), 0);
        assert_eq!(vr.labels().len(), 1);

        let json = serde_json::to_string(vr.labels()).unwrap();
        assert_eq!(json, r#"[{"text":"Mars","x":3.0,"y":4.0,"color":[188,39,50]}]"#);
    }

    #[test]
    fn clear_resets_buffer_and_labels() {
        let mut vr = VectorRenderer::new();
        vr.draw_circle(Vec2::ZERO, 10.0, Color::SUN);
        vr.draw_text("Sun", Vec2::ZERO, Color::WHITE);
        vr.clear();
        assert_eq!(vr.vertex_count(), 0);
        assert!(vr.labels().is_empty());
    }
}
