use glam::{DVec2, Vec2};

use crate::api::config::CameraConfig;

/// Viewport transform from world coordinates to screen coordinates.
///
/// `screen = screen_center + (world - reference) * scale + pan_offset`
///
/// Zoom is multiplicative and clamped, so `scale` can never reach zero.
/// Stored body radii are never touched; they are scaled here at draw time.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Multiplicative zoom factor (1.0 = one world unit per screen unit).
    scale: f64,
    /// Accumulated pan in screen units.
    pan_offset: Vec2,
    /// World point drawn at the (unpanned) screen centre.
    reference: DVec2,
    /// Screen size in screen units.
    viewport: Vec2,
    zoom_step: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Camera {
    pub fn new(viewport: Vec2, config: &CameraConfig) -> Self {
        Self {
            scale: 1.0,
            pan_offset: Vec2::ZERO,
            reference: DVec2::ZERO,
            viewport,
            zoom_step: config.zoom_step,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn screen_center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    /// Map a world point onto the screen.
    pub fn world_to_screen(&self, world: DVec2) -> Vec2 {
        let scaled = ((world - self.reference) * self.scale).as_vec2();
        self.screen_center() + scaled + self.pan_offset
    }

    /// On-screen size of a world-space length.
    pub fn screen_radius(&self, world_radius: f64) -> f32 {
        (world_radius * self.scale) as f32
    }

    /// Multiply the scale by `factor`, clamped to the configured range.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            log::warn!("camera: ignoring zoom factor {factor}");
            return;
        }
        self.scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
    }

    pub fn zoom_in(&mut self) {
        self.zoom(self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(1.0 / self.zoom_step);
    }

    /// Shift the view by a screen-space delta, independent of zoom.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        } else {
            log::warn!("camera: ignoring viewport {width}x{height}");
        }
    }

    /// Back to unit scale with no pan.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_offset = Vec2::ZERO;
    }
}
