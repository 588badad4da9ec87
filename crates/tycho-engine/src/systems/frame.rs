//! The per-tick frame pass.
//!
//! Updating and drawing are separate steps: [`advance`] is a pure state
//! update over the registry, [`draw`] only reads state and talks to a
//! [`Renderer`].

use glam::Vec2;

use crate::api::types::{Color, Role};
use crate::core::controller::SimulationController;
use crate::core::registry::BodyRegistry;
use crate::renderer::camera::Camera;
use crate::renderer::traits::Renderer;

/// Advance every eligible body by `elapsed` wall seconds.
///
/// A paused controller makes this a no-op: no phase moves and no trail
/// point is appended.
pub fn advance(registry: &mut BodyRegistry, controller: &SimulationController, elapsed: f64) {
    if controller.is_paused() {
        return;
    }
    let effective = controller.effective_elapsed(elapsed);
    registry.update(effective, |body| controller.is_eligible(body));
}

/// Draw every eligible body in registry order.
///
/// Per body: trail, guide circle, disc, label.
pub fn draw<R: Renderer + ?Sized>(
    registry: &BodyRegistry,
    camera: &Camera,
    controller: &SimulationController,
    label_color: Color,
    renderer: &mut R,
) {
    let primary_position = registry.primary().world_position();
    let mut trail_points: Vec<Vec2> = Vec::new();

    for body in registry.iter().filter(|b| controller.is_eligible(b)) {
        let color = body.color();

        if controller.trails_visible() && body.trail().len() >= 2 {
            trail_points.clear();
            trail_points.extend(body.trail().iter().map(|&p| camera.world_to_screen(p)));
            renderer.draw_polyline(&trail_points, color);
        }

        if controller.guides_visible() && matches!(body.role(), Role::Secondary | Role::Satellite) {
            let center = camera.world_to_screen(body.orbit_center(primary_position));
            renderer.draw_ring(center, camera.screen_radius(body.orbit_radius()), color);
        }

        let screen = camera.world_to_screen(body.world_position());
        renderer.draw_circle(screen, camera.screen_radius(body.display_radius()), color);

        if controller.labels_visible() {
            renderer.draw_text(body.label(), screen, label_color);
        }
    }
}
