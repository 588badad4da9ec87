use glam::Vec2;

use crate::api::types::Color;
use crate::core::controller::{Focus, SimulationController};
use crate::core::registry::BodyRegistry;
use crate::input::keymap::HELP_LINES;
use crate::renderer::traits::Renderer;

/// Left margin and first baseline of the overlay, in screen units.
pub const HUD_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
/// Vertical distance between overlay lines.
pub const HUD_LINE_HEIGHT: f32 = 30.0;

/// Frame statistics supplied by the host for the overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    pub fps: f64,
}

/// One-line summary: speed, pause marker, focus.
pub fn status_line(controller: &SimulationController, registry: &BodyRegistry) -> String {
    let focus = match controller.focus() {
        Focus::All => "All",
        Focus::Body(id) => registry.get(id).map_or("?", |b| b.label()),
    };
    let mut line = format!("Speed x{}", controller.timescale());
    if controller.is_paused() {
        line.push_str("  PAUSED");
    }
    line.push_str("  Focus: ");
    line.push_str(focus);
    line
}

/// Every overlay line, top to bottom.
pub fn hud_lines(
    controller: &SimulationController,
    registry: &BodyRegistry,
    info: HudInfo,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + HELP_LINES.len());
    lines.push(format!("FPS: {:.0}", info.fps));
    lines.push(status_line(controller, registry));
    lines.extend(HELP_LINES.iter().map(|s| s.to_string()));
    lines
}

/// Draw the overlay if it is switched on.
pub fn draw_hud<R: Renderer + ?Sized>(
    controller: &SimulationController,
    registry: &BodyRegistry,
    info: HudInfo,
    color: Color,
    renderer: &mut R,
) {
    if !controller.hud_visible() {
        return;
    }
    for (i, line) in hud_lines(controller, registry, info).iter().enumerate() {
        let at = HUD_ORIGIN + Vec2::new(0.0, HUD_LINE_HEIGHT * i as f32);
        renderer.draw_text(line, at, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimConfig;
    use crate::input::queue::SimEvent;
    use crate::renderer::camera::Camera;
    use crate::renderer::recorder::{CommandRecorder, DrawCommand};

    fn setup() -> (SimulationController, Camera, BodyRegistry) {
        let config = SimConfig::tychonic();
        (
            SimulationController::new(&config),
            Camera::new(Vec2::from(config.viewport), &config.camera),
            BodyRegistry::from_config(&config).unwrap(),
        )
    }

    #[test]
    fn status_reflects_controller() {
        let (mut ctl, mut cam, reg) = setup();
        assert_eq!(status_line(&ctl, &reg), "Speed x1  Focus: All");

        ctl.apply(SimEvent::SpeedDown, &mut cam, &reg);
        ctl.apply(SimEvent::TogglePause, &mut cam, &reg);
        ctl.apply(SimEvent::FocusNext, &mut cam, &reg);
        assert_eq!(status_line(&ctl, &reg), "Speed x0.5  PAUSED  Focus: Mercury");
    }

    #[test]
    fn lines_start_with_fps() {
        let (ctl, _, reg) = setup();
        let lines = hud_lines(&ctl, &reg, HudInfo { fps: 59.6 });
        assert_eq!(lines[0], "FPS: 60");
        assert_eq!(lines.len(), 2 + HELP_LINES.len());
    }

    #[test]
    fn overlay_is_stacked_and_toggleable() {
        let (mut ctl, mut cam, reg) = setup();
        let mut rec = CommandRecorder::new();
        draw_hud(&ctl, &reg, HudInfo::default(), Color::WHITE, &mut rec);
        let positions: Vec<Vec2> = rec
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(positions[0], Vec2::new(10.0, 10.0));
        assert_eq!(positions[2], Vec2::new(10.0, 70.0));

        rec.clear();
        ctl.apply(SimEvent::ToggleHud, &mut cam, &reg);
        draw_hud(&ctl, &reg, HudInfo::default(), Color::WHITE, &mut rec);
        assert!(rec.is_empty());
    }
}
