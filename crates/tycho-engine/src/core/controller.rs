use crate::api::config::{SimConfig, TimescaleConfig};
use crate::api::types::{BodyId, Role};
use crate::core::orbit::OrbitalBody;
use crate::core::registry::BodyRegistry;
use crate::input::queue::{PanState, SimEvent};
use crate::renderer::camera::Camera;

/// Which bodies take part in update and draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    All,
    /// A single secondary; primary, observer and satellites stay in.
    Body(BodyId),
}

/// The interaction state machine.
///
/// Every field changes only through [`SimulationController::apply`] or
/// [`SimulationController::pan`], one named transition per event.
#[derive(Debug, Clone)]
pub struct SimulationController {
    paused: bool,
    timescale: f64,
    timescale_range: (f64, f64),
    trails_visible: bool,
    labels_visible: bool,
    guides_visible: bool,
    hud_visible: bool,
    focus: Focus,
    running: bool,
    pan_step: f32,
}

impl SimulationController {
    pub fn new(config: &SimConfig) -> Self {
        let TimescaleConfig { initial, min, max } = config.timescale;
        Self {
            paused: false,
            timescale: initial,
            timescale_range: (min, max),
            trails_visible: true,
            labels_visible: true,
            guides_visible: false,
            hud_visible: true,
            focus: Focus::All,
            running: true,
            pan_step: config.camera.pan_step,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn timescale(&self) -> f64 {
        self.timescale
    }

    pub fn trails_visible(&self) -> bool {
        self.trails_visible
    }

    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn guides_visible(&self) -> bool {
        self.guides_visible
    }

    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one discrete event.
    pub fn apply(&mut self, event: SimEvent, camera: &mut Camera, registry: &BodyRegistry) {
        match event {
            SimEvent::TogglePause => {
                self.paused = !self.paused;
                log::debug!("controller: paused = {}", self.paused);
            }
            SimEvent::FocusNext => {
                self.focus = next_focus(self.focus, &registry.secondary_ids());
                log::debug!("controller: focus = {:?}", self.focus);
            }
            SimEvent::ToggleTrails => {
                self.trails_visible = !self.trails_visible;
                log::debug!("controller: trails = {}", self.trails_visible);
            }
            SimEvent::ToggleLabels => {
                self.labels_visible = !self.labels_visible;
                log::debug!("controller: labels = {}", self.labels_visible);
            }
            SimEvent::ToggleGuides => {
                self.guides_visible = !self.guides_visible;
                log::debug!("controller: guides = {}", self.guides_visible);
            }
            SimEvent::ToggleHud => {
                self.hud_visible = !self.hud_visible;
                log::debug!("controller: hud = {}", self.hud_visible);
            }
            SimEvent::SpeedDown => self.scale_timescale(0.5),
            SimEvent::SpeedUp => self.scale_timescale(2.0),
            SimEvent::ZoomIn => camera.zoom_in(),
            SimEvent::ZoomOut => camera.zoom_out(),
            SimEvent::ResetView => camera.reset(),
            SimEvent::Resize { width, height } => camera.resize(width, height),
            SimEvent::Quit => {
                self.running = false;
                log::info!("controller: quit requested");
            }
        }
    }

    /// Apply the held directions as a single pan for this tick.
    pub fn pan(&self, held: PanState, camera: &mut Camera) {
        if held.any() {
            camera.pan(held.vector(self.pan_step));
        }
    }

    /// Simulated seconds for `elapsed` wall seconds.
    pub fn effective_elapsed(&self, elapsed: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            elapsed * self.timescale
        }
    }

    /// Whether `body` is updated and drawn under the current focus.
    pub fn is_eligible(&self, body: &OrbitalBody) -> bool {
        match self.focus {
            Focus::All => true,
            Focus::Body(id) => body.role() != Role::Secondary || body.id() == id,
        }
    }

    fn scale_timescale(&mut self, factor: f64) {
        let (min, max) = self.timescale_range;
        let wanted = self.timescale * factor;
        self.timescale = wanted.clamp(min, max);
        if self.timescale != wanted {
            log::warn!("controller: timescale clamped to {}", self.timescale);
        } else {
            log::debug!("controller: timescale = {}", self.timescale);
        }
    }
}

/// All -> first secondary -> ... -> last secondary -> All.
fn next_focus(current: Focus, cycle: &[BodyId]) -> Focus {
    let next_index = match current {
        Focus::All => 0,
        Focus::Body(id) => match cycle.iter().position(|&c| c == id) {
            Some(i) => i + 1,
            None => cycle.len(),
        },
    };
    cycle.get(next_index).map_or(Focus::All, |&id| Focus::Body(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (SimulationController, Camera, BodyRegistry) {
        let config = SimConfig::tychonic();
        let camera = Camera::new(Vec2::from(config.viewport), &config.camera);
        let registry = BodyRegistry::from_config(&config).unwrap();
        (SimulationController::new(&config), camera, registry)
    }

    #[test]
    fn defaults() {
        let (ctl, _, _) = setup();
        assert!(!ctl.is_paused());
        assert!(ctl.is_running());
        assert!(ctl.trails_visible() && ctl.labels_visible() && ctl.hud_visible());
        assert!(!ctl.guides_visible());
        assert_eq!(ctl.focus(), Focus::All);
        assert_eq!(ctl.timescale(), 1.0);
    }

    #[test]
    fn toggles_flip_once_per_event() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::TogglePause, &mut cam, &reg);
        ctl.apply(SimEvent::ToggleTrails, &mut cam, &reg);
        ctl.apply(SimEvent::ToggleLabels, &mut cam, &reg);
        ctl.apply(SimEvent::ToggleGuides, &mut cam, &reg);
        ctl.apply(SimEvent::ToggleHud, &mut cam, &reg);
        assert!(ctl.is_paused());
        assert!(!ctl.trails_visible());
        assert!(!ctl.labels_visible());
        assert!(ctl.guides_visible());
        assert!(!ctl.hud_visible());

        ctl.apply(SimEvent::TogglePause, &mut cam, &reg);
        assert!(!ctl.is_paused());
    }

    #[test]
    fn focus_cycles_through_secondaries_and_back() {
        let (mut ctl, mut cam, reg) = setup();
        let secondaries = reg.secondary_ids();
        for &id in &secondaries {
            ctl.apply(SimEvent::FocusNext, &mut cam, &reg);
            assert_eq!(ctl.focus(), Focus::Body(id));
        }
        ctl.apply(SimEvent::FocusNext, &mut cam, &reg);
        assert_eq!(ctl.focus(), Focus::All);
    }

    #[test]
    fn next_focus_without_secondaries_stays_all() {
        assert_eq!(next_focus(Focus::All, &[]), Focus::All);
        assert_eq!(next_focus(Focus::Body(BodyId(3)), &[]), Focus::All);
    }

    #[test]
    fn eligibility_under_focus() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::FocusNext, &mut cam, &reg);
        let Focus::Body(focused) = ctl.focus() else {
            panic!("expected a focused body");
        };
        for body in reg.iter() {
            let expected = body.role() != Role::Secondary || body.id() == focused;
            assert_eq!(ctl.is_eligible(body), expected, "{}", body.label());
        }
        assert!(ctl.is_eligible(reg.find("Moon").unwrap()));
    }

    #[test]
    fn timescale_doubles_halves_and_clamps() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::SpeedUp, &mut cam, &reg);
        assert_eq!(ctl.timescale(), 2.0);
        ctl.apply(SimEvent::SpeedDown, &mut cam, &reg);
        ctl.apply(SimEvent::SpeedDown, &mut cam, &reg);
        assert_eq!(ctl.timescale(), 0.5);

        for _ in 0..20 {
            ctl.apply(SimEvent::SpeedDown, &mut cam, &reg);
        }
        assert_eq!(ctl.timescale(), 1.0 / 64.0);
        for _ in 0..40 {
            ctl.apply(SimEvent::SpeedUp, &mut cam, &reg);
        }
        assert_eq!(ctl.timescale(), 64.0);
    }

    #[test]
    fn effective_elapsed_respects_pause_and_timescale() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::SpeedUp, &mut cam, &reg);
        assert!((ctl.effective_elapsed(0.25) - 0.5).abs() < 1e-12);
        ctl.apply(SimEvent::TogglePause, &mut cam, &reg);
        assert_eq!(ctl.effective_elapsed(0.25), 0.0);
    }

    #[test]
    fn camera_events_are_delegated() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::ZoomIn, &mut cam, &reg);
        assert!(cam.scale() > 1.0);
        ctl.apply(SimEvent::ZoomOut, &mut cam, &reg);
        assert!((cam.scale() - 1.0).abs() < 1e-12);

        ctl.apply(SimEvent::ZoomIn, &mut cam, &reg);
        ctl.apply(SimEvent::ResetView, &mut cam, &reg);
        assert_eq!(cam.scale(), 1.0);

        ctl.apply(SimEvent::Resize { width: 400.0, height: 200.0 }, &mut cam, &reg);
        assert_eq!(cam.screen_center(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn pan_applies_one_combined_vector() {
        let (ctl, mut cam, _) = setup();
        let held = PanState { left: true, up: true, ..PanState::default() };
        ctl.pan(held, &mut cam);
        assert_eq!(cam.pan_offset(), Vec2::new(5.0, 5.0));

        ctl.pan(PanState::default(), &mut cam);
        assert_eq!(cam.pan_offset(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn quit_stops_running() {
        let (mut ctl, mut cam, reg) = setup();
        ctl.apply(SimEvent::Quit, &mut cam, &reg);
        assert!(!ctl.is_running());
    }
}
