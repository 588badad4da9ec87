use std::collections::HashSet;

use serde::Serialize;
use tycho_engine::{
    action_for_key, wheel_event, Color, ConfigError, Focus, FrameClock, HudInfo, InputQueue,
    KeyAction, SimConfig, SimEvent, Simulation, TextLabel, VectorRenderer,
};

/// Snapshot of the interaction state for the host UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub running: bool,
    pub paused: bool,
    pub timescale: f64,
    /// Label of the focused body, `None` when showing all.
    pub focus: Option<String>,
    pub trails: bool,
    pub labels: bool,
    pub guides: bool,
    pub hud: bool,
    pub scale: f64,
    pub fps: f64,
    pub background: Color,
}

/// Wires the simulation to the browser frame loop.
///
/// The wasm exports keep one of these in a `thread_local!`, because
/// wasm-bindgen cannot hand a struct with borrowed state back and forth.
pub struct SimRunner {
    sim: Simulation,
    clock: FrameClock,
    input: InputQueue,
    vectors: VectorRenderer,
    /// Keys currently down, so auto-repeat does not re-fire toggles.
    held_keys: HashSet<String>,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: Simulation::new(config)?,
            clock: FrameClock::default(),
            input: InputQueue::new(),
            vectors: VectorRenderer::new(),
            held_keys: HashSet::new(),
        })
    }

    /// Build from host JSON. An empty string selects the default preset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            Self::new(SimConfig::tychonic())
        } else {
            Self::new(SimConfig::from_json(json)?)
        }
    }

    /// Run one frame. Returns `false` once the user has quit; further calls
    /// leave the last frame in place.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.sim.is_running() {
            return false;
        }
        let elapsed = self.clock.sample(dt);
        let info = HudInfo {
            fps: self.clock.fps(),
        };
        self.vectors.clear();
        self.sim.tick(elapsed, &mut self.input, &mut self.vectors, info)
    }

    pub fn key_down(&mut self, code: &str) {
        if !self.held_keys.insert(code.to_owned()) {
            return;
        }
        match action_for_key(code) {
            Some(KeyAction::Event(event)) => self.input.push(event),
            Some(KeyAction::Pan(direction)) => self.input.set_held(direction, true),
            None => log::debug!("runner: unbound key {code}"),
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.held_keys.remove(code);
        if let Some(KeyAction::Pan(direction)) = action_for_key(code) {
            self.input.set_held(direction, false);
        }
    }

    /// The page lost focus: forget every held key.
    pub fn blur(&mut self) {
        self.held_keys.clear();
        self.input.release_all();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if let Some(event) = wheel_event(delta_y) {
            self.input.push(event);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.input.push(SimEvent::Resize { width, height });
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    // ---- Accessors for the host renderer ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn labels(&self) -> &[TextLabel] {
        self.vectors.labels()
    }

    pub fn status(&self) -> Status {
        let ctl = self.sim.controller();
        let focus = match ctl.focus() {
            Focus::All => None,
            Focus::Body(id) => self.sim.registry().get(id).map(|b| b.label().to_owned()),
        };
        Status {
            running: ctl.is_running(),
            paused: ctl.is_paused(),
            timescale: ctl.timescale(),
            focus,
            trails: ctl.trails_visible(),
            labels: ctl.labels_visible(),
            guides: ctl.guides_visible(),
            hud: ctl.hud_visible(),
            scale: self.sim.camera().scale(),
            fps: self.clock.fps(),
            background: self.sim.config().background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> SimRunner {
        SimRunner::from_json("").unwrap()
    }

    #[test]
    fn empty_json_selects_default_preset() {
        let r = runner();
        assert_eq!(r.simulation().registry().len(), 8);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(SimRunner::from_json("{\"bodies\": 3}").is_err());
        assert!(SimRunner::from_json("{\"bodies\": []}").is_err());
    }

    #[test]
    fn tick_fills_vertices_and_labels() {
        let mut r = runner();
        assert!(r.tick(1.0 / 60.0));
        assert!(r.vector_vertex_count() > 0);
        assert!(r.labels().iter().any(|l| l.text == "Sun"));
    }

    #[test]
    fn key_repeat_does_not_refire_toggles() {
        let mut r = runner();
        r.key_down("Space");
        r.key_down("Space");
        r.tick(0.016);
        assert!(r.status().paused);

        r.key_up("Space");
        r.key_down("Space");
        r.tick(0.016);
        assert!(!r.status().paused);
    }

    #[test]
    fn arrows_pan_while_held() {
        let mut r = runner();
        r.key_down("ArrowLeft");
        r.tick(0.016);
        r.tick(0.016);
        r.key_up("ArrowLeft");
        r.tick(0.016);
        assert_eq!(r.simulation().camera().pan_offset().x, 10.0);
    }

    #[test]
    fn blur_releases_held_keys() {
        let mut r = runner();
        r.key_down("ArrowUp");
        r.blur();
        r.tick(0.016);
        assert_eq!(r.simulation().camera().pan_offset().y, 0.0);
    }

    #[test]
    fn wheel_and_resize_reach_the_camera() {
        let mut r = runner();
        r.wheel(-100.0);
        r.resize(1200.0, 900.0);
        r.tick(0.016);
        assert!(r.status().scale > 1.0);
        assert_eq!(r.simulation().camera().viewport().x, 1200.0);
    }

    #[test]
    fn quit_stops_ticking() {
        let mut r = runner();
        r.key_down("Escape");
        assert!(!r.tick(0.016));
        assert!(!r.is_running());
        assert!(!r.tick(0.016));
    }

    #[test]
    fn status_reports_focus_by_label() {
        let mut r = runner();
        r.key_down("KeyA");
        r.tick(0.016);
        let status = r.status();
        assert_eq!(status.focus.as_deref(), Some("Mercury"));
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"focus\":\"Mercury\""));
    }
}
