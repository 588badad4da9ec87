use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::error::ConfigError;
use crate::core::controller::SimulationController;
use crate::core::registry::BodyRegistry;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera;
use crate::renderer::traits::Renderer;
use crate::systems::frame;
use crate::systems::hud::{self, HudInfo};

/// A running orrery: bodies, camera and interaction state in one place.
///
/// Each host frame is input, then update, then draw:
///
/// ```ignore
/// let mut sim = Simulation::new(SimConfig::tychonic())?;
/// while sim.tick(clock.sample(dt), &mut input, &mut renderer, hud) {}
/// ```
pub struct Simulation {
    config: SimConfig,
    registry: BodyRegistry,
    camera: Camera,
    controller: SimulationController,
}

impl Simulation {
    /// Validate `config` and build every body. Refuses to start on a bad
    /// configuration.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let registry = BodyRegistry::from_config(&config)?;
        let camera = Camera::new(Vec2::from(config.viewport), &config.camera);
        let controller = SimulationController::new(&config);
        Ok(Self {
            config,
            registry,
            camera,
            controller,
        })
    }

    /// Parse a JSON configuration and build from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controller(&self) -> &SimulationController {
        &self.controller
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Apply pending discrete events in arrival order, then the held pan
    /// directions once.
    pub fn handle_input(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            self.controller.apply(event, &mut self.camera, &self.registry);
        }
        self.controller.pan(input.pan_state(), &mut self.camera);
    }

    /// Advance the bodies by `elapsed` wall seconds.
    pub fn step(&mut self, elapsed: f64) {
        frame::advance(&mut self.registry, &self.controller, elapsed);
    }

    /// Draw bodies, then the overlay.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, info: HudInfo) {
        let label_color = self.config.label_color;
        frame::draw(&self.registry, &self.camera, &self.controller, label_color, renderer);
        hud::draw_hud(&self.controller, &self.registry, info, label_color, renderer);
    }

    /// One full frame. Returns `false` once quit has been requested.
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        elapsed: f64,
        input: &mut InputQueue,
        renderer: &mut R,
        info: HudInfo,
    ) -> bool {
        self.handle_input(input);
        self.step(elapsed);
        self.render(renderer, info);
        self.is_running()
    }
}
