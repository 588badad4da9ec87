pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, CameraConfig, Motion, SimConfig, TimescaleConfig};
pub use api::error::ConfigError;
pub use api::simulation::Simulation;
pub use api::types::{BodyId, Color, Parent, Role};
pub use core::controller::{Focus, SimulationController};
pub use core::orbit::{advance_phase, circle_point, OrbitalBody};
pub use core::registry::BodyRegistry;
pub use core::time::FrameClock;
pub use core::trail::Trail;
pub use input::keymap::{action_for_key, wheel_event, KeyAction};
pub use input::queue::{Direction, InputQueue, PanState, SimEvent};
pub use renderer::camera::Camera;
pub use renderer::recorder::{CommandRecorder, DrawCommand};
pub use renderer::traits::Renderer;
pub use systems::hud::HudInfo;

#[cfg(feature = "vectors")]
pub use systems::vector::{StrokeStyle, TextLabel, VectorRenderer, VectorVertex};
