pub mod camera;
pub mod recorder;
pub mod traits;

// Re-export key types for convenient access
pub use camera::Camera;
pub use recorder::{CommandRecorder, DrawCommand};
pub use traits::{ring_points, Renderer, RING_SEGMENTS};
