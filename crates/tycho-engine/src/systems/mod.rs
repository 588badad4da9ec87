pub mod frame;
pub mod hud;
#[cfg(feature = "vectors")]
pub mod vector;
