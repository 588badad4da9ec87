/// Reasons a configuration is refused at startup.
///
/// Nothing past startup can fail: once a `Simulation` exists, every tick is total.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no primary body declared")]
    MissingPrimary,
    #[error("more than one primary body declared: {first} and {second}")]
    MultiplePrimaries { first: String, second: String },
    #[error("more than one stationary body declared: {first} and {second}")]
    MultipleStationary { first: String, second: String },
    #[error("duplicate body label: {0}")]
    DuplicateLabel(String),
    #[error("body {label}: {field} must be a finite value >= 0, got {value}")]
    InvalidRadius {
        label: String,
        field: &'static str,
        value: f64,
    },
    #[error("body {label}: {field} must be finite, got {value}")]
    NonFinite {
        label: String,
        field: &'static str,
        value: f64,
    },
    #[error("body {label}: orbital period must be positive, got {value} days")]
    InvalidPeriod { label: String, value: f64 },
    #[error("trail capacity must be at least 1")]
    ZeroTrailCapacity,
    #[error("invalid camera settings: {0}")]
    Camera(String),
    #[error("invalid timescale settings: {0}")]
    Timescale(String),
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f32, height: f32 },
}
