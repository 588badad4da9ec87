//! Startup configuration: the body set plus camera, timescale and trail settings.
//!
//! Loaded from JSON (or built from one of the presets) once, validated, and
//! never changed while the simulation runs.
//!
//! ```json
//! {
//!   "trail_capacity": 300,
//!   "bodies": [
//!     { "label": "Earth", "color": [107, 147, 214], "role": "stationary", "display_radius": 15 },
//!     { "label": "Sun", "color": [252, 150, 1], "role": "primary",
//!       "motion": { "rad_per_sec": 0.5 }, "display_radius": 20, "orbit_radius": 500 },
//!     { "label": "Venus", "color": [80, 200, 120], "role": "secondary",
//!       "motion": { "period_days": 224.7 }, "phase_deg": 45, "display_radius": 7, "orbit_radius": 150 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::types::{Color, Role};

/// How fast a body turns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Angular speed in radians per simulated second. Sign sets direction.
    RadPerSec(f64),
    /// Sidereal period in days, mapped onto simulated seconds through the
    /// reference period so that period ratios are preserved.
    PeriodDays(f64),
}

impl Default for Motion {
    fn default() -> Self {
        Motion::RadPerSec(0.0)
    }
}

/// One body as declared at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub label: String,
    pub color: Color,
    pub role: Role,
    #[serde(default)]
    pub motion: Motion,
    /// Initial phase in degrees.
    #[serde(default)]
    pub phase_deg: f64,
    /// Drawn radius in world units (scaled by zoom at draw time only).
    pub display_radius: f64,
    /// Distance from the body's reference point, in world units.
    #[serde(default)]
    pub orbit_radius: f64,
}

impl BodyConfig {
    pub fn new(label: &str, color: Color, role: Role) -> Self {
        Self {
            label: label.to_string(),
            color,
            role,
            motion: Motion::default(),
            phase_deg: 0.0,
            display_radius: 0.0,
            orbit_radius: 0.0,
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_phase_deg(mut self, phase_deg: f64) -> Self {
        self.phase_deg = phase_deg;
        self
    }

    pub fn with_display_radius(mut self, radius: f64) -> Self {
        self.display_radius = radius;
        self
    }

    pub fn with_orbit_radius(mut self, radius: f64) -> Self {
        self.orbit_radius = radius;
        self
    }
}

/// Zoom and pan behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Multiplicative step per zoom event. Zoom out uses the reciprocal.
    pub zoom_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Screen units moved per tick while a pan direction is held.
    pub pan_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            min_scale: 0.05,
            max_scale: 40.0,
            pan_step: 5.0,
        }
    }
}

/// Simulation speed multiplier and its clamp range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimescaleConfig {
    pub initial: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for TimescaleConfig {
    fn default() -> Self {
        Self {
            initial: 1.0,
            min: 1.0 / 64.0,
            max: 64.0,
        }
    }
}

/// Complete startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Screen size in screen units; the world origin maps to its centre.
    #[serde(default = "default_viewport")]
    pub viewport: [f32; 2],
    /// Maximum number of points kept in each body's trail.
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub timescale: TimescaleConfig,
    /// Simulated seconds for one revolution of a body whose period equals
    /// `reference_period_days`.
    #[serde(default = "default_reference_period_secs")]
    pub reference_period_secs: f64,
    #[serde(default = "default_reference_period_days")]
    pub reference_period_days: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_background")]
    pub background: Color,
    pub bodies: Vec<BodyConfig>,
}

fn default_viewport() -> [f32; 2] {
    [800.0, 800.0]
}

fn default_trail_capacity() -> usize {
    300
}

fn default_reference_period_secs() -> f64 {
    5.0
}

fn default_reference_period_days() -> f64 {
    365.25
}

fn default_label_color() -> Color {
    Color::WHITE
}

fn default_background() -> Color {
    Color::BACKGROUND
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::tychonic()
    }
}

impl SimConfig {
    /// Parse a configuration from a JSON string. Validation is separate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    fn with_bodies(bodies: Vec<BodyConfig>) -> Self {
        Self {
            viewport: default_viewport(),
            trail_capacity: default_trail_capacity(),
            camera: CameraConfig::default(),
            timescale: TimescaleConfig::default(),
            reference_period_secs: default_reference_period_secs(),
            reference_period_days: default_reference_period_days(),
            label_color: default_label_color(),
            background: default_background(),
            bodies,
        }
    }

    /// Earth, Sun, Moon and the five naked-eye planets, with hand-tuned
    /// speeds that keep every epicycle visibly moving.
    pub fn tychonic() -> Self {
        use Role::*;
        let body = |label: &str,
                    color: Color,
                    role: Role,
                    speed: f64,
                    phase_deg: f64,
                    display_radius: f64,
                    orbit_radius: f64| {
            BodyConfig::new(label, color, role)
                .with_motion(Motion::RadPerSec(speed))
                .with_phase_deg(phase_deg)
                .with_display_radius(display_radius)
                .with_orbit_radius(orbit_radius)
        };
        Self::with_bodies(vec![
            body("Earth", Color::EARTH, Stationary, 0.0, 0.0, 15.0, 0.0),
            body("Sun", Color::SUN, Primary, 0.5, 0.0, 20.0, 500.0),
            body("Moon", Color::MOON, Satellite, 2.0, 0.0, 6.0, 60.0),
            body("Mercury", Color::MERCURY, Secondary, 3.0, 0.0, 5.0, 100.0),
            body("Venus", Color::VENUS, Secondary, 2.5, 45.0, 7.0, 150.0),
            body("Mars", Color::MARS, Secondary, 1.8, 90.0, 6.0, 200.0),
            body("Jupiter", Color::JUPITER, Secondary, 1.2, 135.0, 12.0, 275.0),
            body("Saturn", Color::SATURN, Secondary, 0.8, 180.0, 10.0, 325.0),
        ])
    }

    /// Earth, Sun, Venus and Mars turning at their true sidereal-period
    /// ratios, one solar year every five seconds, with long trails that
    /// trace the full retrograde loops.
    pub fn true_periods() -> Self {
        const AU: f64 = 200.0;
        let mut config = Self::with_bodies(vec![
            BodyConfig::new("Earth", Color::EARTH, Role::Stationary).with_display_radius(15.0),
            BodyConfig::new("Sun", Color::SUN, Role::Primary)
                .with_motion(Motion::PeriodDays(365.25))
                .with_display_radius(20.0)
                .with_orbit_radius(AU),
            BodyConfig::new("Venus", Color::VENUS, Role::Secondary)
                .with_motion(Motion::PeriodDays(224.70))
                .with_phase_deg(45.0)
                .with_display_radius(8.0)
                .with_orbit_radius((0.723 * AU).floor()),
            BodyConfig::new("Mars", Color::rgb(255, 0, 0), Role::Secondary)
                .with_motion(Motion::PeriodDays(686.98))
                .with_phase_deg(90.0)
                .with_display_radius(6.0)
                .with_orbit_radius((1.524 * AU).floor()),
        ]);
        config.trail_capacity = 3600;
        config
    }

    /// Angular speed in radians per simulated second for a declared motion.
    pub fn angular_speed(&self, motion: Motion) -> f64 {
        match motion {
            Motion::RadPerSec(w) => w,
            Motion::PeriodDays(days) => {
                TAU / self.reference_period_secs * (self.reference_period_days / days)
            }
        }
    }

    /// Check every startup invariant. The first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.viewport;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::Viewport { width, height });
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        self.validate_camera()?;
        self.validate_timescale()?;
        if !(self.reference_period_secs > 0.0 && self.reference_period_days > 0.0) {
            return Err(ConfigError::Timescale(
                "reference periods must be positive".to_string(),
            ));
        }

        let mut labels = HashSet::new();
        let mut primary: Option<&str> = None;
        let mut stationary: Option<&str> = None;
        for body in &self.bodies {
            if !labels.insert(body.label.as_str()) {
                return Err(ConfigError::DuplicateLabel(body.label.clone()));
            }
            validate_body(body)?;
            match body.role {
                Role::Primary => {
                    if let Some(first) = primary {
                        return Err(ConfigError::MultiplePrimaries {
                            first: first.to_string(),
                            second: body.label.clone(),
                        });
                    }
                    primary = Some(&body.label);
                }
                Role::Stationary => {
                    if let Some(first) = stationary {
                        return Err(ConfigError::MultipleStationary {
                            first: first.to_string(),
                            second: body.label.clone(),
                        });
                    }
                    stationary = Some(&body.label);
                }
                Role::Secondary | Role::Satellite => {}
            }
        }

        // Secondaries have no valid parent without a primary.
        if primary.is_none() {
            return Err(ConfigError::MissingPrimary);
        }
        Ok(())
    }

    fn validate_camera(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.zoom_step > 1.0 && cam.zoom_step.is_finite()) {
            return Err(ConfigError::Camera(format!(
                "zoom step must be > 1, got {}",
                cam.zoom_step
            )));
        }
        if !(cam.min_scale > 0.0 && cam.min_scale <= 1.0 && cam.max_scale >= 1.0 && cam.max_scale.is_finite()) {
            return Err(ConfigError::Camera(format!(
                "scale bounds must satisfy 0 < min <= 1 <= max, got [{}, {}]",
                cam.min_scale, cam.max_scale
            )));
        }
        if !(cam.pan_step > 0.0 && cam.pan_step.is_finite()) {
            return Err(ConfigError::Camera(format!(
                "pan step must be positive, got {}",
                cam.pan_step
            )));
        }
        Ok(())
    }

    fn validate_timescale(&self) -> Result<(), ConfigError> {
        let ts = &self.timescale;
        if !(ts.min > 0.0 && ts.min <= ts.initial && ts.initial <= ts.max && ts.max.is_finite()) {
            return Err(ConfigError::Timescale(format!(
                "expected 0 < min <= initial <= max, got min={} initial={} max={}",
                ts.min, ts.initial, ts.max
            )));
        }
        Ok(())
    }
}

fn validate_body(body: &BodyConfig) -> Result<(), ConfigError> {
    for (field, value) in [
        ("display_radius", body.display_radius),
        ("orbit_radius", body.orbit_radius),
    ] {
        if !(value >= 0.0 && value.is_finite()) {
            return Err(ConfigError::InvalidRadius {
                label: body.label.clone(),
                field,
                value,
            });
        }
    }
    if !body.phase_deg.is_finite() {
        return Err(ConfigError::NonFinite {
            label: body.label.clone(),
            field: "phase_deg",
            value: body.phase_deg,
        });
    }
    match body.motion {
        Motion::RadPerSec(w) if !w.is_finite() => Err(ConfigError::NonFinite {
            label: body.label.clone(),
            field: "rad_per_sec",
            value: w,
        }),
        Motion::PeriodDays(days) if !(days > 0.0 && days.is_finite()) => {
            Err(ConfigError::InvalidPeriod {
                label: body.label.clone(),
                value: days,
            })
        }
        _ => Ok(()),
    }
}
