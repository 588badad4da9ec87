//! Circular-orbit bodies: the phase recurrence and the deferent/epicycle
//! position rule.
//!
//! Uses f64 throughout; only the camera converts to f32 screen coordinates.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::types::{BodyId, Color, Role};
use crate::core::trail::Trail;

/// Phases beyond this magnitude are folded back into [0, 2π).
/// Positions only see cos/sin of the phase, so this never moves a body.
const PHASE_FOLD_LIMIT: f64 = 1.0e6;

/// Advance a phase angle by `angular_speed * elapsed`.
pub fn advance_phase(phase: f64, angular_speed: f64, elapsed: f64) -> f64 {
    let next = phase + angular_speed * elapsed;
    if next.abs() > PHASE_FOLD_LIMIT {
        next.rem_euclid(TAU)
    } else {
        next
    }
}

/// Point at `radius` along `phase` around `center`.
pub fn circle_point(center: DVec2, radius: f64, phase: f64) -> DVec2 {
    let (sin, cos) = phase.sin_cos();
    center + DVec2::new(radius * cos, radius * sin)
}

/// One body of the Tychonic system.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    id: BodyId,
    label: String,
    color: Color,
    role: Role,
    /// Radians per simulated second.
    angular_speed: f64,
    /// Radians. Grows without bound (folded only when huge).
    phase: f64,
    display_radius: f64,
    orbit_radius: f64,
    world_position: DVec2,
    trail: Trail,
}

impl OrbitalBody {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BodyId,
        label: impl Into<String>,
        color: Color,
        role: Role,
        angular_speed: f64,
        phase: f64,
        display_radius: f64,
        orbit_radius: f64,
        trail_capacity: usize,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            color,
            role,
            angular_speed,
            phase,
            display_radius,
            orbit_radius,
            world_position: DVec2::ZERO,
            trail: Trail::new(trail_capacity),
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn display_radius(&self) -> f64 {
        self.display_radius
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn world_position(&self) -> DVec2 {
        self.world_position
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Advance the phase. Stationary bodies never turn.
    pub fn advance(&mut self, elapsed: f64) {
        if self.role != Role::Stationary {
            self.phase = advance_phase(self.phase, self.angular_speed, elapsed);
        }
    }

    /// World position for the current phase.
    ///
    /// `reference` is the primary's position published earlier in the same
    /// tick; only secondary bodies read it.
    pub fn compute_world_position(&self, reference: DVec2) -> DVec2 {
        match self.role {
            Role::Stationary => DVec2::ZERO,
            Role::Primary | Role::Satellite => {
                circle_point(DVec2::ZERO, self.orbit_radius, self.phase)
            }
            Role::Secondary => circle_point(reference, self.orbit_radius, self.phase),
        }
    }

    /// Recompute and store the world position, then record it in the trail.
    pub fn reposition(&mut self, reference: DVec2) -> DVec2 {
        self.world_position = self.compute_world_position(reference);
        if self.role != Role::Stationary {
            self.trail.push(self.world_position);
        }
        self.world_position
    }

    /// Advance then reposition: one tick's worth of work for this body.
    pub fn update(&mut self, elapsed: f64, reference: DVec2) -> DVec2 {
        self.advance(elapsed);
        self.reposition(reference)
    }

    /// Centre of the circle this body travels on.
    pub fn orbit_center(&self, primary_position: DVec2) -> DVec2 {
        match self.role {
            Role::Secondary => primary_position,
            Role::Stationary | Role::Primary | Role::Satellite => DVec2::ZERO,
        }
    }
}
