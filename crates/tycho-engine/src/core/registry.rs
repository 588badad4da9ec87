use glam::DVec2;

use crate::api::config::SimConfig;
use crate::api::error::ConfigError;
use crate::api::types::{BodyId, Role};
use crate::core::orbit::OrbitalBody;

/// Every body in the simulation, in configuration order, plus the primary
/// whose position the secondaries circle.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<OrbitalBody>,
    primary: BodyId,
}

impl BodyRegistry {
    /// Validate the configuration and build the bodies.
    ///
    /// Initial world positions (and the first trail point) are computed here
    /// so the very first frame draws bodies where they belong.
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut bodies = Vec::with_capacity(config.bodies.len());
        let mut primary = None;
        for (index, desc) in config.bodies.iter().enumerate() {
            let id = BodyId(index);
            if desc.role == Role::Primary {
                primary = Some(id);
            }
            bodies.push(OrbitalBody::new(
                id,
                desc.label.clone(),
                desc.color,
                desc.role,
                config.angular_speed(desc.motion),
                desc.phase_deg.to_radians(),
                desc.display_radius,
                desc.orbit_radius,
                config.trail_capacity,
            ));
        }
        let primary = primary.ok_or(ConfigError::MissingPrimary)?;

        let mut registry = Self { bodies, primary };
        registry.update(0.0, |_| true);
        log::info!(
            "registry: {} bodies, primary {}",
            registry.len(),
            registry.primary().label()
        );
        Ok(registry)
    }

    /// Advance every eligible body by `elapsed` simulated seconds.
    ///
    /// The primary goes first; its freshly computed position is then handed
    /// to each secondary explicitly. Ineligible bodies keep their phase,
    /// position and trail untouched.
    pub fn update(&mut self, elapsed: f64, eligible: impl Fn(&OrbitalBody) -> bool) {
        let primary = &mut self.bodies[self.primary.0];
        let reference = if eligible(&*primary) {
            primary.update(elapsed, DVec2::ZERO)
        } else {
            primary.world_position()
        };

        for body in self.bodies.iter_mut() {
            if body.role() == Role::Primary || !eligible(&*body) {
                continue;
            }
            body.update(elapsed, reference);
        }
    }

    pub fn primary_id(&self) -> BodyId {
        self.primary
    }

    pub fn primary(&self) -> &OrbitalBody {
        &self.bodies[self.primary.0]
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitalBody> {
        self.bodies.get(id.0)
    }

    /// Look a body up by its label.
    pub fn find(&self, label: &str) -> Option<&OrbitalBody> {
        self.bodies.iter().find(|b| b.label() == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter()
    }

    /// Secondary bodies in configuration order (the focus cycle).
    pub fn secondary_ids(&self) -> Vec<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.role().is_focusable())
            .map(|b| b.id())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
