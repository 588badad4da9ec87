use serde::{Deserialize, Serialize};

/// Identifier of a body: its index in registry (configuration) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// How a body takes part in the Tychonic construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The fixed observer (Earth) at the world origin. Never moves.
    Stationary,
    /// The Sun-analog. Circles the observer and publishes the reference
    /// point that every secondary body circles within the same tick.
    Primary,
    /// A planet on an epicycle around the primary's current position.
    Secondary,
    /// A body circling the observer directly (the Moon).
    Satellite,
}

/// What a body's circle is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    None,
    Observer,
    Primary,
}

impl Role {
    pub fn parent(self) -> Parent {
        match self {
            Role::Stationary => Parent::None,
            Role::Primary | Role::Satellite => Parent::Observer,
            Role::Secondary => Parent::Primary,
        }
    }

    /// Whether the focus filter can single this body out.
    pub fn is_focusable(self) -> bool {
        self == Role::Secondary
    }
}

/// Display color. Opaque to the simulation, passed through to the renderer.
///
/// Serialized as a plain `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA components (0.0 - 1.0), fully opaque.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BACKGROUND: Self = Self::rgb(36, 36, 36);
    pub const EARTH: Self = Self::rgb(107, 147, 214);
    pub const SUN: Self = Self::rgb(252, 150, 1);
    pub const MOON: Self = Self::rgb(200, 200, 200);
    pub const MERCURY: Self = Self::rgb(169, 169, 169);
    pub const VENUS: Self = Self::rgb(80, 200, 120);
    pub const MARS: Self = Self::rgb(188, 39, 50);
    pub const JUPITER: Self = Self::rgb(205, 133, 63);
    pub const SATURN: Self = Self::rgb(210, 180, 140);
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}
