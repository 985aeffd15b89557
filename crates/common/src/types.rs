use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Identifier for a simulation entity.
///
/// Minted by the external simulation; appears on the wire as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Spatial component: position and scale, in simulation units.
///
/// Fields are kept flat to match the wire form exactly; no unit conversion
/// or range validation happens anywhere between the wire and the view-model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub sx: f64,
    pub sy: f64,
    pub sz: f64,
}

impl Body {
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn scale(&self) -> DVec3 {
        DVec3::new(self.sx, self.sy, self.sz)
    }
}

/// View-model entity reconstructed from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub body: Option<Body>,
}

impl Entity {
    /// An entity with the given id and no components yet.
    pub fn new(id: EntityId) -> Self {
        Self { id, body: None }
    }

    /// Only entities carrying a populated spatial component are drawable.
    pub fn is_drawable(&self) -> bool {
        self.body.is_some()
    }
}

/// A 2D point in page space, as produced by pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
