//! Rendering: project the entity list into drawable shapes, then hand the
//! scene to a surface.
//!
//! # Invariants
//! - Projection and surface rendering are pure; nothing here mutates the
//!   store or touches decoding.
//! - Only entities carrying a populated spatial component produce shapes.
//! - The projection is swappable without touching decode or store logic.

mod projection;
mod svg;

pub use projection::{PlanarProjection, Projection, Rect, project_scene};
pub use svg::{Surface, SvgSurface};

pub fn crate_info() -> &'static str {
    "woodview-render v0.1.0"
}
