//! Commands sent from the client back into the simulation.

use serde::{Deserialize, Serialize};
use woodview_common::{Body, PagePoint};

/// Scale given to every user-created entity. A deliberate fixed default,
/// not derived from context.
pub const CREATE_SCALE: f64 = 10.0;

/// A tagged instruction requesting a state change in the simulation.
///
/// Externally tagged: `Command::CreateEntity(..)` serializes to
/// `{"CreateEntity": {"x": .., "y": .., "z": .., "sx": .., "sy": .., "sz": ..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    CreateEntity(Body),
}

/// Build a creation command from a page-space point.
///
/// Policy: `z` is always 0 and scale is always `CREATE_SCALE` on each axis,
/// regardless of input. Pure; transmission is the caller's concern.
pub fn create_entity(point: PagePoint) -> Command {
    Command::CreateEntity(Body {
        x: point.x,
        y: point.y,
        z: 0.0,
        sx: CREATE_SCALE,
        sy: CREATE_SCALE,
        sz: CREATE_SCALE,
    })
}

/// Encode a command into its wire form.
pub fn encode_command(command: &Command) -> Result<String, serde_json::Error> {
    serde_json::to_string(command)
}

/// Decode a command from its wire form (the simulation side of the channel).
pub fn decode_command(raw: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(raw)
}
