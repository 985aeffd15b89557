//! Wire schema shared with the external simulation.
//!
//! Snapshots flow in (simulation -> client), commands flow out
//! (client -> simulation), both as JSON text on the broadcast channel.
//!
//! # Invariants
//! - A snapshot either decodes completely or not at all; a partial snapshot
//!   is never produced.
//! - Unknown component tags are skipped, never an error.
//! - Adding a component variant touches only the tag dispatch in
//!   `snapshot::apply_component`.

pub mod command;
pub mod snapshot;

pub use command::{Command, create_entity, decode_command, encode_command};
pub use snapshot::{Component, DecodeError, decode_snapshot, encode_snapshot};

/// Topic name of the broadcast channel, known to both sides.
pub const CHANNEL_TOPIC: &str = "woods";

pub fn crate_info() -> &'static str {
    "woodview-protocol v0.1.0"
}
