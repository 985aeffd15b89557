//! Broadcast-channel transport: unordered across senders, at-most-once,
//! unacknowledged.
//!
//! # Invariants
//! - Send is fire-and-forget; failures are never surfaced to the caller.
//!   This is the wire contract, not a gap to fix — there is no
//!   acknowledgment channel to report through.
//! - A bridge endpoint never observes its own sends.
//! - Dropping a subscription releases the channel resource.

mod broker;

pub use broker::{Broker, ChannelBridge, Subscription};

pub fn crate_info() -> &'static str {
    "woodview-channel v0.1.0"
}
