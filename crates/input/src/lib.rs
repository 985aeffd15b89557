//! Pointer input mapped to domain-level points and creation commands.
//!
//! # Invariants
//! - One click = one command; no debouncing, no drag gestures.
//! - The simulation consumes commands, never raw pointer events.

mod pointer;

pub use pointer::{CommandDispatcher, PointerEvent, pointer_to_page};

pub fn crate_info() -> &'static str {
    "woodview-input v0.1.0"
}
