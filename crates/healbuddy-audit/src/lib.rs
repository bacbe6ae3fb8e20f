//! healbuddy-audit
//!
//! Structured audit events for screening activity, emitted via `tracing`.

pub mod events;
