//! healbuddy-session
//!
//! The screening conversation state machine. Stateless per call: the chat
//! client supplies the full session state on every turn, so any worker can
//! serve any turn. The safety interrupt runs before all other logic, and
//! the language-model collaborator can only ever touch phrasing.

pub mod augment;
pub mod controller;
pub mod safety;
