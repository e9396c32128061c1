//! State module for tracking fetch progress
//!
//! # Components
//!
//! - `AttemptState`: the per-target retry state machine
//!   (`Attempting(n)` → `Succeeded` | `Exhausted`)

mod attempt_state;

// Re-export main types
pub use attempt_state::AttemptState;
