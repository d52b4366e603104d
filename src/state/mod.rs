//! Selection state.
//!
//! The only mutable state in the system — which thread is being viewed —
//! is modeled as an explicit handle owned by the caller and passed into the
//! engine on every resolution. The engine itself stays stateless.

pub mod selection;

pub use selection::{find_best_thread, ThreadSelection};
