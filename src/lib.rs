//! Crashlens
//!
//! Resolution engine for crash-report events: selects the thread to present
//! by default, resolves which data source (exception chain vs. raw
//! stacktrace) and which stack view (app-only, full, raw) to render, and
//! computes the display capabilities the event's frames support.
//!
//! The crate follows a Pure Core / Impure Shell architecture: everything in
//! `model`, `state`, and `view_state` is a pure, synchronous computation over
//! already-parsed data; file reading, configuration, and logging live in the
//! shell modules and the binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod view_state;
