//! View-state layer - the pure resolution engine.
//!
//! Given an event, a selection handle, and the caller's display toggles,
//! this layer decides what to show: which data source, which stack view,
//! and which display capabilities the data supports.
//!
//! # Module Structure
//!
//! - `scan`: `FrameScan` - boolean predicates over frame lists
//! - `resolve`: exception and stacktrace resolvers, `DataSource`
//! - `stack_view`: `StackView` - resolved view mode with toggle precedence
//! - `capabilities`: `Capabilities` - aggregate display flags
//! - `display`: `resolve_display` - top-level entry point

pub mod capabilities;
pub mod display;
pub mod resolve;
pub mod scan;
pub mod stack_view;

pub use capabilities::Capabilities;
pub use display::{resolve_display, DisplayToggles, ResolvedDisplay};
pub use resolve::{thread_exception, thread_stacktrace, DataSource};
pub use scan::FrameScan;
pub use stack_view::StackView;
