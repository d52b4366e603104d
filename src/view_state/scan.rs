//! Frame scanner: boolean predicates over frame lists.
//!
//! The capability aggregator asks the same handful of questions about many
//! frame collections (every exception value, the active thread's own
//! stacktrace). This type answers each question once, as an independent pure
//! predicate; an absent or empty frame list answers `false` to everything,
//! never an error.

use crate::model::Frame;

/// Zero-cost view over a frame list answering display predicates.
#[derive(Debug, Clone, Copy)]
pub struct FrameScan<'a> {
    frames: &'a [Frame],
}

impl<'a> FrameScan<'a> {
    /// Scan a frame list.
    pub fn new(frames: &'a [Frame]) -> Self {
        Self { frames }
    }

    /// Scan an optional frame list; `None` behaves as empty.
    pub fn over(frames: Option<&'a [Frame]>) -> Self {
        Self {
            frames: frames.unwrap_or_default(),
        }
    }

    /// Some frame carries both a raw and a display function name and they
    /// differ (case-sensitive comparison).
    pub fn has_mismatched_names(&self) -> bool {
        self.frames.iter().any(|frame| {
            match (frame.raw_function.as_deref(), frame.function.as_deref()) {
                (Some(raw), Some(display)) => raw != display,
                _ => false,
            }
        })
    }

    /// Some frame carries a filename.
    pub fn has_absolute_paths(&self) -> bool {
        self.frames.iter().any(|frame| frame.filename.is_some())
    }

    /// Some frame carries an instruction address.
    pub fn has_absolute_addresses(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.instruction_addr.is_some())
    }

    /// Some frame belongs to the application's own code.
    pub fn has_in_app_frames(&self) -> bool {
        self.frames.iter().any(|frame| frame.in_app)
    }

    /// More than one frame present.
    pub fn has_multiple_frames(&self) -> bool {
        self.frames.len() > 1
    }
}
