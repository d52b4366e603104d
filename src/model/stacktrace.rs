//! Stacktrace and frame types.

/// Single stack frame, reduced to the attributes the capability scanner and
/// resolvers consume.
///
/// `function` is the display name after symbolication; `raw_function` is the
/// original (possibly minified) name. A mismatch between the two is what
/// makes the "verbose function names" display option meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Display function name, after any symbol transformation.
    pub function: Option<String>,
    /// Original/minified function name.
    pub raw_function: Option<String>,
    /// Absolute file path, when the frame carries one.
    pub filename: Option<String>,
    /// Absolute instruction address (native platforms).
    pub instruction_addr: Option<String>,
    /// Whether the frame belongs to the reporting application's own code.
    pub in_app: bool,
}

/// Ordered list of frames plus processor-derived context.
///
/// `has_system_frames` is computed upstream during event processing and
/// carried verbatim; the engine only reads it to pick the default stack
/// view (app-only vs. full).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stacktrace {
    frames: Vec<Frame>,
    has_system_frames: bool,
}

impl Stacktrace {
    /// Create a stacktrace from frames and the upstream system-frames flag.
    pub fn new(frames: Vec<Frame>, has_system_frames: bool) -> Self {
        Self {
            frames,
            has_system_frames,
        }
    }

    /// Frames in stack order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Whether the upstream processor marked system frames present.
    pub fn has_system_frames(&self) -> bool {
        self.has_system_frames
    }
}
