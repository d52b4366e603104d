//! JSON parser for crash-report event documents.
//!
//! Pure conversion from the camelCase event wire shape into validated model
//! types. The resolution engine itself never sees raw JSON; the CLI shell
//! calls [`parse_event`] and hands the resulting [`Event`] to
//! `view_state::resolve_display`.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    Event, ExceptionChain, ExceptionValue, Frame, Platform, Stacktrace, Thread, ThreadId,
};

/// Error returned for a document the parser cannot turn into an [`Event`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Document is not valid JSON or does not match the event shape.
    #[error("Malformed event document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raw JSON structure for deserializing an event document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    newest_first: Option<bool>,
    #[serde(default)]
    threads: Vec<RawThread>,
    #[serde(default)]
    exception: Option<RawException>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThread {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    current: bool,
    #[serde(default)]
    crashed: bool,
    #[serde(default)]
    stacktrace: Option<RawStacktrace>,
    #[serde(default)]
    raw_stacktrace: Option<RawStacktrace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawException {
    #[serde(default)]
    values: Vec<RawExceptionValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExceptionValue {
    #[serde(default, rename = "type")]
    exception_type: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    thread_id: Option<i64>,
    #[serde(default)]
    stacktrace: Option<RawStacktrace>,
    #[serde(default)]
    raw_stacktrace: Option<RawStacktrace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStacktrace {
    #[serde(default)]
    frames: Vec<RawFrame>,
    #[serde(default)]
    has_system_frames: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrame {
    #[serde(default)]
    function: Option<String>,
    #[serde(default)]
    raw_function: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    instruction_addr: Option<String>,
    #[serde(default)]
    in_app: bool,
}

/// Parse an event document into the model.
///
/// Optional fields absent from the document become absent in the model;
/// the parser never invents data and never panics on well-formed JSON of
/// the wrong shape (that surfaces as [`ParseError::Malformed`]).
pub fn parse_event(input: &str) -> Result<Event, ParseError> {
    let raw: RawEvent = serde_json::from_str(input)?;
    Ok(convert_event(raw))
}

fn convert_event(raw: RawEvent) -> Event {
    let mut event = Event::new(raw.threads.into_iter().map(convert_thread).collect());

    if let Some(exception) = raw.exception {
        let chain =
            ExceptionChain::new(exception.values.into_iter().map(convert_value).collect());
        event = event.with_exception(chain);
    }
    if let Some(tag) = raw.platform {
        event = event.with_platform(Platform::parse(&tag));
    }
    if let Some(newest_first) = raw.newest_first {
        event = event.with_newest_first(newest_first);
    }

    event
}

fn convert_thread(raw: RawThread) -> Thread {
    let mut thread = Thread::new(raw.id.map(ThreadId::new))
        .with_current(raw.current)
        .with_crashed(raw.crashed);

    if let Some(name) = raw.name {
        thread = thread.with_name(name);
    }
    if let Some(stacktrace) = raw.stacktrace {
        thread = thread.with_stacktrace(convert_stacktrace(stacktrace));
    }
    if let Some(stacktrace) = raw.raw_stacktrace {
        thread = thread.with_raw_stacktrace(convert_stacktrace(stacktrace));
    }

    thread
}

fn convert_value(raw: RawExceptionValue) -> ExceptionValue {
    let mut value = ExceptionValue::new(raw.thread_id.map(ThreadId::new));

    if let Some(exception_type) = raw.exception_type {
        value = value.with_exception_type(exception_type);
    }
    if let Some(message) = raw.value {
        value = value.with_value(message);
    }
    if let Some(stacktrace) = raw.stacktrace {
        value = value.with_stacktrace(convert_stacktrace(stacktrace));
    }
    if let Some(stacktrace) = raw.raw_stacktrace {
        value = value.with_raw_stacktrace(convert_stacktrace(stacktrace));
    }

    value
}

fn convert_stacktrace(raw: RawStacktrace) -> Stacktrace {
    Stacktrace::new(
        raw.frames.into_iter().map(convert_frame).collect(),
        raw.has_system_frames,
    )
}

fn convert_frame(raw: RawFrame) -> Frame {
    Frame {
        function: raw.function,
        raw_function: raw.raw_function,
        filename: raw.filename,
        instruction_addr: raw.instruction_addr,
        in_app: raw.in_app,
    }
}
