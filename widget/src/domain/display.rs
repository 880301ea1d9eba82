//! Display surface port and adapters.
//!
//! The widget owns one addressable display region with replace-on-write
//! semantics: the most recently completed operation's frame overwrites
//! whatever was shown before, regardless of invocation order. One logical
//! writer, so no guarding beyond the adapter's interior mutability.

use std::sync::{Mutex, PoisonError};

/// Foreground tone signalling the nature of the displayed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Regular content, shown in the default dark foreground.
    Neutral,
    /// Confirmation messages, shown in green.
    Success,
    /// Error text, shown in red.
    Failure,
}

impl Tone {
    fn ansi_prefix(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Success => "\x1b[32m",
            Self::Failure => "\x1b[31m",
        }
    }
}

/// One replaceable unit of display content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    /// Markup shown in the display region.
    pub markup: String,
    /// Foreground tone applied to the whole frame.
    pub tone: Tone,
}

impl DisplayFrame {
    /// Build a frame.
    pub fn new(markup: impl Into<String>, tone: Tone) -> Self {
        Self {
            markup: markup.into(),
            tone,
        }
    }
}

/// Port for the single addressable display region.
pub trait DisplaySurface: Send + Sync {
    /// Replace the region's content with `frame`. Last write wins; nothing
    /// accumulates.
    fn show(&self, frame: DisplayFrame);
}

/// In-memory display retaining only the latest frame.
///
/// Backs tests and any headless embedding of the widget.
#[derive(Debug, Default)]
pub struct InMemoryDisplay {
    current: Mutex<Option<DisplayFrame>>,
}

impl InMemoryDisplay {
    /// Latest frame shown, if anything has been shown yet.
    pub fn current(&self) -> Option<DisplayFrame> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplaySurface for InMemoryDisplay {
    fn show(&self, frame: DisplayFrame) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
    }
}

/// Console adapter printing each frame with an ANSI foreground colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl DisplaySurface for ConsoleDisplay {
    fn show(&self, frame: DisplayFrame) {
        let prefix = frame.tone.ansi_prefix();
        let reset = if prefix.is_empty() { "" } else { "\x1b[0m" };
        println!("{prefix}{markup}{reset}", markup = frame.markup);
    }
}
