//! Shared error type for interactive sessions.
//!
//! One enum covers every way a widget session can fail. Navigation and
//! numeric bounds are never errors — they clamp. Everything here is a
//! genuine failure that ends the session immediately; nothing is retried.

use std::io;

/// Error surfaced by a widget session.
#[derive(Debug)]
pub enum WidgetError {
    /// Widget was started with no entries to select from.
    ///
    /// Surfaced before any rendering happens — an empty list has no
    /// valid cursor position.
    EmptyEntries,

    /// The input stream closed while a key was required.
    ///
    /// A session can only end through a recognized key, so end-of-input
    /// mid-session means the user can never finish. Terminating with
    /// this error beats spinning on repeated EOF reads.
    InputExhausted,

    /// Restoring the saved terminal line discipline failed.
    ///
    /// The terminal may still be in raw/non-echoing mode, which leaves
    /// the invoking shell unusable — this must never be swallowed.
    Restore(io::Error),

    /// Terminal read or write failed.
    Io(io::Error),
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::EmptyEntries => {
                write!(f, "widget has no entries to select from")
            }
            WidgetError::InputExhausted => {
                write!(f, "input stream closed while waiting for a key")
            }
            WidgetError::Restore(e) => {
                write!(f, "failed to restore terminal line discipline: {}", e)
            }
            WidgetError::Io(e) => write!(f, "terminal i/o failed: {}", e),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::Restore(e) | WidgetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WidgetError {
    fn from(e: io::Error) -> Self {
        WidgetError::Io(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_failure() {
        assert!(WidgetError::EmptyEntries.to_string().contains("no entries"));
        assert!(WidgetError::InputExhausted.to_string().contains("closed"));

        let restore = WidgetError::Restore(io::Error::other("tcsetattr"));
        assert!(restore.to_string().contains("restore"));
        assert!(restore.to_string().contains("tcsetattr"));
    }

    #[test]
    fn io_errors_convert_via_from() {
        let err: WidgetError = io::Error::other("broken pipe").into();
        assert!(matches!(err, WidgetError::Io(_)));
    }

    #[test]
    fn source_is_exposed_for_wrapped_io_errors() {
        use std::error::Error;
        let err = WidgetError::Io(io::Error::other("x"));
        assert!(err.source().is_some());
        assert!(WidgetError::EmptyEntries.source().is_none());
    }
}
