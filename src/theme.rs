//! ANSI color and attribute constants.
//!
//! Pure data — consumed by the widgets for rendering. Widgets take these
//! as opaque `&'static str` tokens in their settings, so a caller can
//! substitute any escape sequence (or an empty string to disable color).
//!
//! Color semantics used by the toolkit defaults:
//! - Cyan background + black foreground: the focused row in a list
//! - Green: success (finished progress bar, accept icon)
//! - Yellow: cancelled
//! - Red: aborted / failed

/// Resets all colors and attributes.
pub const RESET: &str = "\x1b[0m";

/// Moves the cursor home and clears the screen.
///
/// Written at the start of every render pass — the widgets repaint the
/// full screen each iteration rather than redrawing incrementally.
pub const CLEAR: &str = "\x1b[1;1H\x1b[2J";

/// Foreground colors.
pub mod fg {
    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
}

/// Background colors.
pub mod bg {
    /// No background sequence at all — keeps the terminal's own.
    pub const TRANSPARENT: &str = "";
    pub const BLACK: &str = "\x1b[40m";
    pub const RED: &str = "\x1b[41m";
    pub const GREEN: &str = "\x1b[42m";
    pub const YELLOW: &str = "\x1b[43m";
    pub const BLUE: &str = "\x1b[44m";
    pub const MAGENTA: &str = "\x1b[45m";
    pub const CYAN: &str = "\x1b[46m";
    pub const WHITE: &str = "\x1b[47m";
}

/// Text attributes.
pub mod attr {
    pub const BOLD: &str = "\x1b[1m";
    pub const UNDERLINE: &str = "\x1b[4m";
}

/// Status icons.
pub mod icon {
    /// Green check mark.
    pub const ACCEPT: &str = "\x1b[32m\u{2713}\x1b[0m";
    /// Red cross.
    pub const DENIED: &str = "\x1b[31m\u{2717}\x1b[0m";
}

// ============================================================================
// TESTS
// ============================================================================
