//! Progress bar: pure formatted output, no input.
//!
//! Rendered in place with a carriage return, so repeated updates
//! overwrite the previous frame:
//!
//! ```text
//! [====================>                             ] (42%)
//! ```
//!
//! The bar has three terminal states with distinct colors: finished
//! (green), cancelled (yellow) and aborted (red). Once closed, every
//! operation except `reset` is a no-op.

use std::io::{self, Write};

use crate::theme;

/// Default bar width in cells.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Columns used around the bar itself: delimiters, tail, percentage.
const DECORATION_WIDTH: usize = 10;

/// Progress bar configuration. All fields have usable defaults.
#[derive(Debug, Clone)]
pub struct ProgressSettings {
    /// Value at which the bar is full.
    pub maximum: f64,

    /// Interior width of the bar in cells.
    pub bar_width: usize,

    /// Character for the filled part.
    pub bar_char: char,

    /// Character at the head of the filled part.
    pub tail_char: char,

    /// Color while the bar is running.
    pub running_color: &'static str,

    /// Color of the final frame on success.
    pub done_color: &'static str,

    /// Color of the final frame on cancel.
    pub cancel_color: &'static str,

    /// Color of the final frame on abort.
    pub abort_color: &'static str,
}

impl Default for ProgressSettings {
    fn default() -> ProgressSettings {
        ProgressSettings {
            maximum: 100.0,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_char: '=',
            tail_char: '>',
            running_color: theme::fg::WHITE,
            done_color: theme::fg::GREEN,
            cancel_color: theme::fg::YELLOW,
            abort_color: theme::fg::RED,
        }
    }
}

/// In-place progress indicator writing to `out`.
pub struct ProgressBar<W: Write> {
    settings: ProgressSettings,
    out: W,
    value: f64,
    closed: bool,
}

impl ProgressBar<io::Stdout> {
    /// A bar on standard output, shrunk to fit the terminal width.
    pub fn stdout(settings: ProgressSettings) -> ProgressBar<io::Stdout> {
        let mut settings = settings;
        if let Ok((cols, _)) = crossterm::terminal::size() {
            let max_width = (cols as usize).saturating_sub(DECORATION_WIDTH);
            settings.bar_width = settings.bar_width.min(max_width).max(1);
        }
        ProgressBar::with_output(settings, io::stdout())
    }
}

impl<W: Write> ProgressBar<W> {
    /// A bar writing to an arbitrary sink. Width is taken from the
    /// settings as-is; a negative maximum is treated as zero.
    pub fn with_output(settings: ProgressSettings, out: W) -> ProgressBar<W> {
        let mut settings = settings;
        // The value range is [0, maximum]; a negative maximum would
        // invert the clamp bounds.
        settings.maximum = settings.maximum.max(0.0);
        ProgressBar { settings, out, value: 0.0, closed: false }
    }

    /// Current value, within `[0, maximum]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether a terminal state has been reached.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Advances by `step` (negative rewinds) and repaints. Reaching the
    /// maximum finishes the bar.
    pub fn advance(&mut self, step: f64) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.value = (self.value + step).clamp(0.0, self.settings.maximum);
        if self.value >= self.settings.maximum {
            return self.finish();
        }
        self.render(self.settings.running_color, None)
    }

    /// Sets the value directly, clamped into range, and repaints.
    pub fn set_value(&mut self, value: f64) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.value = value.clamp(0.0, self.settings.maximum);
        if self.value >= self.settings.maximum {
            return self.finish();
        }
        self.render(self.settings.running_color, None)
    }

    /// Closes the bar in the success color.
    pub fn finish(&mut self) -> io::Result<()> {
        self.close(self.settings.done_color, Some(theme::icon::ACCEPT))
    }

    /// Closes the bar in the cancel color.
    pub fn cancel(&mut self) -> io::Result<()> {
        self.close(self.settings.cancel_color, None)
    }

    /// Closes the bar in the abort color. Doubles as an error indicator.
    pub fn abort(&mut self) -> io::Result<()> {
        self.close(self.settings.abort_color, Some(theme::icon::DENIED))
    }

    /// Zeroes the value and reopens the bar for use after a close.
    pub fn reset(&mut self) -> io::Result<()> {
        self.closed = false;
        self.value = 0.0;
        self.render(self.settings.running_color, None)
    }

    fn close(&mut self, color: &str, icon: Option<&str>) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.render(color, icon)?;
        writeln!(self.out)
    }

    /// Repaints the bar over the previous frame.
    fn render(&mut self, color: &str, icon: Option<&str>) -> io::Result<()> {
        let s = &self.settings;
        let fraction = if s.maximum > 0.0 { self.value / s.maximum } else { 1.0 };
        let filled = (fraction * s.bar_width as f64) as usize;

        write!(self.out, "\r{}[", color)?;
        for _ in 0..filled {
            write!(self.out, "{}", s.bar_char)?;
        }
        write!(self.out, "{}", s.tail_char)?;
        for _ in 0..s.bar_width.saturating_sub(filled) {
            write!(self.out, " ")?;
        }
        write!(self.out, "]{} ({}%)", theme::RESET, (fraction * 100.0) as i64)?;
        if let Some(icon) = icon {
            write!(self.out, " {}", icon)?;
        }
        self.out.flush()
    }
}

// ============================================================================
// TESTS
// ============================================================================
