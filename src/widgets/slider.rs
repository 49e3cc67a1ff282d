//! Value slider: a bounded integer picked with increment/decrement keys.
//!
//! Same render/read/transition shape as the list widgets, but the state
//! is a number instead of a cursor. The bar has a fixed 50-cell
//! resolution regardless of range width; ranges narrower than 50 units
//! therefore move in steps larger than one.

use std::io::{self, Write};

use crate::controller::{run_loop, Flow};
use crate::error::WidgetError;
use crate::input::{with_raw_mode, TerminalPort, Tty, KEY_ENTER};
use crate::theme;

/// Width of the rendered bar in cells, and the number of increments a
/// full sweep of the range takes.
pub const BAR_CELLS: i64 = 50;

/// Returned by [`ValueSlider::run`] when `minimum > maximum`.
pub const INVALID_RANGE: i64 = -1;

/// Slider configuration. All fields have usable defaults.
#[derive(Debug, Clone)]
pub struct SliderSettings {
    /// Header line above the bar.
    pub message: String,

    /// Character used for filled cells.
    pub fill_char: char,

    pub minimum: i64,
    pub maximum: i64,

    /// Discard buffered input before the session starts.
    pub drain_pending: bool,

    /// Color of the empty part of the bar.
    pub background: &'static str,

    /// Color of the filled part of the bar.
    pub fill: &'static str,

    /// Color of the bar delimiters.
    pub foreground: &'static str,

    pub increment_key: u8,
    pub decrement_key: u8,
}

impl Default for SliderSettings {
    fn default() -> SliderSettings {
        SliderSettings {
            message: String::new(),
            fill_char: ' ',
            minimum: 0,
            maximum: 100,
            drain_pending: false,
            background: theme::bg::CYAN,
            fill: theme::bg::MAGENTA,
            foreground: theme::fg::BLUE,
            increment_key: b'd',
            decrement_key: b'a',
        }
    }
}

/// Step size for a range: a fixed 50-increment resolution, floored at 1.
pub fn step_size(minimum: i64, maximum: i64) -> i64 {
    ((maximum - minimum) / BAR_CELLS).max(1)
}

/// Bounded integer slider.
pub struct ValueSlider {
    pub settings: SliderSettings,
}

impl ValueSlider {
    pub fn new(settings: SliderSettings) -> ValueSlider {
        ValueSlider { settings }
    }

    /// Runs the slider on the real terminal.
    ///
    /// Returns the confirmed value, always within
    /// `[minimum, maximum]` — or the [`INVALID_RANGE`] sentinel, without
    /// rendering or reading input, when `minimum > maximum`. Range
    /// validity is deliberately not checked at construction; it is a
    /// run-time property of the settings at the moment the session
    /// starts.
    pub fn run(&self) -> Result<i64, WidgetError> {
        let mut tty = Tty::stdin();
        let mut out = io::stdout();
        with_raw_mode(&mut tty, false, |port| self.run_session(port, &mut out))
    }

    /// The injectable session core: any port, any writer.
    pub fn run_session<P, W>(&self, port: &mut P, out: &mut W) -> Result<i64, WidgetError>
    where
        P: TerminalPort + ?Sized,
        W: Write,
    {
        let s = &self.settings;
        if s.minimum > s.maximum {
            return Ok(INVALID_RANGE);
        }

        let mut value = s.minimum;
        run_loop(
            port,
            &mut value,
            s.drain_pending,
            |v| self.draw(*v, out),
            |v, byte| self.step(v, byte),
        )?;
        Ok(value)
    }

    /// Transition table: adjust by one step clamped into range, ENTER
    /// confirms.
    fn step(&self, value: &mut i64, byte: u8) -> Flow {
        let s = &self.settings;
        let step = step_size(s.minimum, s.maximum);
        if byte == s.decrement_key {
            *value = (*value - step).max(s.minimum);
        } else if byte == s.increment_key {
            *value = (*value + step).min(s.maximum);
        } else if byte == KEY_ENTER {
            return Flow::Done;
        }
        Flow::Continue
    }

    /// Full-screen repaint: message, key hints, the bar with its range
    /// and current value.
    fn draw<W: Write>(&self, value: i64, out: &mut W) -> io::Result<()> {
        let s = &self.settings;
        let step = step_size(s.minimum, s.maximum);
        let filled = (value - s.minimum) / step;

        write!(out, "{}", theme::CLEAR)?;
        writeln!(out, "{}", s.message)?;
        writeln!(
            out,
            "Use {}/{} to change the value and <ENTER> to select",
            s.decrement_key as char, s.increment_key as char
        )?;
        writeln!(out)?;

        write!(out, "({})[{}", s.minimum, s.foreground)?;
        for cell in 0..BAR_CELLS {
            if cell < filled {
                write!(out, "{}{}", s.fill, s.fill_char)?;
            } else {
                write!(out, "{} ", s.background)?;
            }
        }
        write!(out, "{}]({}/{})", theme::RESET, value, s.maximum)?;
        out.flush()
    }
}

// ============================================================================
// TESTS
// ============================================================================
