//! Radio buttons: single-select checkboxes over caller-owned entries.
//!
//! The widget has no return value of its own — it mutates the
//! `selected` flags of the borrowed entries in place and guarantees
//! that at most one of them is true when the session ends. ENTER checks
//! the focused row (and unchecks every other row); the quit key ends
//! the session.

use std::io::{self, Write};

use crate::controller::{run_loop, Flow};
use crate::error::WidgetError;
use crate::input::{with_raw_mode, TerminalPort, Tty, KEY_ENTER};
use crate::model::{Entry, SelectionModel};
use crate::theme;

/// Radio-button configuration. All fields have usable defaults.
#[derive(Debug, Clone)]
pub struct RadioSettings {
    /// Moving past a list boundary jumps to the opposite end.
    pub wrap: bool,

    /// Discard buffered input before the session starts.
    pub drain_pending: bool,

    /// Row the cursor starts on, clamped into range.
    pub preselected_row: usize,

    /// Optional line under the key hints.
    pub sub_header: Option<String>,

    /// Background color of the focused row's checkbox.
    pub background: &'static str,

    /// Foreground color of the focused row's checkbox.
    pub foreground: &'static str,

    /// Navigate-up key.
    pub up_key: u8,

    /// Navigate-down key.
    pub down_key: u8,

    /// Key that ends the session.
    pub quit_key: u8,
}

impl Default for RadioSettings {
    fn default() -> RadioSettings {
        RadioSettings {
            wrap: true,
            drain_pending: false,
            preselected_row: 0,
            sub_header: None,
            background: theme::bg::CYAN,
            foreground: theme::fg::BLACK,
            up_key: b'w',
            down_key: b's',
            quit_key: b'q',
        }
    }
}

/// Session state: cursor plus the borrowed entries being mutated.
struct RadioState<'a> {
    model: SelectionModel,
    entries: &'a mut [Entry],
}

/// Single-select radio-button list over borrowed entries.
pub struct RadioButton<'a> {
    entries: &'a mut [Entry],
    header: &'a str,
    pub settings: RadioSettings,
}

impl<'a> RadioButton<'a> {
    pub fn new(entries: &'a mut [Entry], header: &'a str) -> RadioButton<'a> {
        RadioButton { entries, header, settings: RadioSettings::default() }
    }

    /// Runs the widget on the real terminal.
    ///
    /// The result is the mutated `selected` flags on the entries the
    /// caller handed in.
    pub fn run(&mut self) -> Result<(), WidgetError> {
        let mut tty = Tty::stdin();
        let mut out = io::stdout();
        with_raw_mode(&mut tty, false, |port| self.run_session(port, &mut out))
    }

    /// The injectable session core: any port, any writer.
    pub fn run_session<P, W>(&mut self, port: &mut P, out: &mut W) -> Result<(), WidgetError>
    where
        P: TerminalPort + ?Sized,
        W: Write,
    {
        let settings = &self.settings;
        let header = self.header;
        let model = SelectionModel::new(
            self.entries.len(),
            settings.wrap,
            settings.preselected_row,
        )?;
        let mut state = RadioState { model, entries: &mut *self.entries };

        run_loop(
            port,
            &mut state,
            settings.drain_pending,
            |s| draw(settings, header, s, out),
            |s, byte| step(settings, s, byte),
        )
    }
}

/// Transition table: movement, check-on-confirm, quit.
fn step(settings: &RadioSettings, state: &mut RadioState<'_>, byte: u8) -> Flow {
    if byte == settings.up_key {
        state.model.move_up();
    } else if byte == settings.down_key {
        state.model.move_down();
    } else if byte == KEY_ENTER {
        check(state.entries, state.model.cursor());
    } else if byte == settings.quit_key {
        return Flow::Done;
    }
    Flow::Continue
}

/// Checks exactly one entry. Holds the single-select invariant for any
/// input sequence, including repeated confirms on the same row.
fn check(entries: &mut [Entry], index: usize) {
    for entry in entries.iter_mut() {
        entry.selected = false;
    }
    entries[index].selected = true;
}

/// Full-screen repaint: header, key hints, checkbox rows.
fn draw<W: Write>(
    settings: &RadioSettings,
    header: &str,
    state: &RadioState<'_>,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", theme::CLEAR)?;
    writeln!(out, "{}", header)?;
    writeln!(
        out,
        "Use {}/{} to navigate, <ENTER> to check/uncheck and {} to return",
        settings.up_key as char, settings.down_key as char, settings.quit_key as char
    )?;
    if let Some(sub) = &settings.sub_header {
        writeln!(out, "{}", sub)?;
    }
    writeln!(out)?;

    for (row, entry) in state.entries.iter().enumerate() {
        let mark = if entry.selected { "\u{2022}" } else { " " };
        if row == state.model.cursor() {
            writeln!(
                out,
                "{}{}[{}]{}{}",
                settings.background, settings.foreground, mark, entry.text, theme::RESET
            )?;
        } else {
            writeln!(out, "[{}]{}{}", mark, entry.text, theme::RESET)?;
        }
    }
    out.flush()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedPort;

    fn entries(labels: &[&str]) -> Vec<Entry> {
        labels.iter().map(|label| Entry::new(*label)).collect()
    }

    fn run(entries: &mut [Entry], script: &[u8]) -> Result<(), WidgetError> {
        let mut widget = RadioButton::new(entries, "Choose");
        let mut port = ScriptedPort::new(script);
        let mut out = Vec::new();
        widget.run_session(&mut port, &mut out)
    }

    fn selected_flags(entries: &[Entry]) -> Vec<bool> {
        entries.iter().map(|e| e.selected).collect()
    }

    #[test]
    fn down_confirm_quit_selects_second_entry() {
        let mut entries = entries(&["X", "Y"]);
        run(&mut entries, b"s\nq").unwrap();
        assert_eq!(selected_flags(&entries), vec![false, true]);
    }

    #[test]
    fn quit_without_confirm_leaves_nothing_selected() {
        let mut entries = entries(&["X", "Y"]);
        run(&mut entries, b"q").unwrap();
        assert_eq!(selected_flags(&entries), vec![false, false]);
    }

    #[test]
    fn reselecting_moves_the_single_mark() {
        let mut entries = entries(&["A", "B", "C"]);
        // Check A, move down twice, check C.
        run(&mut entries, b"\nss\nq").unwrap();
        assert_eq!(selected_flags(&entries), vec![false, false, true]);
    }

    #[test]
    fn exactly_one_selected_after_any_confirm_sequence() {
        let mut entries = entries(&["A", "B", "C", "D"]);
        // Repeated confirms, wrap-around movement, confirms on the
        // same row — at most one flag may ever survive.
        run(&mut entries, b"\n\nw\nsss\n\nq").unwrap();
        let count = entries.iter().filter(|e| e.selected).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn confirm_does_not_end_the_session() {
        let mut entries = entries(&["A", "B"]);
        // ENTER then EOF: the loop must still be waiting for a key.
        let result = run(&mut entries, b"\n");
        assert!(matches!(result, Err(WidgetError::InputExhausted)));
        // The confirm before EOF still took effect.
        assert_eq!(selected_flags(&entries), vec![true, false]);
    }

    #[test]
    fn empty_entry_list_fails_fast() {
        let mut entries: Vec<Entry> = Vec::new();
        let result = run(&mut entries, b"q");
        assert!(matches!(result, Err(WidgetError::EmptyEntries)));
    }

    #[test]
    fn preselected_row_starts_the_cursor_there() {
        let mut entries = entries(&["A", "B", "C"]);
        let mut widget = RadioButton::new(&mut entries, "Choose");
        widget.settings.preselected_row = 2;
        let mut port = ScriptedPort::new(b"\nq");
        let mut out = Vec::new();
        widget.run_session(&mut port, &mut out).unwrap();
        assert_eq!(selected_flags(&entries), vec![false, false, true]);
    }

    #[test]
    fn rendering_shows_checked_and_unchecked_boxes() {
        let mut entries = entries(&["A", "B"]);
        entries[1].selected = true;
        let mut widget = RadioButton::new(&mut entries, "Choose");
        let mut port = ScriptedPort::new(b"q");
        let mut out = Vec::new();
        widget.run_session(&mut port, &mut out).unwrap();

        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("[\u{2022}]B"));
        assert!(screen.contains("Choose"));
    }

    #[test]
    fn focused_row_is_highlighted_through_its_text() {
        let mut entries = entries(&["A", "B"]);
        let mut widget = RadioButton::new(&mut entries, "Choose");
        let mut port = ScriptedPort::new(b"q");
        let mut out = Vec::new();
        widget.run_session(&mut port, &mut out).unwrap();

        // The reset comes after the entry text, so the colors cover
        // the whole row, not just the checkbox.
        let screen = String::from_utf8(out).unwrap();
        let focused = format!(
            "{}{}[ ]A{}",
            theme::bg::CYAN,
            theme::fg::BLACK,
            theme::RESET
        );
        assert!(screen.contains(&focused));
    }
}
