//! Selection menu: pick one row, get its index back.
//!
//! ```no_run
//! use termkit::widgets::Menu;
//!
//! let entries = vec!["Scan".to_string(), "Restore".to_string()];
//! let menu = Menu::new(&entries, "Main menu");
//! let choice = menu.run()?;
//! # Ok::<(), termkit::error::WidgetError>(())
//! ```

use std::io::{self, Write};

use crate::controller::{run_loop, Flow};
use crate::error::WidgetError;
use crate::input::{with_raw_mode, TerminalPort, Tty, KEY_ENTER};
use crate::model::SelectionModel;
use crate::theme;

/// Menu configuration. All fields have usable defaults.
#[derive(Debug, Clone)]
pub struct MenuSettings {
    /// Moving past a list boundary jumps to the opposite end.
    pub wrap: bool,

    /// Discard buffered input before the session starts.
    pub drain_pending: bool,

    /// Row the cursor starts on, clamped into range.
    pub preselected_row: usize,

    /// Optional line under the key hints, e.g. an error from a
    /// previous attempt.
    pub sub_header: Option<String>,

    /// Background color of the focused row.
    pub background: &'static str,

    /// Foreground color of the focused row.
    pub foreground: &'static str,

    /// Markers drawn left and right of the focused row.
    pub markers: [&'static str; 2],

    /// Navigate-up key.
    pub up_key: u8,

    /// Navigate-down key.
    pub down_key: u8,
}

impl Default for MenuSettings {
    fn default() -> MenuSettings {
        MenuSettings {
            wrap: true,
            drain_pending: false,
            preselected_row: 0,
            sub_header: None,
            background: theme::bg::CYAN,
            foreground: theme::fg::BLACK,
            markers: [" >", "< "],
            up_key: b'w',
            down_key: b's',
        }
    }
}

/// Interactive selection menu over a borrowed entry list.
pub struct Menu<'a> {
    entries: &'a [String],
    header: &'a str,
    pub settings: MenuSettings,
}

impl<'a> Menu<'a> {
    pub fn new(entries: &'a [String], header: &'a str) -> Menu<'a> {
        Menu { entries, header, settings: MenuSettings::default() }
    }

    /// Runs the menu on the real terminal.
    ///
    /// Enters raw mode for the duration of the session and restores the
    /// previous line discipline on every exit path. Returns the
    /// zero-based index of the confirmed row.
    pub fn run(&self) -> Result<usize, WidgetError> {
        let mut tty = Tty::stdin();
        let mut out = io::stdout();
        with_raw_mode(&mut tty, false, |port| self.run_session(port, &mut out))
    }

    /// The injectable session core: any port, any writer.
    pub fn run_session<P, W>(&self, port: &mut P, out: &mut W) -> Result<usize, WidgetError>
    where
        P: TerminalPort + ?Sized,
        W: Write,
    {
        let mut model = SelectionModel::new(
            self.entries.len(),
            self.settings.wrap,
            self.settings.preselected_row,
        )?;

        run_loop(
            port,
            &mut model,
            self.settings.drain_pending,
            |m| self.draw(m, out),
            |m, byte| self.step(m, byte),
        )?;

        Ok(model.cursor())
    }

    /// Transition table: movement keys adjust the cursor, ENTER confirms,
    /// everything else is a no-op.
    fn step(&self, model: &mut SelectionModel, byte: u8) -> Flow {
        if byte == self.settings.up_key {
            model.move_up();
        } else if byte == self.settings.down_key {
            model.move_down();
        } else if byte == KEY_ENTER {
            return Flow::Done;
        }
        Flow::Continue
    }

    /// Full-screen repaint: header, key hints, entries.
    fn draw<W: Write>(&self, model: &SelectionModel, out: &mut W) -> io::Result<()> {
        write!(out, "{}", theme::CLEAR)?;
        writeln!(out, "{}", self.header)?;
        writeln!(
            out,
            "Use {}/{} to navigate and <ENTER> to select",
            self.settings.up_key as char, self.settings.down_key as char
        )?;
        if let Some(sub) = &self.settings.sub_header {
            writeln!(out, "{}", sub)?;
        }
        writeln!(out)?;

        for (row, text) in self.entries.iter().enumerate() {
            self.draw_entry(out, text, row == model.cursor())?;
        }
        out.flush()
    }

    fn draw_entry<W: Write>(&self, out: &mut W, text: &str, focused: bool) -> io::Result<()> {
        if focused {
            let s = &self.settings;
            writeln!(
                out,
                "{}{}{}{}{}{}{}{}",
                s.background, s.foreground, s.markers[0], text, s.background, s.foreground,
                s.markers[1], theme::RESET
            )
        } else {
            writeln!(out, " {}{} ", theme::RESET, text)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedPort;

    fn entries() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    fn run(menu: &Menu<'_>, script: &[u8]) -> Result<usize, WidgetError> {
        let mut port = ScriptedPort::new(script);
        let mut out = Vec::new();
        menu.run_session(&mut port, &mut out)
    }

    #[test]
    fn down_down_enter_selects_third_row() {
        let entries = entries();
        let menu = Menu::new(&entries, "Pick one");
        assert_eq!(run(&menu, b"ss\n").unwrap(), 2);
    }

    #[test]
    fn enter_alone_confirms_the_preselected_row() {
        let entries = entries();
        let mut menu = Menu::new(&entries, "Pick one");
        menu.settings.preselected_row = 1;
        assert_eq!(run(&menu, b"\n").unwrap(), 1);
    }

    #[test]
    fn preselection_beyond_the_list_clamps() {
        let entries = entries();
        let mut menu = Menu::new(&entries, "Pick one");
        menu.settings.preselected_row = 42;
        assert_eq!(run(&menu, b"\n").unwrap(), 2);
    }

    #[test]
    fn wrap_up_from_first_row_reaches_last() {
        let entries = entries();
        let menu = Menu::new(&entries, "Pick one");
        assert_eq!(run(&menu, b"w\n").unwrap(), 2);
    }

    #[test]
    fn no_wrap_clamps_at_both_ends() {
        let entries = entries();
        let mut menu = Menu::new(&entries, "Pick one");
        menu.settings.wrap = false;
        assert_eq!(run(&menu, b"www\n").unwrap(), 0);
        assert_eq!(run(&menu, b"sssss\n").unwrap(), 2);
    }

    #[test]
    fn unrecognized_keys_do_not_move_the_cursor() {
        let entries = entries();
        let menu = Menu::new(&entries, "Pick one");
        assert_eq!(run(&menu, b"xyz\n").unwrap(), 0);
    }

    #[test]
    fn empty_entry_list_fails_before_rendering() {
        let entries: Vec<String> = Vec::new();
        let menu = Menu::new(&entries, "Pick one");
        let mut port = ScriptedPort::new(b"\n");
        let mut out = Vec::new();
        let result = menu.run_session(&mut port, &mut out);

        assert!(matches!(result, Err(WidgetError::EmptyEntries)));
        assert!(out.is_empty(), "nothing may be drawn for an empty menu");
        assert_eq!(port.remaining(), 1, "no input may be consumed");
    }

    #[test]
    fn eof_mid_session_surfaces_input_exhausted() {
        let entries = entries();
        let menu = Menu::new(&entries, "Pick one");
        assert!(matches!(run(&menu, b"s"), Err(WidgetError::InputExhausted)));
    }

    #[test]
    fn drain_swallows_stale_line_before_the_menu() {
        let entries = entries();
        let mut menu = Menu::new(&entries, "Pick one");
        menu.settings.drain_pending = true;
        // "ss" before the first newline is stale; only the second
        // newline confirms.
        assert_eq!(run(&menu, b"ss\n\n").unwrap(), 0);
    }

    #[test]
    fn rendering_highlights_the_focused_row() {
        let entries = entries();
        let menu = Menu::new(&entries, "Pick one");
        let mut port = ScriptedPort::new(b"\n");
        let mut out = Vec::new();
        menu.run_session(&mut port, &mut out).unwrap();

        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("Pick one"));
        assert!(screen.contains(&format!("{} >A", theme::fg::BLACK)));
        assert!(screen.contains(&format!("{}B ", theme::RESET)));
        assert!(screen.starts_with(theme::CLEAR));
    }

    #[test]
    fn custom_keybindings_are_honored() {
        let entries = entries();
        let mut menu = Menu::new(&entries, "Pick one");
        menu.settings.up_key = b'k';
        menu.settings.down_key = b'j';
        assert_eq!(run(&menu, b"jj\n").unwrap(), 2);
        // The old defaults are now unrecognized bytes.
        assert_eq!(run(&menu, b"ss\n").unwrap(), 0);
    }
}
