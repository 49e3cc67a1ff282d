//! Masked line input.
//!
//! Reads bytes directly through the raw input layer with echo disabled
//! and prints one mask glyph per typed character. Backspace removes the
//! last buffered character and erases its glyph. Not built on the
//! selection loop — there is no cursor to drive, just a buffer.

use std::io::{self, Write};

use crate::error::WidgetError;
use crate::input::{with_raw_mode, TerminalPort, Tty, KEY_BACKSPACE, KEY_ENTER};

/// Backspace, overwrite with a space, backspace again: erases the glyph
/// under the cursor instead of just stepping over it.
const ERASE_GLYPH: &str = "\u{8} \u{8}";

/// Password prompt configuration.
#[derive(Debug, Clone)]
pub struct PasswordSettings {
    /// Text printed before input starts.
    pub prompt: String,

    /// Glyph echoed per typed character.
    pub mask: char,
}

impl Default for PasswordSettings {
    fn default() -> PasswordSettings {
        PasswordSettings {
            prompt: "Enter your password: ".to_string(),
            mask: '*',
        }
    }
}

/// Masked password input.
pub struct PasswordInput {
    pub settings: PasswordSettings,
}

impl PasswordInput {
    pub fn new() -> PasswordInput {
        PasswordInput { settings: PasswordSettings::default() }
    }

    /// Reads a password from the real terminal with echo disabled.
    pub fn run(&self) -> Result<String, WidgetError> {
        let mut tty = Tty::stdin();
        let mut out = io::stdout();
        with_raw_mode(&mut tty, false, |port| self.run_session(port, &mut out))
    }

    /// The injectable session core: any port, any writer.
    pub fn run_session<P, W>(&self, port: &mut P, out: &mut W) -> Result<String, WidgetError>
    where
        P: TerminalPort + ?Sized,
        W: Write,
    {
        write!(out, "{}", self.settings.prompt)?;
        out.flush()?;

        let mut password = String::new();
        loop {
            let byte = match port.read_byte()? {
                Some(b) => b,
                None => return Err(WidgetError::InputExhausted),
            };

            match byte {
                KEY_ENTER => break,
                KEY_BACKSPACE => {
                    if password.pop().is_some() {
                        write!(out, "{}", ERASE_GLYPH)?;
                        out.flush()?;
                    }
                }
                b => {
                    password.push(b as char);
                    write!(out, "{}", self.settings.mask)?;
                    out.flush()?;
                }
            }
        }
        writeln!(out)?;
        Ok(password)
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedPort;

    fn run(script: &[u8]) -> (Result<String, WidgetError>, String) {
        let widget = PasswordInput::new();
        let mut port = ScriptedPort::new(script);
        let mut out = Vec::new();
        let result = widget.run_session(&mut port, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn enter_returns_the_typed_characters() {
        let (result, _) = run(b"hunter2\n");
        assert_eq!(result.unwrap(), "hunter2");
    }

    #[test]
    fn only_mask_glyphs_are_echoed() {
        let (_, screen) = run(b"abc\n");
        assert!(!screen.contains("abc"));
        assert!(screen.contains("***"));
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let (result, screen) = run(b"abx\x7fc\n");
        assert_eq!(result.unwrap(), "abc");
        assert!(screen.contains(ERASE_GLYPH));
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_no_op() {
        let (result, screen) = run(b"\x7f\x7fab\n");
        assert_eq!(result.unwrap(), "ab");
        // Nothing was erased because nothing had been typed.
        assert!(!screen.contains(ERASE_GLYPH));
    }

    #[test]
    fn empty_password_is_valid() {
        let (result, _) = run(b"\n");
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn eof_before_enter_surfaces_input_exhausted() {
        let (result, _) = run(b"abc");
        assert!(matches!(result, Err(WidgetError::InputExhausted)));
    }

    #[test]
    fn prompt_is_printed_before_input() {
        let (_, screen) = run(b"\n");
        assert!(screen.starts_with("Enter your password: "));
    }

    #[test]
    fn custom_mask_is_used() {
        let mut widget = PasswordInput::new();
        widget.settings.mask = '#';
        let mut port = ScriptedPort::new(b"ab\n");
        let mut out = Vec::new();
        widget.run_session(&mut port, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("##"));
    }
}
