//! Raw terminal input: mode switching and blocking single-byte reads.
//!
//! All keyboard input flows through this module. It owns the one
//! invariant the whole toolkit depends on: every raw-mode activation has
//! exactly one matching restoration, on every exit path — normal return,
//! error, or panic.
//!
//! Structure:
//! - `LineMode`: the line-discipline flags we snapshot and restore
//! - `TerminalPort`: the seam between widgets and the real terminal
//! - `Tty`: termios-backed implementation over a file descriptor
//! - `ScriptedPort`: deterministic implementation for tests and replays
//! - `with_raw_mode`: the scoped acquire/release contract

use std::collections::VecDeque;
use std::io;

use crate::error::WidgetError;

// ============================================================================
// KEY CONSTANTS
// ============================================================================

/// Confirm key: newline / enter.
pub const KEY_ENTER: u8 = 10;

/// Delete-last key in the password widget.
pub const KEY_BACKSPACE: u8 = 127;

/// Tab. Reserved for focus cycling; unused by the current widgets.
pub const KEY_TAB: u8 = 9;

// ============================================================================
// LINE MODE
// ============================================================================

/// Snapshot of the terminal line-discipline flags.
///
/// Captured before entering raw mode and restored verbatim on exit.
/// Only the two flags the toolkit ever changes are modeled: everything
/// else in the terminal's attribute set is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMode {
    /// Line-buffered input (ICANON). False in raw mode.
    pub canonical: bool,
    /// Automatic echo of typed characters (ECHO).
    pub echo: bool,
}

impl LineMode {
    /// The default cooked mode: buffered lines, echo on.
    pub const COOKED: LineMode = LineMode { canonical: true, echo: true };

    /// Raw mode with the given echo policy.
    pub fn raw(echo: bool) -> LineMode {
        LineMode { canonical: false, echo }
    }
}

// ============================================================================
// TERMINAL PORT
// ============================================================================

/// The seam between widgets and a terminal-like input device.
///
/// Widgets are written against this trait so a session can run on the
/// real tty or on a scripted byte source. Terminal mode is process-wide
/// shared state; only one raw session may be active at a time and
/// nesting is undefined.
pub trait TerminalPort {
    /// Reads the current line-discipline flags.
    fn line_mode(&self) -> io::Result<LineMode>;

    /// Applies line-discipline flags immediately.
    fn set_line_mode(&mut self, mode: LineMode) -> io::Result<()>;

    /// Blocks until one byte is available; `None` means end of stream.
    ///
    /// Must only be called while raw mode is active (inside
    /// [`with_raw_mode`]) — in canonical mode the read blocks until a
    /// full line is buffered and the distinction between keystrokes is
    /// lost. Enforcing that is the caller's responsibility.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

// ============================================================================
// REAL TERMINAL
// ============================================================================

/// Termios-backed terminal over a raw file descriptor.
pub struct Tty {
    fd: libc::c_int,
}

impl Tty {
    /// The process's standard input.
    pub fn stdin() -> Tty {
        Tty { fd: libc::STDIN_FILENO }
    }

    fn attrs(&self) -> io::Result<libc::termios> {
        let mut attrs = std::mem::MaybeUninit::<libc::termios>::uninit();
        if unsafe { libc::tcgetattr(self.fd, attrs.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(unsafe { attrs.assume_init() })
    }
}

impl TerminalPort for Tty {
    fn line_mode(&self) -> io::Result<LineMode> {
        let attrs = self.attrs()?;
        Ok(LineMode {
            canonical: attrs.c_lflag & libc::ICANON != 0,
            echo: attrs.c_lflag & libc::ECHO != 0,
        })
    }

    fn set_line_mode(&mut self, mode: LineMode) -> io::Result<()> {
        let mut attrs = self.attrs()?;
        if mode.canonical {
            attrs.c_lflag |= libc::ICANON;
        } else {
            attrs.c_lflag &= !libc::ICANON;
        }
        if mode.echo {
            attrs.c_lflag |= libc::ECHO;
        } else {
            attrs.c_lflag &= !libc::ECHO;
        }
        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &attrs) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            let n = unsafe {
                libc::read(self.fd, buf.as_mut_ptr() as *mut libc::c_void, 1)
            };
            match n {
                0 => return Ok(None),
                1 => return Ok(Some(buf[0])),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() == io::ErrorKind::Interrupted {
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }
}

// ============================================================================
// SCRIPTED TERMINAL
// ============================================================================

/// Terminal fed from a fixed byte script.
///
/// Serves two purposes: the fake-terminal harness for tests (mode
/// changes are recorded for inspection) and non-interactive replay of a
/// pre-recorded key sequence. Reading past the script yields `None`,
/// simulating a closed input stream.
pub struct ScriptedPort {
    script: VecDeque<u8>,
    mode: LineMode,
    /// Every mode applied via [`TerminalPort::set_line_mode`], in order.
    pub mode_history: Vec<LineMode>,
}

impl ScriptedPort {
    /// A port that will replay `script` and then report end of stream.
    pub fn new(script: &[u8]) -> ScriptedPort {
        ScriptedPort {
            script: script.iter().copied().collect(),
            mode: LineMode::COOKED,
            mode_history: Vec::new(),
        }
    }

    /// Bytes not yet consumed by the session.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// The mode the port is currently in.
    pub fn current_mode(&self) -> LineMode {
        self.mode
    }
}

impl TerminalPort for ScriptedPort {
    fn line_mode(&self) -> io::Result<LineMode> {
        Ok(self.mode)
    }

    fn set_line_mode(&mut self, mode: LineMode) -> io::Result<()> {
        self.mode = mode;
        self.mode_history.push(mode);
        Ok(())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.script.pop_front())
    }
}

// ============================================================================
// SCOPED RAW MODE
// ============================================================================

/// Restores the saved mode when dropped, unless disarmed first.
///
/// The explicit restore path reports failures; this drop impl is the
/// backstop for panics, where all it can do is try.
struct ModeGuard<'a, P: TerminalPort + ?Sized> {
    port: &'a mut P,
    saved: Option<LineMode>,
}

impl<P: TerminalPort + ?Sized> ModeGuard<'_, P> {
    fn restore(&mut self) -> io::Result<()> {
        match self.saved.take() {
            Some(mode) => self.port.set_line_mode(mode),
            None => Ok(()),
        }
    }
}

impl<P: TerminalPort + ?Sized> Drop for ModeGuard<'_, P> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Runs `body` with the terminal in raw (non-canonical) mode.
///
/// Captures the current line mode, switches to raw mode with echo per
/// the flag, and restores the captured mode on every exit path of
/// `body`. A restoration failure after a successful body surfaces as
/// [`WidgetError::Restore`]; if the body itself failed, its error takes
/// precedence and restoration is attempted best-effort.
pub fn with_raw_mode<P, T, F>(port: &mut P, echo: bool, body: F) -> Result<T, WidgetError>
where
    P: TerminalPort + ?Sized,
    F: FnOnce(&mut P) -> Result<T, WidgetError>,
{
    let saved = port.line_mode()?;
    port.set_line_mode(LineMode::raw(echo))?;

    let mut guard = ModeGuard { port, saved: Some(saved) };
    let result = body(&mut *guard.port);

    match guard.restore() {
        Ok(()) => result,
        Err(restore_err) => match result {
            Ok(_) => Err(WidgetError::Restore(restore_err)),
            Err(body_err) => Err(body_err),
        },
    }
}

// ============================================================================
// READ HELPERS
// ============================================================================

/// Reads exactly `n` bytes, blocking until all are available.
///
/// End of stream before `n` bytes were read is an error — a partial
/// read is never returned.
pub fn read_exact<P: TerminalPort + ?Sized>(
    port: &mut P,
    n: usize,
) -> Result<Vec<u8>, WidgetError> {
    let mut bytes = Vec::with_capacity(n);
    for _ in 0..n {
        match port.read_byte()? {
            Some(b) => bytes.push(b),
            None => return Err(WidgetError::InputExhausted),
        }
    }
    Ok(bytes)
}

/// Discards buffered input up to and including the next newline.
///
/// Run before a session starts so stray keystrokes left in the stream
/// are not replayed as widget input. Stops at end of stream without
/// error — an empty buffer is exactly the state we want.
pub fn drain_pending<P: TerminalPort + ?Sized>(port: &mut P) -> Result<(), WidgetError> {
    loop {
        match port.read_byte()? {
            Some(KEY_ENTER) | None => return Ok(()),
            Some(_) => {}
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
