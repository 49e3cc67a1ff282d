//! The shared render/read/transition loop.
//!
//! Every navigable widget (menu, radio buttons, slider) is this loop
//! with a different state type and transition table. The loop itself
//! knows nothing about entries, cursors or values: it renders, blocks
//! for one byte, applies the widget's transition, and repeats until the
//! transition says the session is done.
//!
//! The loop is fully synchronous. There is no timeout and no
//! cancellation; a session ends through a recognized key or through end
//! of input, which terminates with an error rather than spinning.

use std::io;

use crate::error::WidgetError;
use crate::input::{drain_pending, TerminalPort};

/// Outcome of applying one key to the widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Re-render and wait for the next key.
    Continue,
    /// The session is finished; the loop returns.
    Done,
}

/// Drives one interactive session over `state`.
///
/// Each iteration repaints the full screen via `render`, blocks on
/// `port` for one byte, and feeds it to `apply`. Bytes the widget does
/// not recognize are no-ops by convention — `apply` returns
/// [`Flow::Continue`] without changing the state.
///
/// With `drain` set, buffered input up to the next newline is discarded
/// before the first render, so stale keystrokes are not replayed into
/// the session.
pub fn run_loop<P, S, R, A>(
    port: &mut P,
    state: &mut S,
    drain: bool,
    mut render: R,
    mut apply: A,
) -> Result<(), WidgetError>
where
    P: TerminalPort + ?Sized,
    R: FnMut(&S) -> io::Result<()>,
    A: FnMut(&mut S, u8) -> Flow,
{
    if drain {
        drain_pending(port)?;
    }

    loop {
        render(state)?;

        let byte = match port.read_byte()? {
            Some(b) => b,
            None => return Err(WidgetError::InputExhausted),
        };

        if apply(state, byte) == Flow::Done {
            return Ok(());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
