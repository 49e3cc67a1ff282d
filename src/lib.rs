//! termkit: interactive terminal widgets over raw single-byte input.
//!
//! Menus, radio-button lists, a bounded value slider, a password prompt
//! and a progress bar, rendered with plain ANSI escapes and driven by a
//! blocking render/read/transition loop.

pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod theme;
pub mod widgets;
