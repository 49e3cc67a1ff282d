//! The widgets: one module per control.
//!
//! - `menu`: pick one row from a list, returns its index
//! - `radio`: single-select checkboxes, mutates the caller's entries
//! - `slider`: bounded integer picked with increment/decrement keys
//! - `password`: masked line input
//! - `progress`: in-place progress bar, output only

pub mod menu;
pub mod password;
pub mod progress;
pub mod radio;
pub mod slider;

pub use menu::{Menu, MenuSettings};
pub use password::{PasswordInput, PasswordSettings};
pub use progress::{ProgressBar, ProgressSettings};
pub use radio::{RadioButton, RadioSettings};
pub use slider::{SliderSettings, ValueSlider};
