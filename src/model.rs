//! Selection state: cursor position and movement policy.
//!
//! Pure types, zero effects. The entries themselves stay with the
//! widget that renders them; the model only needs their count to keep
//! the cursor legal. Movement either wraps around the list boundary or
//! clamps to it, per the widget's overflow setting.

use crate::error::WidgetError;

// ============================================================================
// ENTRY
// ============================================================================

/// One selectable row.
///
/// `selected` is ignored by the menu widget and mutated in place by the
/// radio-button widget. The caller owns the entries; a widget borrows
/// them for the duration of a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub selected: bool,
}

impl Entry {
    /// An unselected entry with the given label.
    pub fn new(text: impl Into<String>) -> Entry {
        Entry { text: text.into(), selected: false }
    }
}

// ============================================================================
// SELECTION MODEL
// ============================================================================

/// Cursor over a non-empty entry list.
///
/// Invariant: `cursor < len` from construction onward. An empty list
/// has no legal cursor position, so construction fails fast instead of
/// letting a widget render and index into nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    cursor: usize,
    len: usize,
    wrap: bool,
}

impl SelectionModel {
    /// Builds a model over `len` entries with the cursor on
    /// `preselected`, clamped into range.
    pub fn new(len: usize, wrap: bool, preselected: usize) -> Result<SelectionModel, WidgetError> {
        if len == 0 {
            return Err(WidgetError::EmptyEntries);
        }
        Ok(SelectionModel {
            cursor: preselected.min(len - 1),
            len,
            wrap,
        })
    }

    /// The focused row index. Always within `[0, len)`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries the model ranges over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false — empty models are unconstructible.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Moves the cursor one row up, wrapping or clamping at the top.
    pub fn move_up(&mut self) {
        if self.cursor == 0 {
            if self.wrap {
                self.cursor = self.len - 1;
            }
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor one row down, wrapping or clamping at the bottom.
    pub fn move_down(&mut self) {
        if self.cursor + 1 == self.len {
            if self.wrap {
                self.cursor = 0;
            }
        } else {
            self.cursor += 1;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            SelectionModel::new(0, true, 0),
            Err(WidgetError::EmptyEntries)
        ));
    }

    #[test]
    fn out_of_range_preselection_clamps_to_last_row() {
        let model = SelectionModel::new(3, true, 99).unwrap();
        assert_eq!(model.cursor(), 2);
    }

    #[test]
    fn wrap_up_from_top_lands_on_last_row() {
        let mut model = SelectionModel::new(4, true, 0).unwrap();
        model.move_up();
        assert_eq!(model.cursor(), 3);
    }

    #[test]
    fn wrap_down_from_bottom_lands_on_first_row() {
        let mut model = SelectionModel::new(4, true, 3).unwrap();
        model.move_down();
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn clamp_up_from_top_stays() {
        let mut model = SelectionModel::new(4, false, 0).unwrap();
        model.move_up();
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn clamp_down_from_bottom_stays() {
        let mut model = SelectionModel::new(4, false, 3).unwrap();
        model.move_down();
        assert_eq!(model.cursor(), 3);
    }

    #[test]
    fn cursor_stays_in_range_for_any_movement_sequence() {
        // Pseudo-random walk over both wrap policies; the invariant
        // must hold after every single step.
        for &wrap in &[true, false] {
            for len in 1..=5 {
                let mut model = SelectionModel::new(len, wrap, 0).unwrap();
                let mut seed: u32 = 0x9e37;
                for _ in 0..200 {
                    seed = seed.wrapping_mul(48271) % 0x7fff_ffff;
                    if seed % 2 == 0 {
                        model.move_up();
                    } else {
                        model.move_down();
                    }
                    assert!(model.cursor() < len, "cursor escaped [0, {})", len);
                }
            }
        }
    }

    #[test]
    fn single_row_list_never_moves() {
        let mut model = SelectionModel::new(1, true, 0).unwrap();
        model.move_up();
        model.move_down();
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn entry_constructor_starts_unselected() {
        let entry = Entry::new("Option A");
        assert_eq!(entry.text, "Option A");
        assert!(!entry.selected);
    }
}
