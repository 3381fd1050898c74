//! Cursor state and the focus allow-list

use std::collections::HashSet;

use crate::board::Cell;

/// Mutable state owned by the cursor controller
///
/// Fields are private; only the controller changes them, and only through
/// operations that keep `!active => focus.is_none()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    active: bool,
    focus: Option<Cell>,
}

impl CursorState {
    /// Fresh state with no focus
    pub fn new(active: bool) -> Self {
        Self {
            active,
            focus: None,
        }
    }

    /// Whether input is being processed
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Currently focused cell
    pub fn focus(&self) -> Option<Cell> {
        self.focus
    }

    /// Replace the focus, returning the previous value
    pub(crate) fn replace_focus(&mut self, focus: Option<Cell>) -> Option<Cell> {
        std::mem::replace(&mut self.focus, focus)
    }

    /// Update the activation flag; returns whether it changed
    pub(crate) fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }
        debug_assert!(active || self.focus.is_none(), "focus must be cleared before deactivating");
        self.active = active;
        true
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Cells the focus may land on
///
/// An empty set accepts every cell; a non-empty set accepts only its members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidCells {
    cells: HashSet<Cell>,
}

impl ValidCells {
    /// Create an allow-list that accepts every cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cell` passes the allow-list
    pub fn accepts(&self, cell: Cell) -> bool {
        self.cells.is_empty() || self.cells.contains(&cell)
    }

    /// Coerce a candidate focus: rejected cells become `None`
    pub fn filter(&self, candidate: Option<Cell>) -> Option<Cell> {
        candidate.filter(|cell| self.accepts(*cell))
    }

    /// Whether no cells are listed, which means every cell is accepted
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of explicitly allowed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the explicitly allowed cells
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl FromIterator<Cell> for ValidCells {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
