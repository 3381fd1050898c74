//! Cursor controller: pointer focus and selection on a game board
//!
//! The controller owns a single focused cell. Pointer movement moves the
//! focus, pointer release selects, and cinematic sequences switch the whole
//! thing off. Every state change goes through [`CursorController::set_focus`],
//! [`CursorController::set_valid_cells`] or [`CursorController::set_active`],
//! which validate, diff against the previous value, and notify as one step.
//!
//! # Usage
//! ```
//! # use board_cursor::prelude::*;
//! let log = NotificationLog::new();
//! let mut cursor = CursorControllerBuilder::new()
//!     .with_geometry(GridGeometry::new(Vec2::zeros(), Vec2::new(32.0, 32.0), 10, 10))
//!     .with_publisher(log.clone())
//!     .with_highlight_sink(HighlightQueue::new())
//!     .build()?;
//!
//! cursor.set_focus(Some(Cell::new(4, 4)));
//! assert_eq!(cursor.focus(), Some(Cell::new(4, 4)));
//! assert_eq!(log.cursor_events().len(), 1);
//! # Ok::<(), CursorError>(())
//! ```

pub mod handler;
pub mod resolve;
pub mod state;


pub use handler::register_handlers;
pub use resolve::resolve_cell;
pub use state::{CursorState, ValidCells};

use crate::board::{describe, BoardGeometry, Cell, GridGeometry};
use crate::core::config::CursorConfig;
use crate::error::{CursorError, CursorResult};
use crate::events::{BoardEvent, CursorEvent, EventPublisher};
use crate::foundation::math::Point2;
use crate::input::CursorTransform;
use crate::render::HighlightSink;

/// Maps pointer input to a focused board cell and reports changes
pub struct CursorController {
    state: CursorState,
    valid_cells: ValidCells,
    transform: CursorTransform,
    geometry: Box<dyn BoardGeometry>,
    publisher: Box<dyn EventPublisher>,
    highlight: Box<dyn HighlightSink>,
}

impl CursorController {
    /// Whether the controller is processing input
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Currently focused cell
    pub fn focus(&self) -> Option<Cell> {
        self.state.focus()
    }

    /// Snapshot of the controller state
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Current focus allow-list
    pub fn valid_cells(&self) -> &ValidCells {
        &self.valid_cells
    }

    /// Controller offset and scale in pointer space
    pub fn transform(&self) -> CursorTransform {
        self.transform
    }

    /// Move or rescale the controller within pointer space
    pub fn set_transform(&mut self, transform: CursorTransform) {
        self.transform = transform;
    }

    /// Cell under a pointer-space position, or `None` when off the board
    pub fn resolve_cell(&self, pointer: Point2) -> Option<Cell> {
        resolve_cell(self.geometry.as_ref(), &self.transform, pointer)
    }

    /// Enable or disable input processing
    ///
    /// Deactivating clears the focus first. `ActivationChanged` is published
    /// only when the flag actually changes.
    pub fn set_active(&mut self, active: bool) {
        if self.state.is_active() == active {
            return;
        }
        if !active {
            self.set_focus(None);
        }
        self.state.set_active(active);
        log::debug!("Cursor {}", if active { "activated" } else { "deactivated" });
        self.publisher.publish(CursorEvent::ActivationChanged);
    }

    /// Replace the focus allow-list
    ///
    /// An empty collection makes every cell valid again. A non-empty one
    /// clears the focus when the focused cell is not in it.
    pub fn set_valid_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.valid_cells = cells.into_iter().collect();
        if let Some(focus) = self.state.focus() {
            if !self.valid_cells.accepts(focus) {
                self.set_focus(None);
            }
        }
    }

    /// Focus a cell, or clear the focus with `None`
    ///
    /// Cells outside a non-empty allow-list are coerced to `None`, as is
    /// every cell while the controller is inactive. Setting the value the
    /// focus already has does nothing at all. Board bounds are not checked
    /// here; pointer input is resolved against them beforehand.
    pub fn set_focus(&mut self, value: Option<Cell>) {
        let focus = if self.state.is_active() {
            self.valid_cells.filter(value)
        } else {
            None
        };
        if focus == self.state.focus() {
            return;
        }
        let old = self.state.replace_focus(focus);
        log::debug!("Cursor focus {} -> {}", describe(old), describe(focus));

        self.highlight.clear_highlight();
        if let Some(cell) = focus {
            self.highlight.draw_highlight_at(cell);
        }
        self.publisher.publish(CursorEvent::FocusChanged { old, new: focus });
        self.publisher.broadcast(BoardEvent::CellHighlighted(focus));
    }

    /// Pointer moved: focus the cell underneath
    ///
    /// Returns whether the event was consumed.
    pub(crate) fn handle_pointer_moved(&mut self, pointer: Point2) -> bool {
        if !self.state.is_active() {
            return false;
        }
        let cell = self.resolve_cell(pointer);
        log::trace!("Pointer moved to ({}, {}) -> {}", pointer.x, pointer.y, describe(cell));
        self.set_focus(cell);
        true
    }

    /// Pointer released: select the cell underneath
    ///
    /// The raw resolved cell is published, including `None`, without passing
    /// through the allow-list. Returns whether the event was consumed.
    pub(crate) fn handle_pointer_released(&mut self, pointer: Point2) -> bool {
        if !self.state.is_active() {
            return false;
        }
        let cell = self.resolve_cell(pointer);
        log::debug!("Cursor selected {}", describe(cell));
        self.publisher.publish(CursorEvent::Selected(cell));
        self.publisher.broadcast(BoardEvent::CellSelected(cell));
        true
    }
}

impl std::fmt::Debug for CursorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorController")
            .field("state", &self.state)
            .field("valid_cells", &self.valid_cells)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CursorController`]
///
/// Geometry, publisher and highlight sink are all required; `build` reports
/// whichever is missing instead of producing a controller that cannot work.
pub struct CursorControllerBuilder {
    geometry: Option<Box<dyn BoardGeometry>>,
    publisher: Option<Box<dyn EventPublisher>>,
    highlight: Option<Box<dyn HighlightSink>>,
    transform: CursorTransform,
    start_active: bool,
}

impl CursorControllerBuilder {
    /// Create a builder with an identity transform that starts active
    pub fn new() -> Self {
        Self {
            geometry: None,
            publisher: None,
            highlight: None,
            transform: CursorTransform::identity(),
            start_active: true,
        }
    }

    /// Create a builder from configuration, using a [`GridGeometry`] board
    pub fn from_config(config: &CursorConfig) -> CursorResult<Self> {
        config.validate().map_err(|e| {
            log::warn!("Rejected cursor configuration: {e}");
            e
        })?;
        Ok(Self::new()
            .with_geometry(GridGeometry::from_config(&config.board))
            .with_transform(config.transform)
            .with_start_active(config.start_active))
    }

    /// Set the board geometry
    #[must_use]
    pub fn with_geometry(mut self, geometry: impl BoardGeometry + 'static) -> Self {
        self.geometry = Some(Box::new(geometry));
        self
    }

    /// Set the notification publisher
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl EventPublisher + 'static) -> Self {
        self.publisher = Some(Box::new(publisher));
        self
    }

    /// Set the highlight sink
    #[must_use]
    pub fn with_highlight_sink(mut self, highlight: impl HighlightSink + 'static) -> Self {
        self.highlight = Some(Box::new(highlight));
        self
    }

    /// Set the controller transform
    #[must_use]
    pub fn with_transform(mut self, transform: CursorTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set whether the controller starts active
    #[must_use]
    pub fn with_start_active(mut self, active: bool) -> Self {
        self.start_active = active;
        self
    }

    /// Build the controller
    pub fn build(self) -> CursorResult<CursorController> {
        let Some(geometry) = self.geometry else {
            log::error!("Cannot build cursor controller: no board geometry");
            return Err(CursorError::MissingGeometry);
        };
        let publisher = self.publisher.ok_or(CursorError::MissingPublisher)?;
        let highlight = self.highlight.ok_or(CursorError::MissingHighlightSink)?;

        Ok(CursorController {
            state: CursorState::new(self.start_active),
            valid_cells: ValidCells::new(),
            transform: self.transform,
            geometry,
            publisher,
            highlight,
        })
    }
}

impl Default for CursorControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
