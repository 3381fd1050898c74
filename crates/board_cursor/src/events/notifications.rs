//! Outbound cursor notifications
//!
//! The controller reports state changes through an injected
//! [`EventPublisher`] instead of a global signal bus. [`CursorEvent`]s go to
//! the controller's direct observers; [`BoardEvent`]s are the board-wide
//! broadcast other systems (tooltips, gameplay rules) listen to.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::Cell;

/// Notification for the controller's direct observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    /// The controller was activated or deactivated
    ActivationChanged,
    /// The focused cell changed
    FocusChanged {
        /// Focus before the change
        old: Option<Cell>,
        /// Focus after the change
        new: Option<Cell>,
    },
    /// The pointer was released over `cell` (`None` when off the board)
    Selected(Option<Cell>),
}

/// Board-wide broadcast mirroring the cursor notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A cell became highlighted (`None` when the highlight was cleared)
    CellHighlighted(Option<Cell>),
    /// A cell was selected
    CellSelected(Option<Cell>),
}

/// Receiver of everything the cursor controller emits
pub trait EventPublisher {
    /// Deliver a notification to the controller's observers
    fn publish(&mut self, event: CursorEvent);

    /// Deliver a board-wide notification
    fn broadcast(&mut self, event: BoardEvent);
}

/// One recorded notification, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Published to direct observers
    Cursor(CursorEvent),
    /// Broadcast board-wide
    Board(BoardEvent),
}

/// Publisher that records notifications for later inspection
///
/// Clones share the same record, so a host can keep one handle and give
/// another to the controller.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications recorded so far
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    /// Only the notifications published to direct observers
    pub fn cursor_events(&self) -> Vec<CursorEvent> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Cursor(event) => Some(*event),
                Notification::Board(_) => None,
            })
            .collect()
    }

    /// Only the board-wide broadcasts
    pub fn board_events(&self) -> Vec<BoardEvent> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Board(event) => Some(*event),
                Notification::Cursor(_) => None,
            })
            .collect()
    }

    /// Number of recorded notifications
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl EventPublisher for NotificationLog {
    fn publish(&mut self, event: CursorEvent) {
        self.entries.borrow_mut().push(Notification::Cursor(event));
    }

    fn broadcast(&mut self, event: BoardEvent) {
        self.entries.borrow_mut().push(Notification::Board(event));
    }
}
