//! Highlight render commands
//!
//! The controller never draws; it tells a [`HighlightSink`] where the
//! highlight sprite belongs and the renderer does the rest.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::Cell;

/// Consumer of highlight draw commands
pub trait HighlightSink {
    /// Remove any highlight currently drawn
    fn clear_highlight(&mut self);

    /// Draw the highlight over `cell`
    fn draw_highlight_at(&mut self, cell: Cell);
}

/// Highlight render command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightCommand {
    /// Remove the highlight
    Clear,
    /// Draw the highlight at a cell
    DrawAt(Cell),
}

/// Sink that queues commands for a renderer to drain once per frame
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct HighlightQueue {
    commands: Rc<RefCell<Vec<HighlightCommand>>>,
}

impl HighlightQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued so far, without removing them
    pub fn commands(&self) -> Vec<HighlightCommand> {
        self.commands.borrow().clone()
    }

    /// Remove and return all queued commands
    pub fn drain(&self) -> Vec<HighlightCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    /// Cell the highlight ends up on after replaying the queue
    pub fn current(&self) -> Option<Cell> {
        self.commands
            .borrow()
            .iter()
            .fold(None, |_, command| match command {
                HighlightCommand::Clear => None,
                HighlightCommand::DrawAt(cell) => Some(*cell),
            })
    }
}

impl HighlightSink for HighlightQueue {
    fn clear_highlight(&mut self) {
        self.commands.borrow_mut().push(HighlightCommand::Clear);
    }

    fn draw_highlight_at(&mut self, cell: Cell) {
        self.commands.borrow_mut().push(HighlightCommand::DrawAt(cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_records_commands() {
        let mut queue = HighlightQueue::new();
        queue.clear_highlight();
        queue.draw_highlight_at(Cell::new(2, 3));

        assert_eq!(
            queue.commands(),
            vec![HighlightCommand::Clear, HighlightCommand::DrawAt(Cell::new(2, 3))]
        );
        assert_eq!(queue.current(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_drain_empties_shared_queue() {
        let queue = HighlightQueue::new();
        let mut sink = queue.clone();
        sink.draw_highlight_at(Cell::new(0, 0));
        sink.clear_highlight();

        assert_eq!(queue.current(), None);
        assert_eq!(queue.drain().len(), 2);
        assert!(sink.commands().is_empty());
    }
}
