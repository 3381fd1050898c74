//! # Board Cursor
//!
//! Pointer-driven cell focus and selection for tile-based game boards.
//!
//! ## Features
//!
//! - **Coordinate Resolution**: Pointer positions mapped to board cells
//! - **Focus State**: One highlighted cell, deduplicated change notifications
//! - **Allow-Lists**: Restrict which cells may take focus
//! - **Activation Gating**: Cinematic sequences suspend all interaction
//! - **Injected Collaborators**: Geometry, publisher and highlight sink are traits
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use board_cursor::prelude::*;
//!
//! fn main() -> Result<(), CursorError> {
//!     let notifications = NotificationLog::new();
//!     let cursor = CursorControllerBuilder::from_config(&CursorConfig::default())?
//!         .with_publisher(notifications.clone())
//!         .with_highlight_sink(HighlightQueue::new())
//!         .build()?;
//!
//!     let cursor = Rc::new(RefCell::new(cursor));
//!     let mut events = EventSystem::new();
//!     register_handlers(&cursor, &mut events);
//!
//!     events.send(Event::pointer_moved(140.0, 150.0, 0.0));
//!     events.dispatch();
//!     assert_eq!(cursor.borrow().focus(), Some(Cell::new(4, 4)));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod board;
pub mod events;
pub mod render;
pub mod input;
pub mod cursor;

mod error;

pub use error::{CursorError, CursorResult};
pub use cursor::{CursorController, CursorControllerBuilder};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        CursorController, CursorControllerBuilder, CursorError, CursorResult,
        board::{BoardGeometry, Cell, GridGeometry, INVALID_CELL},
        cursor::{register_handlers, CursorState, ValidCells},
        events::{
            BoardEvent, CursorEvent, Event, EventHandler, EventPublisher, EventSystem,
            EventType, Notification, NotificationLog,
        },
        foundation::math::{Point2, Vec2},
        input::CursorTransform,
        render::{HighlightCommand, HighlightQueue, HighlightSink},
        core::config::{Config, CursorConfig, GridConfig},
    };
}
