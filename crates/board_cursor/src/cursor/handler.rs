//! Event bus wiring for the cursor controller
//!
//! Pointer events are consumed only while the controller is active, so an
//! inactive cursor leaves them for the next handler in the chain. Cinematic
//! signals toggle activation and are never consumed.

use std::cell::RefCell;
use std::rc::Rc;

use super::CursorController;
use crate::events::{Event, EventHandler, EventSystem, EventType};
use crate::foundation::math::Point2;

impl EventHandler for CursorController {
    fn on_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::PointerMoved | EventType::PointerReleased => {
                // Nothing is computed while inactive, not even the position
                if !self.is_active() {
                    return false;
                }
                let Some((x, y)) = event.get_position() else {
                    log::warn!("{:?} event without a position, ignoring", event.event_type);
                    return false;
                };
                let pointer = Point2::new(x, y);
                if event.event_type == EventType::PointerMoved {
                    self.handle_pointer_moved(pointer)
                } else {
                    self.handle_pointer_released(pointer)
                }
            }
            EventType::CinematicModeEnabled => {
                self.set_active(false);
                false
            }
            EventType::CinematicModeDisabled => {
                self.set_active(true);
                false
            }
        }
    }
}

/// Register a shared controller for pointer and cinematic events
pub fn register_handlers(controller: &Rc<RefCell<CursorController>>, events: &mut EventSystem) {
    for event_type in [
        EventType::PointerMoved,
        EventType::PointerReleased,
        EventType::CinematicModeEnabled,
        EventType::CinematicModeDisabled,
    ] {
        events.register_handler(event_type, Box::new(Rc::clone(controller)));
    }
}
