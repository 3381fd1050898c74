//! Event system following Game Engine Architecture Ch 16.8
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queuing support (immediate + deferred delivery)
//!
//! Inbound traffic (pointer input, cinematic signals) flows through
//! [`EventSystem`]. Outbound cursor notifications go through the
//! [`EventPublisher`] seam in [`notifications`].

pub mod notifications;

pub use notifications::{BoardEvent, CursorEvent, EventPublisher, Notification, NotificationLog};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer moved over the board
    PointerMoved,
    /// Pointer button released (the "select" action)
    PointerReleased,
    /// A non-interactive sequence started
    CinematicModeEnabled,
    /// A non-interactive sequence ended
    CinematicModeDisabled,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone)]
pub enum EventArg {
    /// Position coordinates
    Position(f32, f32),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Timestamp when event was created (seconds)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and timestamp
    pub fn new(event_type: EventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Pointer-moved event at a pointer-space position
    pub fn pointer_moved(x: f32, y: f32, timestamp: f64) -> Self {
        Self::new(EventType::PointerMoved, timestamp)
            .with_arg("position", EventArg::Position(x, y))
    }

    /// Pointer-released event at a pointer-space position
    pub fn pointer_released(x: f32, y: f32, timestamp: f64) -> Self {
        Self::new(EventType::PointerReleased, timestamp)
            .with_arg("position", EventArg::Position(x, y))
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get position argument if present
    pub fn get_position(&self) -> Option<(f32, f32)> {
        match self.get_arg("position") {
            Some(EventArg::Position(x, y)) => Some((*x, *y)),
            None => None,
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Shared handlers stay reachable by their owner after registration
impl<H: EventHandler + ?Sized> EventHandler for Rc<RefCell<H>> {
    fn on_event(&mut self, event: &Event) -> bool {
        self.borrow_mut().on_event(event)
    }
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    immediate_queue: Vec<Event>,
    deferred_queue: Vec<(f64, Event)>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
    current_time: f64,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
            handlers: HashMap::new(),
            current_time: 0.0,
        }
    }

    /// Update current time (seconds since start)
    pub fn update_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Send event for immediate handling this frame
    pub fn send(&mut self, event: Event) {
        self.immediate_queue.push(event);
    }

    /// Post event for deferred delivery at specified time
    pub fn post(&mut self, delivery_time: f64, event: Event) {
        self.deferred_queue.push((delivery_time, event));
    }

    /// Dispatch all pending events
    /// Processes immediate queue first, then due deferred events
    ///
    /// Returns the number of events some handler consumed.
    pub fn dispatch(&mut self) -> usize {
        let mut consumed = 0;

        let immediate = std::mem::take(&mut self.immediate_queue);
        for event in immediate {
            if self.dispatch_event(&event) {
                consumed += 1;
            }
        }

        // Due deferred events, in posting order
        let mut i = 0;
        while i < self.deferred_queue.len() {
            if self.deferred_queue[i].0 <= self.current_time {
                let (_, event) = self.deferred_queue.remove(i);
                if self.dispatch_event(&event) {
                    consumed += 1;
                }
            } else {
                i += 1;
            }
        }

        consumed
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) -> bool {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of deferred events still waiting for delivery
    pub fn pending_deferred(&self) -> usize {
        self.deferred_queue.len()
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
        self.deferred_queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHandler {
        events_received: Vec<EventType>,
        consume: bool,
    }

    impl TestHandler {
        fn new(consume: bool) -> Self {
            Self {
                events_received: Vec::new(),
                consume,
            }
        }
    }

    impl EventHandler for TestHandler {
        fn on_event(&mut self, event: &Event) -> bool {
            self.events_received.push(event.event_type);
            self.consume
        }
    }

    #[test]
    fn test_immediate_dispatch() {
        let mut system = EventSystem::new();
        let handler = Rc::new(RefCell::new(TestHandler::new(false)));
        system.register_handler(EventType::PointerMoved, Box::new(Rc::clone(&handler)));

        system.send(Event::pointer_moved(4.0, 2.0, 0.0));
        let consumed = system.dispatch();

        assert_eq!(consumed, 0);
        assert_eq!(handler.borrow().events_received, vec![EventType::PointerMoved]);
    }

    #[test]
    fn test_unregistered_type_is_ignored() {
        let mut system = EventSystem::new();
        let handler = Rc::new(RefCell::new(TestHandler::new(true)));
        system.register_handler(EventType::PointerMoved, Box::new(Rc::clone(&handler)));

        system.send(Event::new(EventType::CinematicModeEnabled, 0.0));
        assert_eq!(system.dispatch(), 0);
        assert!(handler.borrow().events_received.is_empty());
    }

    #[test]
    fn test_deferred_dispatch() {
        let mut system = EventSystem::new();
        system.update_time(0.0);

        let event = Event::new(EventType::CinematicModeDisabled, 1.0);
        system.post(1.0, event);

        // Event should not dispatch at t=0.5
        system.update_time(0.5);
        system.dispatch();
        assert_eq!(system.pending_deferred(), 1);

        // Event should dispatch at t=1.0
        system.update_time(1.0);
        system.dispatch();
        assert_eq!(system.pending_deferred(), 0);
    }

    #[test]
    fn test_event_consumption() {
        let mut system = EventSystem::new();

        // First handler consumes
        let first = Rc::new(RefCell::new(TestHandler::new(true)));
        system.register_handler(EventType::PointerReleased, Box::new(Rc::clone(&first)));

        // Second handler should not receive
        let second = Rc::new(RefCell::new(TestHandler::new(false)));
        system.register_handler(EventType::PointerReleased, Box::new(Rc::clone(&second)));

        system.send(Event::pointer_released(0.0, 0.0, 0.0));
        assert_eq!(system.dispatch(), 1);

        assert_eq!(first.borrow().events_received.len(), 1);
        assert!(second.borrow().events_received.is_empty());
    }

    #[test]
    fn test_position_argument() {
        let event = Event::pointer_moved(12.0, -3.5, 0.25);
        assert_eq!(event.get_position(), Some((12.0, -3.5)));
        assert!(Event::new(EventType::CinematicModeEnabled, 0.0).get_position().is_none());
    }

    #[test]
    fn test_clear() {
        let mut system = EventSystem::new();
        system.send(Event::pointer_moved(0.0, 0.0, 0.0));
        system.post(5.0, Event::pointer_moved(0.0, 0.0, 0.0));
        system.clear();
        assert_eq!(system.pending_deferred(), 0);
        assert_eq!(system.dispatch(), 0);
    }
}
