//! Event dispatch system
//!
//! Observer lists for chart interactions, decoupled from any rendering surface.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::model::{ScalingMode, TimeRange};

/// Event type identifier
pub type EventType = u32;

/// Chart event types
pub mod event_types {
    use super::EventType;

    /// A drag selection was created or updated
    pub const RANGE_SELECTED: EventType = 1;
    /// The visible selection was removed (click, cancel, or range slider moved)
    pub const SELECTION_CLEARED: EventType = 2;
    pub const SCALING_CHANGED: EventType = 10;
}

/// An event published by a chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    RangeSelected(TimeRange),
    SelectionCleared,
    ScalingChanged(ScalingMode),
}

impl ChartEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            ChartEvent::RangeSelected(_) => event_types::RANGE_SELECTED,
            ChartEvent::SelectionCleared => event_types::SELECTION_CLEARED,
            ChartEvent::ScalingChanged(_) => event_types::SCALING_CHANGED,
        }
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&ChartEvent) + Send + Sync>;

/// Dispatches events to registered handlers, in registration order
pub struct EventDispatcher {
    handlers: FxHashMap<EventType, SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for an event type
    pub fn register<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&ChartEvent) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Box::new(handler));
    }

    /// Number of handlers registered for an event type
    pub fn handler_count(&self, event_type: EventType) -> usize {
        self.handlers.get(&event_type).map_or(0, |h| h.len())
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &ChartEvent) {
        let event_type = event.event_type();
        if let Some(handlers) = self.handlers.get(&event_type) {
            tracing::trace!(event_type, handlers = handlers.len(), "dispatching {:?}", event);
            for handler in handlers {
                handler(event);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(EventType, usize)> =
            self.handlers.iter().map(|(k, v)| (*k, v.len())).collect();
        counts.sort_unstable();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn dispatch_reaches_only_matching_handlers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut d = EventDispatcher::new();

        let l = log.clone();
        d.register(event_types::SCALING_CHANGED, move |e| {
            l.lock().unwrap().push(format!("scaling {:?}", e));
        });
        let l = log.clone();
        d.register(event_types::RANGE_SELECTED, move |_| {
            l.lock().unwrap().push("range".to_string());
        });

        d.dispatch(&ChartEvent::ScalingChanged(ScalingMode::FixedPadded));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["scaling ScalingChanged(FixedPadded)".to_string()]
        );
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut d = EventDispatcher::new();
        for i in 0..3 {
            let l = log.clone();
            d.register(event_types::SELECTION_CLEARED, move |_| {
                l.lock().unwrap().push(i);
            });
        }
        assert_eq!(d.handler_count(event_types::SELECTION_CLEARED), 3);
        d.dispatch(&ChartEvent::SelectionCleared);
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn dispatch_without_handlers_is_noop() {
        let d = EventDispatcher::default();
        d.dispatch(&ChartEvent::SelectionCleared);
        assert_eq!(d.handler_count(event_types::RANGE_SELECTED), 0);
    }
}
