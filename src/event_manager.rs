//! Keyed event dispatcher.
//!
//! Instead of one undifferentiated `notify`, the publisher owns an
//! [`EventManager`] and fires named events. Listeners pick the event types they
//! care about.
//!
//! Dispatch rules:
//!
//! - listeners under one event type run in subscription order, synchronously;
//! - the same listener may be subscribed more than once and then runs once per
//!   subscription;
//! - a failing listener does not stop the others. Every listener runs, and the
//!   failures come back together as [`PatternError::ListenersFailed`].

use crate::error::{ListenerError, ListenerFailure, PatternError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub const COUNTER_INCREMENTED: &str = "counter_incremented";
pub const COUNTER_DECREMENTED: &str = "counter_decremented";

pub trait EventListener<T> {
    fn on_event(&self, data: &T) -> Result<(), ListenerError>;
}

pub type ListenerHandle<T> = Rc<dyn EventListener<T>>;

/// Adapts a closure into a listener.
pub struct FnListener<F>(F);

impl<T, F> EventListener<T> for FnListener<F>
where
    F: Fn(&T) -> Result<(), ListenerError>,
{
    fn on_event(&self, data: &T) -> Result<(), ListenerError> {
        (self.0)(data)
    }
}

pub fn listener_fn<T, F>(f: F) -> ListenerHandle<T>
where
    T: 'static,
    F: Fn(&T) -> Result<(), ListenerError> + 'static,
{
    Rc::new(FnListener(f))
}

pub struct EventManager<T> {
    listeners: HashMap<String, Vec<ListenerHandle<T>>>,
}

impl<T> EventManager<T> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Appends `listener` under `event_type`. No duplicate check.
    pub fn subscribe(&mut self, event_type: &str, listener: ListenerHandle<T>) {
        let listeners = self.listeners.entry(event_type.to_string()).or_default();
        listeners.push(listener);
        tracing::debug!(event_type, count = listeners.len(), "listener subscribed");
    }

    /// Removes the first subscription of this exact listener. Returns whether
    /// anything was removed.
    pub fn unsubscribe(&mut self, event_type: &str, listener: &ListenerHandle<T>) -> bool {
        let Some(listeners) = self.listeners.get_mut(event_type) else {
            return false;
        };
        let Some(index) = listeners.iter().position(|l| Rc::ptr_eq(l, listener)) else {
            return false;
        };

        listeners.remove(index);
        if listeners.is_empty() {
            self.listeners.remove(event_type);
        }
        tracing::debug!(event_type, "listener unsubscribed");
        true
    }

    /// Calls every listener under `event_type` with `data` and returns how
    /// many ran.
    pub fn notify(&self, event_type: &str, data: &T) -> Result<usize, PatternError> {
        let Some(listeners) = self.listeners.get(event_type) else {
            return Ok(0);
        };

        let mut failures = Vec::new();
        for (position, listener) in listeners.iter().enumerate() {
            if let Err(err) = listener.on_event(data) {
                tracing::warn!(event_type, position, error = %err, "listener failed");
                failures.push(ListenerFailure {
                    position,
                    message: err.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(listeners.len())
        } else {
            Err(PatternError::ListenersFailed {
                event_type: event_type.to_string(),
                failures,
            })
        }
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map_or(0, Vec::len)
    }

    pub fn event_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.listeners.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl<T> Default for EventManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for event_type in self.event_types() {
            map.entry(&event_type, &self.listener_count(event_type));
        }
        map.finish()
    }
}

/// Publisher that keeps a count and announces every change.
#[derive(Debug, Default)]
pub struct CountingPublisher {
    count: i64,
    events: EventManager<i64>,
}

impl CountingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn events(&self) -> &EventManager<i64> {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventManager<i64> {
        &mut self.events
    }

    /// The count changes even when a listener fails.
    pub fn increment(&mut self) -> Result<i64, PatternError> {
        self.count += 1;
        self.events.notify(COUNTER_INCREMENTED, &self.count)?;
        Ok(self.count)
    }

    pub fn decrement(&mut self) -> Result<i64, PatternError> {
        self.count -= 1;
        self.events.notify(COUNTER_DECREMENTED, &self.count)?;
        Ok(self.count)
    }
}

/// Pretends to post to Slack; prints and remembers each value.
#[derive(Debug, Default)]
pub struct SlackMessageListener {
    sent: RefCell<Vec<i64>>,
}

impl SlackMessageListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<i64> {
        self.sent.borrow().clone()
    }
}

impl EventListener<i64> for SlackMessageListener {
    fn on_event(&self, data: &i64) -> Result<(), ListenerError> {
        println!("Slack: Counter value has changed to {}", data);
        self.sent.borrow_mut().push(*data);
        Ok(())
    }
}
