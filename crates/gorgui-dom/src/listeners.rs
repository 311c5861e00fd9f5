//! Event Listeners
//!
//! Per-element listener lists with DOM registration semantics: identity
//! de-duplication for behavior handlers, `once` removal before invocation,
//! and snapshot iteration during dispatch.

use std::fmt;

use crate::events::{Event, EventType};

/// Behavior handler identifier
///
/// Handlers are bound by an element's behavior and routed back to it on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u32);

/// Token for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listener options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Remove the listener before its first invocation
    pub once: bool,
}

impl ListenerOptions {
    pub const ONCE: ListenerOptions = ListenerOptions { once: true };
}

type Closure = Box<dyn FnMut(&Event)>;

enum Callback {
    Handler(HandlerId),
    Closure(Closure),
}

struct Listener {
    id: ListenerId,
    event_type: EventType,
    callback: Callback,
    once: bool,
}

/// What to run for one listener during dispatch
pub(crate) enum Invocation {
    Handler(HandlerId),
    /// A `once` closure, already removed from the list
    Detached(Closure),
    /// A persistent closure, called in place
    InPlace,
}

/// Ordered listener list of one element
#[derive(Default)]
pub struct EventListeners {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }

    /// Bind a behavior handler; returns false if it was already bound for this type
    pub fn add_handler(&mut self, event_type: EventType, handler: HandlerId, options: ListenerOptions) -> bool {
        if self.has_handler(event_type, handler) {
            return false;
        }
        let id = self.allocate_id();
        self.listeners.push(Listener {
            id,
            event_type,
            callback: Callback::Handler(handler),
            once: options.once,
        });
        true
    }

    /// Unbind a behavior handler; no-op if it is not bound
    pub fn remove_handler(&mut self, event_type: EventType, handler: HandlerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| {
            !(l.event_type == event_type && matches!(l.callback, Callback::Handler(h) if h == handler))
        });
        self.listeners.len() != before
    }

    /// Check whether a behavior handler is bound
    pub fn has_handler(&self, event_type: EventType, handler: HandlerId) -> bool {
        self.listeners.iter().any(|l| {
            l.event_type == event_type && matches!(l.callback, Callback::Handler(h) if h == handler)
        })
    }

    /// Register a consumer closure
    pub fn add<F>(&mut self, event_type: EventType, callback: F, options: ListenerOptions) -> ListenerId
    where
        F: FnMut(&Event) + 'static,
    {
        let id = self.allocate_id();
        self.listeners.push(Listener {
            id,
            event_type,
            callback: Callback::Closure(Box::new(callback)),
            once: options.once,
        });
        id
    }

    /// Remove a consumer closure
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Number of listeners for an event type
    pub fn count(&self, event_type: EventType) -> usize {
        self.listeners.iter().filter(|l| l.event_type == event_type).count()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn snapshot(&self, event_type: EventType) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|l| l.event_type == event_type)
            .map(|l| l.id)
            .collect()
    }

    /// Prepare one listener for invocation, removing `once` listeners first.
    /// Returns None if the listener was removed since the snapshot.
    pub(crate) fn begin(&mut self, id: ListenerId) -> Option<Invocation> {
        let index = self.listeners.iter().position(|l| l.id == id)?;
        if self.listeners[index].once {
            let listener = self.listeners.remove(index);
            return Some(match listener.callback {
                Callback::Handler(h) => Invocation::Handler(h),
                Callback::Closure(f) => Invocation::Detached(f),
            });
        }
        Some(match self.listeners[index].callback {
            Callback::Handler(h) => Invocation::Handler(h),
            Callback::Closure(_) => Invocation::InPlace,
        })
    }

    pub(crate) fn call(&mut self, id: ListenerId, event: &Event) {
        if let Some(Listener { callback: Callback::Closure(f), .. }) =
            self.listeners.iter_mut().find(|l| l.id == id)
        {
            f(event);
        }
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for l in &self.listeners {
            let kind = match l.callback {
                Callback::Handler(h) => format!("handler {}", h.0),
                Callback::Closure(_) => "closure".to_string(),
            };
            list.entry(&format_args!("{}: {}{}", l.event_type.as_str(), kind, if l.once { " (once)" } else { "" }));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLICK: HandlerId = HandlerId(1);

    #[test]
    fn test_handler_deduplicated() {
        let mut listeners = EventListeners::new();
        assert!(listeners.add_handler(EventType::Click, CLICK, ListenerOptions::default()));
        assert!(!listeners.add_handler(EventType::Click, CLICK, ListenerOptions::default()));
        assert_eq!(listeners.count(EventType::Click), 1);

        // Same handler under another type is a distinct registration
        assert!(listeners.add_handler(EventType::KeyUp, CLICK, ListenerOptions::default()));
        assert_eq!(listeners.count(EventType::KeyUp), 1);
    }

    #[test]
    fn test_remove_unbound_is_noop() {
        let mut listeners = EventListeners::new();
        assert!(!listeners.remove_handler(EventType::Click, CLICK));
        listeners.add_handler(EventType::Click, CLICK, ListenerOptions::default());
        assert!(listeners.remove_handler(EventType::Click, CLICK));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_once_removed_on_begin() {
        let mut listeners = EventListeners::new();
        listeners.add_handler(EventType::Click, CLICK, ListenerOptions::ONCE);
        let ids = listeners.snapshot(EventType::Click);
        assert!(matches!(listeners.begin(ids[0]), Some(Invocation::Handler(CLICK))));
        assert_eq!(listeners.count(EventType::Click), 0);
        assert!(listeners.begin(ids[0]).is_none());
    }

    #[test]
    fn test_closure_remove_by_id() {
        let mut listeners = EventListeners::new();
        let id = listeners.add(EventType::Change, |_| {}, ListenerOptions::default());
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
    }
}
