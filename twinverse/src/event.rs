use crate::core::WindowId;

/// Window lifecycle events delivered by the host, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    WindowAdded(WindowId),
    WindowRemoved(WindowId),
    /// `None` when focus moved to nothing
    WindowActivated(Option<WindowId>),
}

pub type Handler<H> = Box<dyn FnMut(&H)>;

/// Something handlers can be registered against for each lifecycle event.
pub trait EventSource<H> {
    fn on_window_added(&mut self, handler: Handler<H>);
    fn on_window_removed(&mut self, handler: Handler<H>);
    fn on_window_activated(&mut self, handler: Handler<H>);
}

/// Holds registered handlers and runs them in registration order, each to
/// completion, when an event is dispatched.
pub struct Dispatcher<H> {
    added: Vec<Handler<H>>,
    removed: Vec<Handler<H>>,
    activated: Vec<Handler<H>>,
}

impl<H> Dispatcher<H> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            activated: Vec::new(),
        }
    }

    /// Returns how many handlers ran.
    pub fn dispatch(&mut self, event: HostEvent, host: &H) -> usize {
        let (handlers, window) = match event {
            HostEvent::WindowAdded(id) => (&mut self.added, Some(id)),
            HostEvent::WindowRemoved(id) => (&mut self.removed, Some(id)),
            HostEvent::WindowActivated(id) => (&mut self.activated, id),
        };
        tracing::debug!("Dispatching {:?} for window {:?}", event, window);
        for handler in handlers.iter_mut() {
            handler(host);
        }
        handlers.len()
    }
}

impl<H> Default for Dispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> EventSource<H> for Dispatcher<H> {
    fn on_window_added(&mut self, handler: Handler<H>) {
        self.added.push(handler);
    }

    fn on_window_removed(&mut self, handler: Handler<H>) {
        self.removed.push(handler);
    }

    fn on_window_activated(&mut self, handler: Handler<H>) {
        self.activated.push(handler);
    }
}
