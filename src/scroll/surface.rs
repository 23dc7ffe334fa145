//! Scroll surfaces: the host-side source of scroll notifications.

use super::error::ScrollError;
use super::metrics::ScrollMetrics;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Handle issued by a surface for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One notification addressed to one registered listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub listener: ListenerId,
    pub metrics: ScrollMetrics,
}

/// Host API for observing scroll position.
pub trait ScrollSurface {
    fn add_listener(&mut self) -> Result<ListenerId, ScrollError>;

    /// Removing an unknown listener is a no-op.
    fn remove_listener(&mut self, id: ListenerId);
}

/// Surface backing the home page scrollable. Listeners can only be added
/// while the scrollable is mounted; unmounting drops every registration.
///
/// Clones share one registry, so the app and anything observing it see the
/// same registrations.
#[derive(Debug, Clone)]
pub struct ViewportSurface {
    name: &'static str,
    registry: Arc<Mutex<Registry>>,
}

#[derive(Debug)]
struct Registry {
    mounted: bool,
    next_id: u64,
    listeners: Vec<ListenerId>,
}

impl ViewportSurface {
    pub fn new(name: &'static str) -> Self {
        ViewportSurface {
            name,
            registry: Arc::new(Mutex::new(Registry {
                mounted: false,
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_mounted(&self) -> bool {
        self.registry().mounted
    }

    pub fn mount(&mut self) {
        let mut registry = self.registry();
        if !registry.mounted {
            debug!(surface = self.name, "Scroll surface mounted");
        }
        registry.mounted = true;
    }

    pub fn unmount(&mut self) {
        let mut registry = self.registry();
        if registry.mounted {
            debug!(
                surface = self.name,
                dropped = registry.listeners.len(),
                "Scroll surface unmounted"
            );
        }
        registry.mounted = false;
        registry.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.registry().listeners.len()
    }

    /// Fans one metrics reading out to every registered listener.
    pub fn notify(&self, metrics: ScrollMetrics) -> Vec<ScrollEvent> {
        let registry = self.registry();
        if !registry.mounted {
            trace!(surface = self.name, "Dropping scroll reading on unmounted surface");
            return Vec::new();
        }
        registry
            .listeners
            .iter()
            .map(|&listener| ScrollEvent { listener, metrics })
            .collect()
    }
}

impl ScrollSurface for ViewportSurface {
    fn add_listener(&mut self) -> Result<ListenerId, ScrollError> {
        let mut registry = self.registry();
        if !registry.mounted {
            return Err(ScrollError::Unobservable { surface: self.name });
        }
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push(id);
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.registry().listeners.retain(|existing| *existing != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_surface_refuses_listeners() {
        let mut surface = ViewportSurface::new("home");
        let err = surface.add_listener().expect_err("unmounted surface should refuse");
        assert_eq!(err, ScrollError::Unobservable { surface: "home" });
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn notify_fans_out_per_listener() {
        let mut surface = ViewportSurface::new("home");
        surface.mount();
        let first = surface.add_listener().expect("first listener");
        let second = surface.add_listener().expect("second listener");
        assert_ne!(first, second);

        let metrics = ScrollMetrics::new(10.0, 1000.0, 500.0);
        let events = surface.notify(metrics);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|event| event.metrics == metrics));

        surface.remove_listener(first);
        let events = surface.notify(metrics);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].listener, second);
    }

    #[test]
    fn clones_share_registrations() {
        let mut surface = ViewportSurface::new("home");
        let observer = surface.clone();
        surface.mount();
        surface.add_listener().expect("listener");
        assert!(observer.is_mounted());
        assert_eq!(observer.listener_count(), 1);

        surface.unmount();
        assert_eq!(observer.listener_count(), 0);
    }

    #[test]
    fn unmount_drops_registrations() {
        let mut surface = ViewportSurface::new("home");
        surface.mount();
        surface.add_listener().expect("listener");
        surface.unmount();
        assert_eq!(surface.listener_count(), 0);
        assert!(surface.notify(ScrollMetrics::default()).is_empty());
    }
}
