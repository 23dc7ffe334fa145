use super::error::ScrollError;
use super::metrics::{ScrollUpdate, SectionLayout};
use super::surface::{ListenerId, ScrollEvent, ScrollSurface};
use tracing::{debug, info, trace};

type UpdateCallback = Box<dyn FnMut(ScrollUpdate) + Send>;

/// Turns scroll notifications into `(progress, section)` and republishes
/// them to every subscriber. Single writer of the latest value.
pub struct ScrollProgressTracker {
    layout: SectionLayout,
    listener: Option<ListenerId>,
    latest: ScrollUpdate,
    subscribers: Vec<UpdateCallback>,
}

impl ScrollProgressTracker {
    pub fn new(layout: SectionLayout) -> Self {
        ScrollProgressTracker {
            layout,
            listener: None,
            latest: ScrollUpdate::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn latest(&self) -> ScrollUpdate {
        self.latest
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(ScrollUpdate) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Registers with the surface. A second attach while already attached
    /// keeps the existing registration.
    pub fn attach<S>(&mut self, surface: &mut S) -> Result<(), ScrollError>
    where
        S: ScrollSurface + ?Sized,
    {
        if let Some(listener) = self.listener {
            debug!(%listener, "Tracker already attached; keeping existing listener");
            return Ok(());
        }
        let listener = surface.add_listener()?;
        info!(%listener, "Scroll tracker attached");
        self.listener = Some(listener);
        Ok(())
    }

    /// Releases the registration and forgets the last published pair.
    /// Safe to call when never attached.
    pub fn detach<S>(&mut self, surface: &mut S)
    where
        S: ScrollSurface + ?Sized,
    {
        if let Some(listener) = self.listener.take() {
            surface.remove_listener(listener);
            self.latest = ScrollUpdate::default();
            info!(%listener, "Scroll tracker detached");
        }
    }

    /// Derives and publishes the pair for an event addressed to this
    /// tracker's listener. Anything else is ignored.
    pub fn handle(&mut self, event: ScrollEvent) -> Option<ScrollUpdate> {
        if self.listener != Some(event.listener) {
            trace!(listener = %event.listener, "Ignoring scroll event for foreign listener");
            return None;
        }
        let update = event.metrics.derive(&self.layout);
        trace!(
            offset = event.metrics.offset,
            progress = update.progress,
            section = update.section,
            "Derived scroll state"
        );
        if update.section != self.latest.section {
            debug!(
                from = self.latest.section,
                to = update.section,
                "Active section changed"
            );
        }
        self.latest = update;
        for subscriber in &mut self.subscribers {
            subscriber(update);
        }
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::metrics::ScrollMetrics;
    use crate::scroll::surface::ViewportSurface;
    use std::sync::{Arc, Mutex};

    fn recording_tracker() -> (ScrollProgressTracker, Arc<Mutex<Vec<ScrollUpdate>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = ScrollProgressTracker::new(SectionLayout::default());
        let sink = Arc::clone(&seen);
        tracker.subscribe(move |update| sink.lock().expect("sink lock").push(update));
        (tracker, seen)
    }

    fn deliver(tracker: &mut ScrollProgressTracker, surface: &ViewportSurface, offset: f32) {
        for event in surface.notify(ScrollMetrics::new(offset, 6400.0, 800.0)) {
            tracker.handle(event);
        }
    }

    fn mounted_surface() -> ViewportSurface {
        let mut surface = ViewportSurface::new("test");
        surface.mount();
        surface
    }

    #[test]
    fn publishes_once_per_notification() {
        let (mut tracker, seen) = recording_tracker();
        let mut surface = mounted_surface();
        tracker.attach(&mut surface).expect("attach");

        deliver(&mut tracker, &surface, 0.0);
        deliver(&mut tracker, &surface, 2800.0);

        let seen = seen.lock().expect("seen lock");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].section, 3);
        assert!((seen[1].progress - 0.5).abs() < 1e-6);
        assert_eq!(tracker.latest(), seen[1]);
    }

    #[test]
    fn double_attach_does_not_duplicate_callbacks() {
        let (mut tracker, seen) = recording_tracker();
        let mut surface = mounted_surface();
        tracker.attach(&mut surface).expect("first attach");
        tracker.attach(&mut surface).expect("second attach");
        assert_eq!(surface.listener_count(), 1);

        deliver(&mut tracker, &surface, 400.0);
        assert_eq!(seen.lock().expect("seen lock").len(), 1);
    }

    #[test]
    fn detach_stops_updates() {
        let (mut tracker, seen) = recording_tracker();
        let mut surface = mounted_surface();
        tracker.attach(&mut surface).expect("attach");
        deliver(&mut tracker, &surface, 100.0);

        tracker.detach(&mut surface);
        assert!(!tracker.is_attached());
        assert_eq!(tracker.latest(), ScrollUpdate::default());
        deliver(&mut tracker, &surface, 3000.0);

        assert_eq!(seen.lock().expect("seen lock").len(), 1);
    }

    #[test]
    fn detach_without_attach_is_noop() {
        let mut tracker = ScrollProgressTracker::new(SectionLayout::default());
        let mut surface = ViewportSurface::new("test");
        tracker.detach(&mut surface);
        assert!(!tracker.is_attached());
    }

    #[test]
    fn stale_events_are_ignored_after_reattach() {
        let (mut tracker, seen) = recording_tracker();
        let mut surface = mounted_surface();
        tracker.attach(&mut surface).expect("attach");
        let stale = surface.notify(ScrollMetrics::new(2800.0, 6400.0, 800.0));

        tracker.detach(&mut surface);
        tracker.attach(&mut surface).expect("reattach");
        for event in stale {
            assert!(tracker.handle(event).is_none());
        }
        assert!(seen.lock().expect("seen lock").is_empty());
    }

    #[test]
    fn attach_failure_leaves_tracker_detached() {
        let (mut tracker, seen) = recording_tracker();
        let mut surface = ViewportSurface::new("offscreen");
        let err = tracker.attach(&mut surface).expect_err("unmounted surface");
        assert_eq!(err, ScrollError::Unobservable { surface: "offscreen" });
        assert!(!tracker.is_attached());

        surface.mount();
        deliver(&mut tracker, &surface, 1000.0);
        assert!(seen.lock().expect("seen lock").is_empty());

        tracker.attach(&mut surface).expect("attach after mount");
        deliver(&mut tracker, &surface, 1000.0);
        assert_eq!(seen.lock().expect("seen lock").len(), 1);
    }
}
