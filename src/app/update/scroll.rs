use super::super::state::App;
use crate::scroll::ScrollMetrics;
use tracing::{debug, trace, warn};

impl App {
    pub(in crate::app) fn enter_home(&mut self) {
        self.surface.mount();
        match self.tracker.attach(&mut self.surface) {
            Ok(()) => debug!(
                surface = self.surface.name(),
                listeners = self.surface.listener_count(),
                "Home scroll tracking active"
            ),
            Err(err) => warn!("Scroll tracking unavailable: {err}"),
        }
    }

    pub(in crate::app) fn leave_home(&mut self) {
        if !self.surface.is_mounted() && !self.tracker.is_attached() {
            return;
        }
        self.tracker.detach(&mut self.surface);
        self.surface.unmount();
        self.coalescer.clear();
    }

    pub(super) fn handle_scrolled(&mut self, metrics: ScrollMetrics) {
        if !self.on_home() {
            trace!("Ignoring scroll reading outside the home page");
            return;
        }
        if let Some(ready) = self.coalescer.offer(metrics) {
            self.deliver(ready);
        }
    }

    pub(super) fn handle_frame(&mut self) {
        if let Some(pending) = self.coalescer.take() {
            trace!(coalesced = self.coalescer.coalesced(), "Flushing scroll reading on frame");
            self.deliver(pending);
        }
    }

    fn deliver(&mut self, metrics: ScrollMetrics) {
        for event in self.surface.notify(metrics) {
            self.tracker.handle(event);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.leave_home();
    }
}
