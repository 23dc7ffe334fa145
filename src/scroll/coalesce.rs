use super::metrics::ScrollMetrics;

/// Collapses bursts of scroll readings into one per animation frame.
/// Later readings replace earlier ones; `take` hands out the newest.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    enabled: bool,
    pending: Option<ScrollMetrics>,
    coalesced: u64,
}

impl ScrollCoalescer {
    pub fn new(enabled: bool) -> Self {
        ScrollCoalescer {
            enabled,
            pending: None,
            coalesced: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the reading to derive right away, or `None` when it was
    /// parked until the next frame.
    pub fn offer(&mut self, metrics: ScrollMetrics) -> Option<ScrollMetrics> {
        if !self.enabled {
            return Some(metrics);
        }
        if self.pending.replace(metrics).is_some() {
            self.coalesced += 1;
        }
        None
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<ScrollMetrics> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Readings dropped because a newer one arrived before the frame.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_passes_readings_through() {
        let mut coalescer = ScrollCoalescer::new(false);
        let metrics = ScrollMetrics::new(10.0, 100.0, 50.0);
        assert_eq!(coalescer.offer(metrics), Some(metrics));
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn enabled_keeps_only_latest_reading() {
        let mut coalescer = ScrollCoalescer::new(true);
        assert!(coalescer.offer(ScrollMetrics::new(10.0, 1000.0, 500.0)).is_none());
        assert!(coalescer.offer(ScrollMetrics::new(20.0, 1000.0, 500.0)).is_none());
        assert!(coalescer.offer(ScrollMetrics::new(30.0, 1000.0, 500.0)).is_none());

        let flushed = coalescer.take().expect("pending reading");
        assert_eq!(flushed.offset, 30.0);
        assert_eq!(coalescer.coalesced(), 2);
        assert!(coalescer.take().is_none());
    }
}
