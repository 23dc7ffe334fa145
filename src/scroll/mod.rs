//! Scroll position → `(progress, active section)`.
//!
//! The tracker registers with a scroll surface, derives both values from
//! each notification it receives, and republishes them to its subscribers.
//! Presentation code only ever reads the published pair.

mod coalesce;
mod error;
mod metrics;
mod surface;
mod tracker;

pub use coalesce::ScrollCoalescer;
pub use metrics::{DEFAULT_SECTION_HEIGHT_FACTOR, ScrollMetrics, SectionLayout};
pub use surface::ViewportSurface;
pub use tracker::ScrollProgressTracker;

#[cfg(test)]
pub use metrics::ScrollUpdate;
