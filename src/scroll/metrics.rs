//! Pure derivation of scroll progress and the active section.

/// One reading of the host's layout metrics, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub document_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, document_height: f32, viewport_height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        ScrollMetrics {
            offset: sanitize(offset),
            document_height: sanitize(document_height),
            viewport_height: sanitize(viewport_height),
        }
    }

    /// Maximum reachable offset (`document - viewport`). Zero or negative when
    /// the content fits inside the viewport.
    pub fn scrollable_distance(&self) -> f32 {
        self.document_height - self.viewport_height
    }

    /// Normalized progress in `[0, 1]`; `0` when there is nothing to scroll.
    pub fn progress(&self) -> f32 {
        let distance = self.scrollable_distance();
        if distance <= 0.0 {
            return 0.0;
        }
        (self.offset / distance).clamp(0.0, 1.0)
    }

    pub fn derive(&self, layout: &SectionLayout) -> ScrollUpdate {
        ScrollUpdate {
            progress: self.progress(),
            section: layout.section_for(self),
        }
    }
}

/// How the scroll narrative is cut into sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    section_count: usize,
    height_factor: f32,
}

pub const DEFAULT_SECTION_COUNT: usize = 7;
pub const DEFAULT_SECTION_HEIGHT_FACTOR: f32 = 0.95;

impl Default for SectionLayout {
    fn default() -> Self {
        SectionLayout {
            section_count: DEFAULT_SECTION_COUNT,
            height_factor: DEFAULT_SECTION_HEIGHT_FACTOR,
        }
    }
}

impl SectionLayout {
    /// Builds a layout, replacing unusable values with the defaults.
    pub fn new(section_count: usize, height_factor: f32) -> Self {
        let section_count = if section_count == 0 {
            DEFAULT_SECTION_COUNT
        } else {
            section_count
        };
        let height_factor = if height_factor.is_finite() && height_factor > 0.0 {
            height_factor
        } else {
            DEFAULT_SECTION_HEIGHT_FACTOR
        };
        SectionLayout {
            section_count,
            height_factor,
        }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn height_factor(&self) -> f32 {
        self.height_factor
    }

    pub fn max_index(&self) -> usize {
        self.section_count - 1
    }

    /// `floor(offset / (viewport * factor))`, clamped to the last section.
    pub fn section_for(&self, metrics: &ScrollMetrics) -> usize {
        let section_height = metrics.viewport_height * self.height_factor;
        if section_height <= 0.0 {
            return 0;
        }
        let raw = (metrics.offset / section_height).floor();
        if !raw.is_finite() || raw <= 0.0 {
            return 0;
        }
        (raw as usize).min(self.max_index())
    }
}

/// The derived pair republished on every accepted notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollUpdate {
    pub progress: f32,
    pub section: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    fn page(offset: f32) -> ScrollMetrics {
        ScrollMetrics::new(offset, 6400.0, 800.0)
    }

    #[test]
    fn reference_page_matches_expected_pairs() {
        let layout = SectionLayout::default();

        let top = page(0.0).derive(&layout);
        assert_eq!(top.progress, 0.0);
        assert_eq!(top.section, 0);

        let middle = page(2800.0).derive(&layout);
        assert!((middle.progress - 0.5).abs() < 1e-6);
        assert_eq!(middle.section, 3);

        let bottom = page(5600.0).derive(&layout);
        assert!((bottom.progress - 1.0).abs() < 1e-6);
        assert_eq!(bottom.section, 6, "raw index 7 should clamp to the last section");
    }

    #[test]
    fn content_shorter_than_viewport_reports_zero_progress() {
        let layout = SectionLayout::default();
        let equal = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert_eq!(equal.scrollable_distance(), 0.0);
        assert_eq!(equal.progress(), 0.0);
        assert_eq!(equal.derive(&layout).section, 0);

        let shorter = ScrollMetrics::new(0.0, 300.0, 800.0);
        assert_eq!(shorter.progress(), 0.0);
        assert!(!shorter.progress().is_nan());
    }

    #[test]
    fn zero_viewport_keeps_first_section() {
        let metrics = ScrollMetrics::new(500.0, 1000.0, 0.0);
        assert_eq!(SectionLayout::default().section_for(&metrics), 0);
    }

    #[test]
    fn non_finite_metrics_are_sanitized() {
        let metrics = ScrollMetrics::new(f32::NAN, f32::INFINITY, -20.0);
        assert_eq!(metrics, ScrollMetrics::default());
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn unusable_layout_values_fall_back_to_defaults() {
        let layout = SectionLayout::new(0, f32::NAN);
        assert_eq!(layout, SectionLayout::default());
        assert_eq!(SectionLayout::new(3, -1.0).height_factor(), DEFAULT_SECTION_HEIGHT_FACTOR);
        assert_eq!(SectionLayout::new(3, 1.0).max_index(), 2);
    }

    proptest! {
        #![proptest_config(Config::with_cases(256))]
        #[test]
        fn progress_stays_in_unit_range(
            viewport in 1.0_f32..4000.0,
            extra in 0.0_f32..20_000.0,
            fraction in 0.0_f32..=1.0,
        ) {
            let document = viewport + extra;
            let offset = extra * fraction;
            let progress = ScrollMetrics::new(offset, document, viewport).progress();
            prop_assert!((0.0..=1.0).contains(&progress));
        }

        #[test]
        fn progress_and_section_are_monotonic(
            viewport in 100.0_f32..2000.0,
            extra in 0.0_f32..20_000.0,
            a in 0.0_f32..=1.0,
            b in 0.0_f32..=1.0,
        ) {
            let layout = SectionLayout::default();
            let document = viewport + extra;
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let first = ScrollMetrics::new(extra * low, document, viewport).derive(&layout);
            let second = ScrollMetrics::new(extra * high, document, viewport).derive(&layout);
            prop_assert!(first.progress <= second.progress);
            prop_assert!(first.section <= second.section);
            prop_assert!(second.section <= layout.max_index());
        }
    }
}
