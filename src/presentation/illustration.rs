use super::reveal::{RevealEffect, RevealSet, RevealTable};

pub const MOUNTAIN_MAX_SHIFT_PX: f32 = 50.0;
pub const SUN_MAX_LIFT_PX: f32 = 100.0;

/// Everything the mountain illustration needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IllustrationState {
    pub progress: f32,
    pub revealed: RevealSet,
    /// Downward translation of the mountain range.
    pub mountain_shift: f32,
    /// Upward translation of the sun/moon disc.
    pub sun_lift: f32,
}

impl IllustrationState {
    pub fn from_progress(progress: f32, table: &RevealTable) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        IllustrationState {
            progress,
            revealed: table.revealed(progress),
            mountain_shift: progress * MOUNTAIN_MAX_SHIFT_PX,
            sun_lift: progress * SUN_MAX_LIFT_PX,
        }
    }

    pub fn shows(&self, effect: RevealEffect) -> bool {
        self.revealed.contains(effect)
    }

    /// Stars fade out once day breaks.
    pub fn stars_visible(&self) -> bool {
        !self.shows(RevealEffect::Daybreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midway_state_tracks_progress() {
        let state = IllustrationState::from_progress(0.5, &RevealTable::default());
        assert_eq!(state.mountain_shift, 25.0);
        assert_eq!(state.sun_lift, 50.0);
        assert!(state.shows(RevealEffect::Campfires));
        assert!(!state.shows(RevealEffect::Figures));
        assert!(state.stars_visible());
    }

    #[test]
    fn summit_state_reveals_everything() {
        let state = IllustrationState::from_progress(1.0, &RevealTable::default());
        assert!(state.shows(RevealEffect::SummitBeacon));
        assert!(!state.stars_visible());
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let table = RevealTable::default();
        assert_eq!(
            IllustrationState::from_progress(4.0, &table),
            IllustrationState::from_progress(1.0, &table)
        );
        assert_eq!(
            IllustrationState::from_progress(f32::NAN, &table),
            IllustrationState::from_progress(0.0, &table)
        );
    }
}
