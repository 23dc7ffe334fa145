//! Progress thresholds that gate the illustration's decorative layers.

use serde::{Deserialize, Serialize};

/// Decorative layers revealed as the visitor climbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealEffect {
    LitTrail,
    SideTrails,
    OuterTrails,
    Campfires,
    GreenSlopes,
    Figures,
    Daybreak,
    SummitBeacon,
}

impl RevealEffect {
    pub const ALL: [RevealEffect; 8] = [
        RevealEffect::LitTrail,
        RevealEffect::SideTrails,
        RevealEffect::OuterTrails,
        RevealEffect::Campfires,
        RevealEffect::GreenSlopes,
        RevealEffect::Figures,
        RevealEffect::Daybreak,
        RevealEffect::SummitBeacon,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl std::fmt::Display for RevealEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RevealEffect::LitTrail => "lit-trail",
            RevealEffect::SideTrails => "side-trails",
            RevealEffect::OuterTrails => "outer-trails",
            RevealEffect::Campfires => "campfires",
            RevealEffect::GreenSlopes => "green-slopes",
            RevealEffect::Figures => "figures",
            RevealEffect::Daybreak => "daybreak",
            RevealEffect::SummitBeacon => "summit-beacon",
        };
        write!(f, "{}", label)
    }
}

/// One row of the reveal table: `effect` shows once progress exceeds
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RevealRule {
    pub threshold: f32,
    pub effect: RevealEffect,
}

impl RevealRule {
    pub const fn new(threshold: f32, effect: RevealEffect) -> Self {
        RevealRule { threshold, effect }
    }
}

pub const DEFAULT_REVEAL_RULES: [RevealRule; 8] = [
    RevealRule::new(0.15, RevealEffect::LitTrail),
    RevealRule::new(0.15, RevealEffect::SideTrails),
    RevealRule::new(0.3, RevealEffect::OuterTrails),
    RevealRule::new(0.4, RevealEffect::Campfires),
    RevealRule::new(0.4, RevealEffect::GreenSlopes),
    RevealRule::new(0.5, RevealEffect::Figures),
    RevealRule::new(0.5, RevealEffect::Daybreak),
    RevealRule::new(0.7, RevealEffect::SummitBeacon),
];

/// Ordered threshold → effect table.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTable {
    rules: Vec<RevealRule>,
}

impl Default for RevealTable {
    fn default() -> Self {
        RevealTable::new(DEFAULT_REVEAL_RULES.to_vec())
    }
}

impl RevealTable {
    /// Drops non-finite thresholds and orders the rest ascending.
    pub fn new(rules: Vec<RevealRule>) -> Self {
        let mut rules: Vec<RevealRule> = rules
            .into_iter()
            .filter(|rule| rule.threshold.is_finite())
            .collect();
        rules.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        RevealTable { rules }
    }

    pub fn rules(&self) -> &[RevealRule] {
        &self.rules
    }

    pub fn revealed(&self, progress: f32) -> RevealSet {
        self.rules
            .iter()
            .take_while(|rule| progress > rule.threshold)
            .fold(RevealSet::default(), |set, rule| set.with(rule.effect))
    }

    /// Distinct thresholds, ascending.
    pub fn thresholds(&self) -> Vec<f32> {
        let mut thresholds: Vec<f32> = self.rules.iter().map(|rule| rule.threshold).collect();
        thresholds.dedup();
        thresholds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealSet(u16);

impl RevealSet {
    pub fn with(self, effect: RevealEffect) -> Self {
        RevealSet(self.0 | effect.bit())
    }

    pub fn contains(self, effect: RevealEffect) -> bool {
        self.0 & effect.bit() != 0
    }

    #[cfg(test)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[cfg(test)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_revealed_at_the_top() {
        let table = RevealTable::default();
        assert!(table.revealed(0.0).is_empty());
        assert!(table.revealed(0.15).is_empty(), "thresholds are strict");
    }

    #[test]
    fn default_table_steps_through_the_climb() {
        let table = RevealTable::default();

        let early = table.revealed(0.2);
        assert!(early.contains(RevealEffect::LitTrail));
        assert!(early.contains(RevealEffect::SideTrails));
        assert!(!early.contains(RevealEffect::OuterTrails));

        let fires = table.revealed(0.45);
        assert!(fires.contains(RevealEffect::Campfires));
        assert!(fires.contains(RevealEffect::GreenSlopes));
        assert!(!fires.contains(RevealEffect::Figures));

        let dawn = table.revealed(0.55);
        assert!(dawn.contains(RevealEffect::Figures));
        assert!(dawn.contains(RevealEffect::Daybreak));
        assert!(!dawn.contains(RevealEffect::SummitBeacon));

        assert_eq!(table.revealed(1.0).len(), RevealEffect::ALL.len());
    }

    #[test]
    fn rules_are_sorted_and_non_finite_dropped() {
        let table = RevealTable::new(vec![
            RevealRule::new(0.9, RevealEffect::SummitBeacon),
            RevealRule::new(f32::NAN, RevealEffect::Figures),
            RevealRule::new(0.1, RevealEffect::LitTrail),
        ]);
        let thresholds: Vec<f32> = table.rules().iter().map(|rule| rule.threshold).collect();
        assert_eq!(thresholds, vec![0.1, 0.9]);

        let revealed = table.revealed(0.5);
        assert!(revealed.contains(RevealEffect::LitTrail));
        assert!(!revealed.contains(RevealEffect::Figures));
    }

    #[test]
    fn default_thresholds_are_the_five_reveal_points() {
        assert_eq!(
            RevealTable::default().thresholds(),
            vec![0.15, 0.3, 0.4, 0.5, 0.7]
        );
    }

    #[test]
    fn revealed_set_grows_with_progress() {
        let table = RevealTable::default();
        let mut previous = RevealSet::default();
        for step in 0..=100 {
            let current = table.revealed(step as f32 / 100.0);
            assert!(current.len() >= previous.len());
            for effect in RevealEffect::ALL {
                if previous.contains(effect) {
                    assert!(current.contains(effect), "{effect} should stay revealed");
                }
            }
            previous = current;
        }
    }
}
