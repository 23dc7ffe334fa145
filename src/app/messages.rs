use crate::scroll::ScrollMetrics;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ToggleMobileMenu,
    Scrolled(ScrollMetrics),
    Frame,
    WindowResized { width: f32, height: f32 },
    CloseRequested,
    ExpeditionFilterChanged(ExpeditionFilter),
    JoinFieldChanged(JoinField, String),
    JoinSubmitted,
}

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    About,
    BaseCamp,
    Expedition,
    Join,
}

impl Tab {
    /// Tabs listed in the navigation bar; Join has its own call to action.
    pub const NAV: [Tab; 4] = [Tab::Home, Tab::About, Tab::BaseCamp, Tab::Expedition];
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::BaseCamp => "Base Camp",
            Tab::Expedition => "Expedition",
            Tab::Join => "Join",
        };
        write!(f, "{}", label)
    }
}

/// Which feeds the Expedition page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpeditionFilter {
    #[default]
    All,
    Confessionals,
    Wins,
    ScoutingMissions,
}

impl ExpeditionFilter {
    pub const ALL: [ExpeditionFilter; 4] = [
        ExpeditionFilter::All,
        ExpeditionFilter::Confessionals,
        ExpeditionFilter::Wins,
        ExpeditionFilter::ScoutingMissions,
    ];

    pub fn shows(self, feed: ExpeditionFilter) -> bool {
        self == ExpeditionFilter::All || self == feed
    }
}

impl std::fmt::Display for ExpeditionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExpeditionFilter::All => "All Updates",
            ExpeditionFilter::Confessionals => "Confessionals",
            ExpeditionFilter::Wins => "Wins",
            ExpeditionFilter::ScoutingMissions => "Scouting Missions",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinField {
    Name,
    Email,
    Specialty,
    State,
    Practice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_feed() {
        for feed in ExpeditionFilter::ALL {
            assert!(ExpeditionFilter::All.shows(feed), "All hides {feed}");
        }
    }

    #[test]
    fn specific_filters_show_only_their_own_feed() {
        let cases = [
            (ExpeditionFilter::Confessionals, [true, false, false]),
            (ExpeditionFilter::Wins, [false, true, false]),
            (ExpeditionFilter::ScoutingMissions, [false, false, true]),
        ];
        let feeds = [
            ExpeditionFilter::Confessionals,
            ExpeditionFilter::Wins,
            ExpeditionFilter::ScoutingMissions,
        ];
        for (filter, expected) in cases {
            for (feed, shown) in feeds.into_iter().zip(expected) {
                assert_eq!(filter.shows(feed), shown, "{filter} vs {feed}");
            }
        }
    }
}
