use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::SelectTab(tab) => self.handle_select_tab(tab, &mut effects),
            Message::ToggleMobileMenu => self.handle_toggle_mobile_menu(),
            Message::Scrolled(metrics) => self.handle_scrolled(metrics),
            Message::Frame => self.handle_frame(),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::CloseRequested => self.handle_close_requested(&mut effects),
            Message::ExpeditionFilterChanged(filter) => {
                self.handle_expedition_filter_changed(filter);
            }
            Message::JoinFieldChanged(field, value) => self.handle_join_field_changed(field, value),
            Message::JoinSubmitted => self.handle_join_submitted(),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::{ExpeditionFilter, JoinField, Tab};
    use crate::config::{AppConfig, parse_config};
    use crate::content::SECTIONS;
    use crate::presentation::RevealEffect;
    use crate::scroll::{ScrollMetrics, ScrollUpdate};

    fn app_with(coalesce: bool) -> App {
        let mut config = AppConfig::default();
        config.coalesce_to_frames = coalesce;
        App::bootstrap(config).0
    }

    fn scroll_to(offset: f32) -> Message {
        Message::Scrolled(ScrollMetrics::new(offset, 6400.0, 800.0))
    }

    #[test]
    fn bootstrap_attaches_on_home() {
        let app = app_with(true);
        assert!(app.on_home());
        assert!(app.surface.is_mounted());
        assert!(app.tracker.is_attached());
        assert_eq!(app.surface.listener_count(), 1);
        assert_eq!(app.tracker.latest(), ScrollUpdate::default());
    }

    #[test]
    fn scroll_updates_pair_immediately_without_coalescing() {
        let mut app = app_with(false);
        let effects = app.reduce(scroll_to(2800.0));
        assert!(effects.is_empty());
        let latest = app.tracker.latest();
        assert!((latest.progress - 0.5).abs() < 1e-6);
        assert_eq!(latest.section, 3);
        assert!(app.illustration().shows(RevealEffect::Campfires));
    }

    #[test]
    fn coalesced_scrolls_flush_latest_on_frame() {
        let mut app = app_with(true);
        app.reduce(scroll_to(1000.0));
        app.reduce(scroll_to(5600.0));
        assert_eq!(app.tracker.latest(), ScrollUpdate::default());
        assert!(app.coalescer.has_pending());

        app.reduce(Message::Frame);
        let latest = app.tracker.latest();
        assert_eq!(latest.progress, 1.0);
        assert_eq!(latest.section, 6);
        assert!(!app.coalescer.has_pending());
    }

    #[test]
    fn leaving_home_detaches_and_returning_reattaches() {
        let mut app = app_with(false);
        app.reduce(scroll_to(2800.0));

        let effects = app.reduce(Message::SelectTab(Tab::About));
        assert_eq!(effects, vec![Effect::ResetPageScroll]);
        assert!(!app.tracker.is_attached());
        assert!(!app.surface.is_mounted());

        // Late scroll messages from the old scrollable are dropped.
        app.reduce(scroll_to(5600.0));
        assert_eq!(app.tracker.latest(), ScrollUpdate::default());

        let effects = app.reduce(Message::SelectTab(Tab::Home));
        assert_eq!(effects, vec![Effect::ResetHomeScroll]);
        assert!(app.tracker.is_attached());
        assert_eq!(app.tracker.latest(), ScrollUpdate::default());
    }

    #[test]
    fn selecting_current_tab_is_a_no_op() {
        let mut app = app_with(false);
        let effects = app.reduce(Message::SelectTab(Tab::Home));
        assert!(effects.is_empty());
        assert_eq!(app.surface.listener_count(), 1);
    }

    #[test]
    fn mobile_menu_closes_after_navigation() {
        let mut app = app_with(false);
        app.reduce(Message::WindowResized {
            width: 500.0,
            height: 800.0,
        });
        assert!(app.is_compact());

        app.reduce(Message::ToggleMobileMenu);
        assert!(app.nav.mobile_menu_open);
        app.reduce(Message::SelectTab(Tab::Expedition));
        assert!(!app.nav.mobile_menu_open);
    }

    #[test]
    fn widening_the_window_closes_mobile_menu() {
        let mut app = app_with(false);
        app.reduce(Message::WindowResized {
            width: 500.0,
            height: 800.0,
        });
        app.reduce(Message::ToggleMobileMenu);
        app.reduce(Message::WindowResized {
            width: 1200.0,
            height: 800.0,
        });
        assert!(!app.nav.mobile_menu_open);
    }

    #[test]
    fn close_request_detaches_before_exit() {
        let mut app = app_with(true);
        app.reduce(scroll_to(400.0));
        let effects = app.reduce(Message::CloseRequested);
        assert_eq!(effects, vec![Effect::Exit]);
        assert!(!app.tracker.is_attached());
        assert!(!app.coalescer.has_pending());
    }

    #[test]
    fn dropping_the_app_releases_the_home_surface() {
        let mut app = app_with(true);
        app.reduce(scroll_to(400.0));
        let surface = app.surface.clone();
        assert_eq!(surface.listener_count(), 1);

        drop(app);
        assert_eq!(surface.listener_count(), 0);
        assert!(!surface.is_mounted());
    }

    #[test]
    fn dropping_the_app_off_home_is_quiet() {
        let mut app = app_with(false);
        app.reduce(Message::SelectTab(Tab::Join));
        let surface = app.surface.clone();

        drop(app);
        assert_eq!(surface.listener_count(), 0);
        assert!(!surface.is_mounted());
    }

    #[test]
    fn section_count_in_config_cannot_exceed_the_page() {
        let config =
            parse_config("[scroll]\nsection_count = 12\ncoalesce_to_frames = false\n")
                .expect("unknown keys are ignored");
        let (mut app, _) = App::bootstrap(config);
        assert_eq!(app.tracker.layout().section_count(), SECTIONS.len());

        app.reduce(Message::Scrolled(ScrollMetrics::new(9000.0, 10000.0, 800.0)));
        let latest = app.tracker.latest();
        assert_eq!(latest.progress, 1.0);
        assert_eq!(latest.section, SECTIONS.len() - 1);
    }

    #[test]
    fn expedition_filter_and_join_form_are_local_state() {
        let mut app = app_with(false);
        app.reduce(Message::ExpeditionFilterChanged(ExpeditionFilter::Wins));
        assert_eq!(app.expedition.filter, ExpeditionFilter::Wins);

        app.reduce(Message::JoinFieldChanged(
            JoinField::Name,
            "Dr. Ada Lovelace".to_string(),
        ));
        let effects = app.reduce(Message::JoinSubmitted);
        assert!(effects.is_empty());
        assert_eq!(app.join.badge_name(), "Dr. Ada Lovelace");
    }
}
