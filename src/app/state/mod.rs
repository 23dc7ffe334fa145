mod constants;
mod ui;

use crate::config::AppConfig;
use crate::presentation::{IllustrationState, RevealEffect, RevealTable};
use crate::scroll::{ScrollCoalescer, ScrollProgressTracker, ViewportSurface};
use iced::Task;
use tracing::{debug, info};

use super::messages::{Message, Tab};

pub(crate) use constants::*;
pub(in crate::app) use ui::{
    Choice, ExpeditionState, JoinForm, NavState, specialty_choices, state_choices,
};

/// Last known window geometry.
pub(in crate::app) struct ViewportState {
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) tracker: ScrollProgressTracker,
    pub(super) surface: ViewportSurface,
    pub(super) coalescer: ScrollCoalescer,
    pub(super) reveal: RevealTable,
    pub(super) viewport: ViewportState,
    pub(super) nav: NavState,
    pub(super) expedition: ExpeditionState,
    pub(super) join: JoinForm,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let reveal = config.reveal_table();
        let mut tracker = ScrollProgressTracker::new(config.section_layout());

        let watched = reveal.clone();
        let mut shown = watched.revealed(0.0);
        tracker.subscribe(move |update| {
            let now = watched.revealed(update.progress);
            if now == shown {
                return;
            }
            for effect in RevealEffect::ALL {
                if now.contains(effect) != shown.contains(effect) {
                    debug!(
                        %effect,
                        visible = now.contains(effect),
                        progress = update.progress,
                        "Illustration layer toggled"
                    );
                }
            }
            shown = now;
        });

        let mut app = App {
            coalescer: ScrollCoalescer::new(config.coalesce_to_frames),
            viewport: ViewportState {
                window_width: config.window_width,
                window_height: config.window_height,
            },
            surface: ViewportSurface::new("home"),
            tracker,
            reveal,
            nav: NavState::default(),
            expedition: ExpeditionState::default(),
            join: JoinForm::default(),
            config,
        };
        info!(
            sections = app.tracker.layout().section_count(),
            section_height_factor = app.tracker.layout().height_factor(),
            coalesce = app.coalescer.is_enabled(),
            reveal_rules = app.reveal.rules().len(),
            reveal_points = ?app.reveal.thresholds(),
            "Landing site ready"
        );
        app.enter_home();
        (app, Task::none())
    }

    pub(super) fn on_home(&self) -> bool {
        self.nav.tab == Tab::Home
    }

    pub(super) fn is_compact(&self) -> bool {
        self.viewport.window_width < self.config.mobile_breakpoint
    }

    pub(super) fn illustration(&self) -> IllustrationState {
        IllustrationState::from_progress(self.tracker.latest().progress, &self.reveal)
    }
}
