use super::super::messages::Tab;
use super::super::state::App;
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_select_tab(&mut self, tab: Tab, effects: &mut Vec<Effect>) {
        self.nav.mobile_menu_open = false;
        if self.nav.tab == tab {
            debug!(%tab, "Tab already active");
            return;
        }

        let leaving_home = self.on_home();
        info!(from = %self.nav.tab, to = %tab, "Switching tab");
        self.nav.tab = tab;

        if leaving_home {
            self.leave_home();
        }
        if tab == Tab::Home {
            self.enter_home();
            effects.push(Effect::ResetHomeScroll);
        } else {
            effects.push(Effect::ResetPageScroll);
        }
    }

    pub(super) fn handle_toggle_mobile_menu(&mut self) {
        self.nav.mobile_menu_open = !self.nav.mobile_menu_open;
        debug!(open = self.nav.mobile_menu_open, "Toggled mobile menu");
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.viewport.window_width = width;
        self.viewport.window_height = height;
        if !self.is_compact() && self.nav.mobile_menu_open {
            self.nav.mobile_menu_open = false;
        }
        debug!(width, height, "Window resized");
    }

    pub(super) fn handle_close_requested(&mut self, effects: &mut Vec<Effect>) {
        info!("Close requested; releasing scroll tracking");
        self.leave_home();
        effects.push(Effect::Exit);
    }
}
