use super::super::messages::{ExpeditionFilter, JoinField};
use super::super::state::App;
use tracing::debug;

impl App {
    pub(super) fn handle_expedition_filter_changed(&mut self, filter: ExpeditionFilter) {
        debug!(%filter, "Expedition filter changed");
        self.expedition.filter = filter;
    }

    pub(super) fn handle_join_field_changed(&mut self, field: JoinField, value: String) {
        self.join.set(field, value);
    }

    /// There is no signup backend; the form only feeds the badge preview.
    pub(super) fn handle_join_submitted(&mut self) {
        debug!(
            filled = self.join.filled_fields(),
            "Join form submitted; nothing to send"
        );
    }
}
