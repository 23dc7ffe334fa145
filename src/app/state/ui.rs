use super::super::messages::{ExpeditionFilter, JoinField, Tab};
use crate::content::{EXPLORER_COUNT, SPECIALTIES, STATES};
use chrono::{DateTime, TimeZone};

pub struct NavState {
    pub(in crate::app) tab: Tab,
    pub(in crate::app) mobile_menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            tab: Tab::Home,
            mobile_menu_open: false,
        }
    }
}

/// Pick-list entry backed by one of the static option tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

fn choices(table: &[(&'static str, &'static str)]) -> Vec<Choice> {
    table
        .iter()
        .map(|&(value, label)| Choice { value, label })
        .collect()
}

pub fn specialty_choices() -> Vec<Choice> {
    choices(&SPECIALTIES)
}

pub fn state_choices() -> Vec<Choice> {
    choices(&STATES)
}

/// Join form input. Lives only as long as the app does; nothing is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinForm {
    pub(in crate::app) name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) specialty: String,
    pub(in crate::app) state: String,
    pub(in crate::app) practice: String,
}

impl JoinForm {
    pub(in crate::app) fn set(&mut self, field: JoinField, value: String) {
        let slot = match field {
            JoinField::Name => &mut self.name,
            JoinField::Email => &mut self.email,
            JoinField::Specialty => &mut self.specialty,
            JoinField::State => &mut self.state,
            JoinField::Practice => &mut self.practice,
        };
        *slot = value;
    }

    pub(in crate::app) fn selected_specialty(&self) -> Option<Choice> {
        specialty_choices()
            .into_iter()
            .find(|choice| choice.value == self.specialty)
    }

    pub(in crate::app) fn selected_state(&self) -> Option<Choice> {
        state_choices()
            .into_iter()
            .find(|choice| choice.value == self.state)
    }

    pub(in crate::app) fn badge_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Dr. _________" } else { name }
    }

    /// `"<Specialty> • <State>"`, using the raw option value with its first
    /// letter upper-cased.
    pub(in crate::app) fn badge_subtitle(&self) -> String {
        let specialty = if self.specialty.is_empty() {
            "Specialty".to_string()
        } else {
            capitalize(&self.specialty)
        };
        let state = if self.state.is_empty() {
            "State"
        } else {
            self.state.as_str()
        };
        format!("{specialty} • {state}")
    }

    pub(in crate::app) fn explorer_number(&self) -> u32 {
        EXPLORER_COUNT + 1
    }

    pub(in crate::app) fn joined_label<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!("Joined {}", now.format("%b %Y"))
    }

    pub(in crate::app) fn filled_fields(&self) -> usize {
        [
            &self.name,
            &self.email,
            &self.specialty,
            &self.state,
            &self.practice,
        ]
        .iter()
        .filter(|value| !value.trim().is_empty())
        .count()
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Default)]
pub struct ExpeditionState {
    pub(in crate::app) filter: ExpeditionFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn empty_form_shows_placeholders() {
        let form = JoinForm::default();
        assert_eq!(form.badge_name(), "Dr. _________");
        assert_eq!(form.badge_subtitle(), "Specialty • State");
        assert_eq!(form.explorer_number(), 848);
        assert_eq!(form.filled_fields(), 0);
    }

    #[test]
    fn badge_reflects_form_input() {
        let mut form = JoinForm::default();
        form.set(JoinField::Name, "Dr. Jane Smith".to_string());
        form.set(JoinField::Specialty, "pediatrics".to_string());
        form.set(JoinField::State, "TX".to_string());

        assert_eq!(form.badge_name(), "Dr. Jane Smith");
        assert_eq!(form.badge_subtitle(), "Pediatrics • TX");
        assert_eq!(form.selected_specialty().map(|c| c.label), Some("Pediatrics"));
        assert_eq!(form.selected_state().map(|c| c.label), Some("Texas"));
        assert_eq!(form.filled_fields(), 3);
    }

    #[test]
    fn joined_label_uses_month_and_year() {
        let form = JoinForm::default();
        let now = Utc
            .with_ymd_and_hms(2026, 10, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(form.joined_label(&now), "Joined Oct 2026");
    }
}
