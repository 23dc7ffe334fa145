use super::super::messages::{JoinField, Message};
use super::super::state::{App, Choice, specialty_choices, state_choices};
use super::style::{self, BOLD, rgb};
use super::{light_card, page_hero};
use crate::content::{EXPLORER_COUNT, EXPLORERS_THIS_WEEK, TESTIMONIALS, Testimonial};
use crate::presentation::palette::{
    AMBER_50, AMBER_400, GREEN_500, GREEN_600, SLATE_400, SLATE_500, SLATE_600, SLATE_700,
    SLATE_800,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, PickList, TextInput, button, column, container, pick_list, row, text, text_input,
};
use iced::{Color, Element, Length};

impl App {
    pub(super) fn join_page(&self) -> Element<'_, Message> {
        let signup = column![
            page_hero(
                "Join the Expedition",
                "One signup. Hundreds of explorers. A map we draw together.",
            ),
            self.join_counter(),
            self.join_form(),
        ]
        .spacing(24)
        .width(Length::Fill);

        let mut testimonials = Column::new()
            .spacing(16)
            .push(text("From explorers on the trail").font(BOLD).color(rgb(SLATE_800)));
        for testimonial in &TESTIMONIALS {
            testimonials = testimonials.push(testimonial_card(testimonial));
        }
        let preview = column![self.badge_preview(), testimonials]
            .spacing(32)
            .width(Length::Fill);

        let body: Element<'_, Message> = if self.is_compact() {
            column![signup, preview].spacing(48).into()
        } else {
            row![signup, preview].spacing(48).into()
        };

        column![
            body,
            column![
                text("There's still blank space on the map.").color(rgb(SLATE_600)),
                text("Help us fill it in.").font(BOLD).color(rgb(SLATE_800)),
            ]
            .spacing(8)
            .align_x(Horizontal::Center)
            .width(Length::Fill),
        ]
        .spacing(64)
        .into()
    }

    fn join_counter(&self) -> Element<'_, Message> {
        container(
            row![
                text("●").color(rgb(GREEN_500)),
                text(EXPLORER_COUNT.to_string())
                    .size(18)
                    .font(BOLD)
                    .color(rgb(SLATE_800)),
                text("physicians have joined")
                    .color(rgb(SLATE_600))
                    .width(Length::Fill),
                text(format!("+{EXPLORERS_THIS_WEEK} this week"))
                    .size(14)
                    .font(BOLD)
                    .color(rgb(GREEN_600)),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::card(rgb(AMBER_50), rgb(AMBER_50)))
        .into()
    }

    fn join_form(&self) -> Element<'_, Message> {
        let form = &self.join;

        light_card(
            column![
                labelled(
                    "What do we call you on the trail?",
                    input(JoinField::Name, "Dr. Jane Smith", &form.name),
                ),
                labelled(
                    "Best way to send smoke signals",
                    input(JoinField::Email, "jane@practice.com", &form.email),
                ),
                labelled(
                    "What terrain do you know best?",
                    select(
                        JoinField::Specialty,
                        "Select specialty",
                        specialty_choices(),
                        form.selected_specialty(),
                    ),
                ),
                labelled(
                    "Where are you climbing from?",
                    select(
                        JoinField::State,
                        "Select state",
                        state_choices(),
                        form.selected_state(),
                    ),
                ),
                labelled(
                    "Your basecamp (optional)",
                    input(JoinField::Practice, "Practice name", &form.practice),
                ),
                button(
                    text("Start Exploring →")
                        .size(18)
                        .font(BOLD)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .padding(16)
                .width(Length::Fill)
                .style(style::cta)
                .on_press(Message::JoinSubmitted),
                text("Free to join. No obligations. Just better trails.")
                    .size(14)
                    .color(rgb(SLATE_400))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            ]
            .spacing(20),
        )
        .padding(32)
        .into()
    }

    /// Live preview of the badge the visitor would receive.
    fn badge_preview(&self) -> Element<'_, Message> {
        let form = &self.join;
        let joined = form.joined_label(&chrono::Local::now());

        let badge = container(
            column![
                text("◉").size(28).color(rgb(AMBER_400)),
                text(form.badge_name().to_string())
                    .size(22)
                    .font(BOLD)
                    .color(Color::WHITE),
                text(form.badge_subtitle()).size(14).color(rgb(SLATE_400)),
                row![
                    text(format!("Explorer #{}", form.explorer_number()))
                        .size(12)
                        .color(rgb(SLATE_500))
                        .width(Length::Fill),
                    text(joined).size(12).color(rgb(SLATE_500)),
                ],
            ]
            .spacing(8),
        )
        .padding(24)
        .width(Length::Fill)
        .style(style::card(rgb(SLATE_700), rgb(SLATE_600)));

        container(
            column![
                text("Your explorer badge").size(14).color(rgb(SLATE_400)),
                badge,
            ]
            .spacing(16),
        )
        .padding(32)
        .width(Length::Fill)
        .style(style::card(rgb(SLATE_800), rgb(SLATE_800)))
        .into()
    }
}

fn labelled<'a>(label: &'a str, field: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    Column::new()
        .spacing(6)
        .push(text(label).size(14).font(BOLD).color(rgb(SLATE_700)))
        .push(field)
}

fn input<'a>(field: JoinField, placeholder: &str, value: &str) -> TextInput<'a, Message> {
    text_input(placeholder, value)
        .padding(12)
        .on_input(move |value| Message::JoinFieldChanged(field, value))
}

/// Drop-down over one of the option tables; selecting stores the raw value.
fn select<'a>(
    field: JoinField,
    placeholder: &str,
    options: Vec<Choice>,
    selected: Option<Choice>,
) -> PickList<'a, Choice, Vec<Choice>, Choice, Message> {
    pick_list(options, selected, move |choice: Choice| {
        Message::JoinFieldChanged(field, choice.value.to_string())
    })
    .placeholder(placeholder)
    .padding(12)
    .width(Length::Fill)
}

fn testimonial_card(testimonial: &'static Testimonial) -> Element<'static, Message> {
    light_card(
        column![
            text(format!("\"{}\"", testimonial.quote)).color(rgb(SLATE_700)),
            text(format!("— {}", testimonial.attribution))
                .size(14)
                .color(rgb(SLATE_500)),
        ]
        .spacing(12),
    )
    .padding(20)
    .into()
}
