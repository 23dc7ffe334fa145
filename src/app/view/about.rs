use super::super::messages::Message;
use super::super::state::App;
use super::style::{self, BOLD, rgb};
use super::{grid, heading, light_card, page_hero};
use crate::content::{CREW, CrewMember, PressItem, SHERPAS, SIGNAL_FLARES, Sherpa};
use crate::presentation::palette::{
    AMBER_100, AMBER_600, AMBER_700, SLATE_500, SLATE_600, SLATE_900,
};
use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length};

impl App {
    pub(super) fn about(&self) -> Element<'_, Message> {
        let crew = grid(self.columns(3), CREW.iter().map(crew_card).collect());
        let sherpas = grid(self.columns(3), SHERPAS.iter().map(sherpa_card).collect());
        let press = Column::with_children(SIGNAL_FLARES.iter().map(press_row)).spacing(12);

        column![
            page_hero(
                "Meet the Crew",
                "We run the experiments, hear the pain points, and build the trails that should've existed all along.",
            ),
            crew,
            heading("The Sherpas"),
            text("They've walked these trails longer than anyone. Now they're helping others find the way.")
                .color(rgb(SLATE_600)),
            sherpas,
            heading("Signal Flares"),
            text("News from across the mountain.").color(rgb(SLATE_600)),
            press,
        ]
        .spacing(32)
        .into()
    }
}

fn crew_card(member: &'static CrewMember) -> Element<'static, Message> {
    light_card(
        column![
            text(member.role).size(13).font(BOLD).color(rgb(AMBER_600)),
            text(member.name).size(20).font(BOLD).color(rgb(SLATE_900)),
            text(member.title).size(14).color(rgb(SLATE_500)),
            text(member.description).size(14).color(rgb(SLATE_600)),
        ]
        .spacing(6),
    )
    .into()
}

fn sherpa_card(sherpa: &'static Sherpa) -> Element<'static, Message> {
    light_card(
        column![
            container(text(sherpa.badge).size(12).font(BOLD))
                .padding([2.0, 10.0])
                .style(style::pill(rgb(AMBER_100), rgb(AMBER_700))),
            text(sherpa.name).size(18).font(BOLD).color(rgb(SLATE_900)),
            text(format!("{} • {} years", sherpa.specialty, sherpa.years))
                .size(14)
                .color(rgb(SLATE_500)),
            text(sherpa.known_for).size(14).color(rgb(SLATE_600)),
        ]
        .spacing(8),
    )
    .into()
}

fn press_row(item: &'static PressItem) -> Element<'static, Message> {
    light_card(
        row![
            column![
                text(format!("{} • {}", item.date, item.source))
                    .size(13)
                    .color(rgb(SLATE_500)),
                text(item.title).size(18).font(BOLD).color(rgb(SLATE_900)),
            ]
            .spacing(4)
            .width(Length::Fill),
            text("→").size(18).color(rgb(SLATE_500)),
        ]
        .align_y(iced::alignment::Vertical::Center),
    )
    .into()
}
