use super::super::messages::{ExpeditionFilter, Message};
use super::super::state::App;
use super::style::{self, BOLD, ITALIC, rgb};
use super::{grid, light_card, page_hero};
use crate::content::{
    CONFESSIONALS, Confessional, EXPLORER_COUNT, Experiment, ExperimentStatus, SCOUTING_MISSIONS,
    WINS, Win, WinKind,
};
use crate::presentation::palette::{
    AMBER_100, AMBER_400, AMBER_600, AMBER_700, GREEN_100, GREEN_500, GREEN_700, ORANGE_500,
    SLATE_100, SLATE_400, SLATE_500, SLATE_700, SLATE_800,
};
use iced::alignment::Vertical;
use iced::widget::{Column, Row, button, column, container, progress_bar, row, text};
use iced::{Element, Length};

impl App {
    pub(super) fn expedition(&self) -> Element<'_, Message> {
        let filter = self.expedition.filter;

        let active = container(
            row![
                text("●").size(12).color(rgb(GREEN_500)),
                text(format!("{EXPLORER_COUNT} explorers active"))
                    .font(BOLD)
                    .color(rgb(SLATE_700)),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        )
        .padding([8.0, 16.0])
        .style(style::pill(rgb(SLATE_100), rgb(SLATE_700)));

        let chips = Row::with_children(ExpeditionFilter::ALL.into_iter().map(|option| {
            button(text(option.to_string()).size(14))
                .padding([8.0, 16.0])
                .style(style::filter_chip(option == filter))
                .on_press(Message::ExpeditionFilterChanged(option))
                .into()
        }))
        .spacing(8);

        let mut feeds = Vec::new();
        if filter.shows(ExpeditionFilter::Confessionals) {
            feeds.push(confessionals_feed());
        }
        if filter.shows(ExpeditionFilter::Wins) {
            feeds.push(wins_feed());
        }
        if filter.shows(ExpeditionFilter::ScoutingMissions) {
            feeds.push(scouting_feed());
        }
        let columns = if filter == ExpeditionFilter::All {
            self.columns(3)
        } else {
            1
        };

        column![
            page_hero(
                "The Expedition",
                "See how the exploration is going. Live updates from the trail.",
            ),
            active,
            chips,
            grid(columns, feeds),
        ]
        .spacing(32)
        .into()
    }
}

fn feed_title(title: &str) -> iced::widget::Text<'_> {
    text(title).size(18).font(BOLD).color(rgb(SLATE_800))
}

fn confessionals_feed() -> Element<'static, Message> {
    let mut feed = Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(feed_title("Confessionals"));
    for confessional in &CONFESSIONALS {
        feed = feed.push(confessional_card(confessional));
    }
    feed.push(
        text("Share your story →")
            .font(BOLD)
            .color(rgb(AMBER_600))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .into()
}

fn confessional_card(confessional: &'static Confessional) -> Element<'static, Message> {
    light_card(
        column![
            text(format!("\"{}\"", confessional.text))
                .font(ITALIC)
                .color(rgb(SLATE_700)),
            row![
                text(format!("Anonymous Explorer • {}", confessional.time))
                    .size(13)
                    .color(rgb(SLATE_400))
                    .width(Length::Fill),
                text(format!("♥ {}", confessional.reactions))
                    .size(13)
                    .color(rgb(ORANGE_500)),
            ],
        ]
        .spacing(12),
    )
    .padding(20)
    .into()
}

fn win_glyph(kind: WinKind) -> &'static str {
    match kind {
        WinKind::Member => "+",
        WinKind::Milestone => "⚑",
        WinKind::Savings => "$",
        WinKind::Trail => "↗",
    }
}

fn wins_feed() -> Element<'static, Message> {
    let mut feed = Column::new()
        .spacing(12)
        .width(Length::Fill)
        .push(feed_title("Wins Feed"));
    for win in &WINS {
        feed = feed.push(win_card(win));
    }
    feed.into()
}

fn win_card(win: &'static Win) -> Element<'static, Message> {
    light_card(
        row![
            container(text(win_glyph(win.kind)).color(rgb(SLATE_500)))
                .padding([4.0, 10.0])
                .style(style::pill(rgb(SLATE_100), rgb(SLATE_500))),
            column![
                text(win.text).font(BOLD).color(rgb(SLATE_700)),
                text(win.time).size(13).color(rgb(SLATE_400)),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Vertical::Top),
    )
    .padding(16)
    .into()
}

fn scouting_feed() -> Element<'static, Message> {
    let mut feed = column![
        feed_title("Scouting Missions"),
        text("New terrain we're exploring. You'll hear about it first.")
            .size(14)
            .color(rgb(SLATE_500)),
    ]
    .spacing(16)
    .width(Length::Fill);
    for mission in &SCOUTING_MISSIONS {
        feed = feed.push(mission_card(mission));
    }
    feed.into()
}

fn mission_card(mission: &'static Experiment) -> Element<'static, Message> {
    let (status, fill, ink) = match mission.status {
        ExperimentStatus::Active => ("Active", GREEN_100, GREEN_700),
        ExperimentStatus::Testing => ("Testing", AMBER_100, AMBER_700),
    };
    light_card(
        column![
            row![
                text(mission.title)
                    .font(BOLD)
                    .color(rgb(SLATE_800))
                    .width(Length::Fill),
                container(text(status).size(12))
                    .padding([2.0, 8.0])
                    .style(style::pill(rgb(fill), rgb(ink))),
            ]
            .align_y(Vertical::Center),
            text(mission.description).size(14).color(rgb(SLATE_700)),
            progress_bar(0.0..=1.0, mission.momentum())
                .height(Length::Fixed(8.0))
                .style(style::meter(rgb(AMBER_400))),
            text(mission.engagement).size(12).color(rgb(SLATE_400)),
        ]
        .spacing(8),
    )
    .padding(20)
    .into()
}
