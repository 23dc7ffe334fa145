use super::super::messages::Message;
use super::super::state::App;
use super::style::{self, BOLD, rgb};
use super::{grid, heading, light_card, page_hero};
use crate::content::{GEAR, Milestone, MilestoneStatus, TRAIL_MAP, Tool, ToolStatus};
use crate::presentation::palette::{
    AMBER_100, AMBER_500, AMBER_700, GREEN_100, GREEN_500, GREEN_700, Rgb, SLATE_100, SLATE_300,
    SLATE_500, SLATE_600, SLATE_900,
};
use iced::alignment::Vertical;
use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length};

impl App {
    pub(super) fn base_camp(&self) -> Element<'_, Message> {
        let milestones = Column::with_children(TRAIL_MAP.iter().map(milestone_card)).spacing(16);
        let gear = grid(self.columns(3), GEAR.iter().map(tool_card).collect());

        column![
            page_hero(
                "Base Camp",
                "The infrastructure that makes the expedition possible. Here's what we're building, and when.",
            ),
            heading("Trail Map"),
            milestones,
            heading("Gear Ready for the Climb"),
            gear,
        ]
        .spacing(32)
        .into()
    }
}

/// `(dot, chip fill, chip ink)` for a milestone.
fn milestone_colors(status: MilestoneStatus) -> (Rgb, Rgb, Rgb) {
    match status {
        MilestoneStatus::Complete => (GREEN_500, GREEN_100, GREEN_700),
        MilestoneStatus::Current => (AMBER_500, AMBER_100, AMBER_700),
        MilestoneStatus::Upcoming => (SLATE_300, SLATE_100, SLATE_600),
    }
}

fn milestone_card(milestone: &'static Milestone) -> Element<'static, Message> {
    let (dot, fill, ink) = milestone_colors(milestone.status);
    let chip = match milestone.status {
        MilestoneStatus::Current => format!("{} • In Progress", milestone.quarter),
        _ => milestone.quarter.to_string(),
    };

    let mut details = column![
        container(text(chip).size(12).font(BOLD))
            .padding([2.0, 10.0])
            .style(style::pill(rgb(fill), rgb(ink))),
        text(milestone.title).size(20).font(BOLD).color(rgb(SLATE_900)),
        text(milestone.description).size(14).color(rgb(SLATE_600)),
    ]
    .spacing(8)
    .width(Length::Fill);
    for item in milestone.items {
        details = details.push(text(format!("• {item}")).size(14).color(rgb(SLATE_500)));
    }

    light_card(
        row![text("●").size(18).color(rgb(dot)), details]
            .spacing(16)
            .align_y(Vertical::Top),
    )
    .into()
}

fn tool_colors(status: ToolStatus) -> (Rgb, Rgb) {
    match status {
        ToolStatus::Live => (GREEN_100, GREEN_700),
        ToolStatus::Beta => (AMBER_100, AMBER_700),
        ToolStatus::ComingSoon => (SLATE_100, SLATE_600),
    }
}

fn tool_card(tool: &'static Tool) -> Element<'static, Message> {
    let (fill, ink) = tool_colors(tool.status);
    light_card(
        column![
            row![
                text(tool.title)
                    .size(18)
                    .font(BOLD)
                    .color(rgb(SLATE_900))
                    .width(Length::Fill),
                container(text(tool.status.to_string()).size(12).font(BOLD))
                    .padding([2.0, 10.0])
                    .style(style::pill(rgb(fill), rgb(ink))),
            ]
            .spacing(8)
            .align_y(Vertical::Center),
            text(tool.description).size(14).color(rgb(SLATE_600)),
        ]
        .spacing(8),
    )
    .into()
}
