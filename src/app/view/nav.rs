use super::super::messages::{Message, Tab};
use super::super::state::{App, NAV_HEIGHT_PX, PAGE_PADDING_PX};
use super::style::{self, BOLD, rgb, rgba};
use crate::presentation::palette::{self, AMBER_400, SLATE_800, SLATE_900};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, button, column, container, horizontal_space, row, text};
use iced::{Element, Length};

impl App {
    pub(super) fn navigation(&self) -> Element<'_, Message> {
        let opacity = palette::nav_opacity(self.on_home(), self.tracker.latest().progress);

        let brand = button(
            row![
                text("MEROKA").size(24).font(BOLD),
                text(".").size(24).font(BOLD).color(rgb(AMBER_400)),
            ]
            .align_y(Vertical::Center),
        )
        .style(style::nav_link(false))
        .on_press(Message::SelectTab(Tab::Home));

        let trailing: Element<'_, Message> = if self.is_compact() {
            let label = if self.nav.mobile_menu_open { "Close" } else { "Menu" };
            button(text(label).size(14))
                .style(style::nav_link(false))
                .on_press(Message::ToggleMobileMenu)
                .into()
        } else {
            let links = Row::with_children(Tab::NAV.iter().map(|&tab| {
                button(text(tab.to_string()).size(14))
                    .style(style::nav_link(self.nav.tab == tab))
                    .on_press(Message::SelectTab(tab))
                    .into()
            }))
            .spacing(24)
            .align_y(Vertical::Center);
            row![links, join_button()]
                .spacing(24)
                .align_y(Vertical::Center)
                .into()
        };

        let bar = container(
            row![brand, horizontal_space(), trailing]
                .align_y(Vertical::Center)
                .padding([0.0, PAGE_PADDING_PX]),
        )
        .width(Length::Fill)
        .height(Length::Fixed(NAV_HEIGHT_PX))
        .align_y(Vertical::Center)
        .style(style::solid(rgba(SLATE_900, opacity)));

        if self.is_compact() && self.nav.mobile_menu_open {
            column![bar, self.mobile_menu()].into()
        } else {
            bar.into()
        }
    }

    fn mobile_menu(&self) -> Element<'_, Message> {
        let entries = Tab::NAV.iter().map(|&tab| {
            let active = self.nav.tab == tab;
            let entry = button(
                text(tab.to_string())
                    .size(14)
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            )
            .width(Length::Fill)
            .padding([12.0, PAGE_PADDING_PX])
            .style(style::nav_link(active))
            .on_press(Message::SelectTab(tab));
            if active {
                container(entry)
                    .style(style::solid(rgba(SLATE_800, 0.5)))
                    .into()
            } else {
                entry.into()
            }
        });

        container(
            Column::with_children(entries)
                .push(
                    container(join_button().width(Length::Fill))
                        .padding([12.0, PAGE_PADDING_PX]),
                )
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .padding([16.0, 0.0])
        .style(style::solid(rgba(SLATE_900, palette::NAV_PAGE_OPACITY)))
        .into()
    }
}

fn join_button<'a>() -> iced::widget::Button<'a, Message> {
    button(text("Join the Expedition").size(14).font(BOLD))
        .padding([8.0, 16.0])
        .style(style::cta)
        .on_press(Message::SelectTab(Tab::Join))
}
