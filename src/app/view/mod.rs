mod about;
mod base_camp;
mod expedition;
mod home;
mod join;
mod nav;
mod scene;
mod style;

use super::messages::{Message, Tab};
use super::state::{App, CARD_SPACING_PX, CONTENT_MAX_WIDTH_PX, PAGE_PADDING_PX, PAGE_SCROLL_ID};
use crate::presentation::palette::{SLATE_50, SLATE_200, SLATE_600, SLATE_900};
use iced::widget::{Column, Row, Space, column, container, scrollable, text};
use iced::{Color, Element, Length};
use style::{BOLD, rgb};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page = match self.nav.tab {
            Tab::Home => return self.home(),
            Tab::About => self.about(),
            Tab::BaseCamp => self.base_camp(),
            Tab::Expedition => self.expedition(),
            Tab::Join => self.join_page(),
        };

        let body = scrollable(
            container(container(page).max_width(CONTENT_MAX_WIDTH_PX))
                .center_x(Length::Fill)
                .padding([48.0, PAGE_PADDING_PX]),
        )
        .id(PAGE_SCROLL_ID.clone())
        .width(Length::Fill)
        .height(Length::Fill);

        container(column![self.navigation(), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::solid(rgb(SLATE_50)))
            .into()
    }

    /// Grid width for `wide` items; narrow windows stack everything.
    fn columns(&self, wide: usize) -> usize {
        if self.is_compact() { 1 } else { wide }
    }
}

/// Lays items out row by row, padding the last row so cells keep their width.
fn grid(columns: usize, items: Vec<Element<'_, Message>>) -> Element<'_, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(CARD_SPACING_PX).width(Length::Fill);
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        let mut line = Row::new().spacing(CARD_SPACING_PX).width(Length::Fill);
        for _ in 0..columns {
            line = match items.next() {
                Some(item) => line.push(item),
                None => line.push(Space::with_width(Length::Fill)),
            };
        }
        rows = rows.push(line);
    }
    rows.into()
}

fn page_hero<'a>(title: &'a str, subtitle: &'a str) -> Column<'a, Message> {
    column![
        text(title).size(44).font(BOLD).color(rgb(SLATE_900)),
        text(subtitle).size(18).color(rgb(SLATE_600)),
    ]
    .spacing(12)
}

fn heading(title: &str) -> iced::widget::Text<'_> {
    text(title).size(28).font(BOLD).color(rgb(SLATE_900))
}

/// White rounded panel used by the content pages.
fn light_card<'a>(content: impl Into<Element<'a, Message>>) -> container::Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(style::card(Color::WHITE, rgb(SLATE_200)))
}
