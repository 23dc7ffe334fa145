use super::super::messages::{Message, Tab};
use super::super::state::{
    App, CONTENT_MAX_WIDTH_PX, HOME_SCROLL_ID, PAGE_PADDING_PX, PROGRESS_BAR_HEIGHT_PX,
};
use super::grid;
use super::scene::MountainScene;
use super::style::{self, BOLD, ITALIC, rgba};
use crate::content::{Card, EXPLORER_COUNT, SECTIONS, Section, SectionKind, Stat};
use crate::presentation::palette::{
    self, AMBER_300, AMBER_400, GREEN_500, SLATE_200, SLATE_300, SLATE_400, SLATE_500, SLATE_700,
    SLATE_800, SLATE_900, TEAL_200,
};
use crate::scroll::ScrollMetrics;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Space, button, canvas, column, container, progress_bar, row, scrollable, stack, text,
};
use iced::{Color, Element, Length};

/// Only the active section's copy is drawn; the rest keep their height.
const INACTIVE_ALPHA: f32 = 0.0;

fn section_alpha(active: bool) -> f32 {
    if active { 1.0 } else { INACTIVE_ALPHA }
}

impl App {
    pub(super) fn home(&self) -> Element<'_, Message> {
        let latest = self.tracker.latest();

        let backdrop = container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::section_backdrop(palette::section_background(
                latest.section,
            )));

        let scene = canvas(MountainScene::new(self.illustration()))
            .width(Length::Fill)
            .height(Length::Fill);

        let section_height = self.viewport.window_height.max(1.0);
        let sections = Column::with_children(SECTIONS.iter().enumerate().map(|(index, section)| {
            self.home_section(section, index == latest.section, section_height)
        }));
        let sections = scrollable(sections)
            .id(HOME_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| {
                Message::Scrolled(ScrollMetrics::new(
                    viewport.absolute_offset().y,
                    viewport.content_bounds().height,
                    viewport.bounds().height,
                ))
            });

        let indicator = progress_bar(0.0..=1.0, palette::progress_bar_fill(latest.progress))
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT_PX))
            .style(style::scroll_indicator);

        stack![backdrop, scene, sections, column![indicator, self.navigation()]].into()
    }

    fn home_section(
        &self,
        section: &'static Section,
        active: bool,
        height: f32,
    ) -> Element<'_, Message> {
        let fade = section_alpha(active);
        let ink = |color| rgba(color, fade);
        let centered = !matches!(section.kind, SectionKind::OldMap);
        let align = if centered {
            Horizontal::Center
        } else {
            Horizontal::Left
        };
        let line = |content: &'static str, size: f32, color: Color| {
            text(content)
                .size(size)
                .color(color)
                .width(Length::Fill)
                .align_x(align)
        };

        let mut body = Column::new().spacing(20).align_x(align).width(Length::Fill);

        if let Some(eyebrow) = section.eyebrow {
            body = body.push(line(eyebrow, 13.0, ink(SLATE_500)));
        }
        if let Some(lead) = section.lead {
            body = body.push(line(lead, 26.0, ink(SLATE_300)));
        }
        let headline_size = match section.kind {
            SectionKind::Hook | SectionKind::Reframe | SectionKind::Invitation => 52.0,
            _ => 38.0,
        };
        body = body.push(line(section.headline, headline_size, ink([255, 255, 255])).font(BOLD));
        if let Some(accent) = section.accent {
            let accent_color = match section.kind {
                SectionKind::Reframe => ink(AMBER_400),
                SectionKind::OldMap => ink(SLATE_400),
                _ => ink(SLATE_300),
            };
            body = body.push(line(accent, 26.0, accent_color));
        }

        if !section.stats.is_empty() {
            body = body.push(grid(
                self.columns(section.stats.len()),
                section.stats.iter().map(|stat| stat_tile(stat, fade)).collect(),
            ));
        }
        if !section.cards.is_empty() {
            body = body.push(grid(
                self.columns(section.cards.len()),
                section
                    .cards
                    .iter()
                    .map(|card| narrative_card(card, section.kind, fade))
                    .collect(),
            ));
        }

        match section.kind {
            SectionKind::Hook => {
                if let Some((&intro, rest)) = section.body.split_first() {
                    body = body.push(line(intro, 18.0, ink(SLATE_400)));
                    for &cue in rest {
                        body = body.push(line(cue, 14.0, ink(SLATE_500)));
                        body = body.push(line("↓", 20.0, ink(SLATE_500)));
                    }
                }
            }
            SectionKind::Reframe => {
                for &quote in section.body {
                    body = body.push(line(quote, 24.0, ink(TEAL_200)).font(ITALIC));
                }
            }
            SectionKind::Invitation => {
                let actions = row![
                    button(text("Join the Expedition").size(18).font(BOLD))
                        .padding([14.0, 28.0])
                        .style(style::cta)
                        .on_press(Message::SelectTab(Tab::Join)),
                    button(text("See the Map").size(18))
                        .padding([14.0, 28.0])
                        .style(style::ghost)
                        .on_press(Message::SelectTab(Tab::Expedition)),
                ]
                .spacing(16);
                body = body.push(actions);
                body = body.push(
                    row![
                        text("●").size(12).color(ink(GREEN_500)),
                        text(EXPLORER_COUNT.to_string())
                            .font(BOLD)
                            .color(ink([255, 255, 255])),
                        text("explorers on the expedition").color(ink(SLATE_300)),
                    ]
                    .spacing(8)
                    .align_y(Vertical::Center),
                );
                for &closing in section.body {
                    body = body.push(line(closing, 16.0, ink(SLATE_400)).font(ITALIC));
                }
            }
            _ => {
                for (index, &paragraph) in section.body.iter().enumerate() {
                    let color = if index == 0 { SLATE_300 } else { SLATE_400 };
                    body = body.push(line(paragraph, 18.0, ink(color)));
                }
            }
        }

        let content: Element<'_, Message> = if section.kind == SectionKind::OldMap {
            container(body)
                .padding(40)
                .style(style::card(
                    rgba(SLATE_900, 0.6 * fade),
                    rgba(SLATE_700, 0.5 * fade),
                ))
                .into()
        } else {
            body.into()
        };

        // The strut keeps every section at least one viewport tall.
        row![
            Space::new(Length::Fixed(0.0), Length::Fixed(height)),
            container(container(content).max_width(CONTENT_MAX_WIDTH_PX))
                .center_x(Length::Fill)
                .padding([48.0, PAGE_PADDING_PX]),
        ]
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .into()
    }
}

fn stat_tile(stat: &'static Stat, fade: f32) -> Element<'static, Message> {
    container(
        column![
            text(stat.value)
                .size(28)
                .font(BOLD)
                .color(rgba(AMBER_400, fade)),
            text(stat.label).size(12).color(rgba(SLATE_400, fade)),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::card(rgba(SLATE_800, 0.5 * fade), rgba(SLATE_700, 0.3 * fade)))
    .into()
}

fn narrative_card(card: &'static Card, kind: SectionKind, fade: f32) -> Element<'static, Message> {
    let title_color = match kind {
        SectionKind::TheMath => AMBER_300,
        _ => [255, 255, 255],
    };
    let mut tile = Column::new().spacing(8).push(
        text(card.title)
            .size(20)
            .font(BOLD)
            .color(rgba(title_color, fade)),
    );
    if let Some(headline) = card.headline {
        tile = tile.push(text(headline).size(15).color(rgba(AMBER_400, fade)));
    }
    tile = tile.push(text(card.description).size(14).color(rgba(SLATE_200, fade)));

    container(tile)
        .padding(24)
        .width(Length::Fill)
        .style(style::card(
            Color::from_rgba(1.0, 1.0, 1.0, 0.05 * fade),
            Color::from_rgba(1.0, 1.0, 1.0, 0.1 * fade),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_section_is_visible() {
        assert_eq!(section_alpha(true), 1.0);
        assert_eq!(section_alpha(false), 0.0);
    }
}
