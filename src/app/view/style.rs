//! Colour conversion and widget style closures shared by the views.

use crate::presentation::palette::{
    AMBER_400, AMBER_500, ORANGE_500, Rgb, SLATE_100, SLATE_200, SLATE_300, SLATE_800, SLATE_900,
    SectionGradient,
};
use iced::font::Weight;
use iced::gradient::Linear;
use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Degrees, Font, Gradient, Theme};

pub(super) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub(super) const ITALIC: Font = Font {
    style: iced::font::Style::Italic,
    ..Font::DEFAULT
};

pub(super) fn rgb(color: Rgb) -> Color {
    Color::from_rgb8(color[0], color[1], color[2])
}

pub(super) fn rgba(color: Rgb, alpha: f32) -> Color {
    Color::from_rgba8(color[0], color[1], color[2], alpha)
}

fn vertical_gradient(gradient: SectionGradient) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(180.0))
            .add_stop(0.0, rgb(gradient.from))
            .add_stop(0.5, rgb(gradient.via))
            .add_stop(1.0, rgb(gradient.to)),
    ))
}

pub(super) fn section_backdrop(gradient: SectionGradient) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(vertical_gradient(gradient)),
        ..container::Style::default()
    }
}

pub(super) fn solid(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Rounded panel with a hairline border.
pub(super) fn card(fill: Color, edge: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: edge,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Small rounded label, e.g. a status chip.
pub(super) fn pill(fill: Color, ink: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(ink),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub(super) fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active {
            rgb(AMBER_400)
        } else if matches!(status, button::Status::Hovered) {
            Color::WHITE
        } else {
            rgb(SLATE_300)
        };
        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}

/// Amber call-to-action button.
pub(super) fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => AMBER_400,
        _ => AMBER_500,
    };
    button::Style {
        background: Some(Background::Color(rgb(fill))),
        text_color: rgb(SLATE_900),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Outlined button for use on dark backgrounds.
pub(super) fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1)))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: Color::WHITE,
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

pub(super) fn filter_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (fill, ink) = if active {
            (rgb(SLATE_800), Color::WHITE)
        } else if matches!(status, button::Status::Hovered) {
            (rgb(SLATE_200), rgb(SLATE_800))
        } else {
            (rgb(SLATE_100), rgb(SLATE_800))
        };
        button::Style {
            background: Some(Background::Color(fill)),
            text_color: ink,
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Top-of-page scroll indicator: amber to orange on a translucent track.
pub(super) fn scroll_indicator(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(rgba(SLATE_800, 0.5)),
        bar: Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(90.0))
                .add_stop(0.0, rgb(AMBER_400))
                .add_stop(1.0, rgb(ORANGE_500)),
        )),
        border: Border::default(),
    }
}

pub(super) fn meter(fill: Color) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: Background::Color(rgb(SLATE_100)),
        bar: Background::Color(fill),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
    }
}
