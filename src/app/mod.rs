mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Point, Size, Theme, window};

/// Launch the landing site window with the provided configuration.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        // Close requests go through the reducer so the tracker detaches first.
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application("Meroka", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_: &App| Theme::Dark)
        .run_with(move || App::bootstrap(config))
}
