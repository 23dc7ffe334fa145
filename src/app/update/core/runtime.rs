use super::super::super::messages::Message;
use super::super::super::state::{App, HOME_SCROLL_ID, PAGE_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ResetHomeScroll => {
                scrollable::snap_to(HOME_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::ResetPageScroll => {
                scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::Exit => {
                info!("Exiting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
        _ => None,
    }
}
