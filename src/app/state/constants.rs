use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants shared by the views.
pub(crate) const NAV_HEIGHT_PX: f32 = 64.0;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 4.0;
pub(crate) const CONTENT_MAX_WIDTH_PX: f32 = 1024.0;
pub(crate) const PAGE_PADDING_PX: f32 = 24.0;
pub(crate) const CARD_SPACING_PX: f32 = 16.0;
pub(crate) static HOME_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("home-scroll"));
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
