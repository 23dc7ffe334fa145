mod core;
mod forms;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ResetHomeScroll,
    ResetPageScroll,
    Exit,
}
