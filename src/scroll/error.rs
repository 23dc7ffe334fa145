use thiserror::Error;

/// Integration faults raised while wiring the tracker to a scroll surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// The surface exists but cannot deliver scroll notifications right now.
    #[error("scroll surface `{surface}` cannot be observed")]
    Unobservable { surface: &'static str },
}
