//! Pure renderers of the published scroll pair: reveal thresholds,
//! illustration parameters and the section palette.

mod illustration;
pub mod palette;
mod reveal;

pub use illustration::IllustrationState;
pub use reveal::{DEFAULT_REVEAL_RULES, RevealEffect, RevealRule, RevealTable};
