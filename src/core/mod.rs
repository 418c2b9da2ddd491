//! Core settings types.
//!
//! - [`SaveSettings`]: Immutable options for saving the edited image
//! - [`SaveSettingsBuilder`]: Chainable builder producing [`SaveSettings`]
//! - [`RenderSize`]: Pixel dimensions for the render override

mod settings;
mod types;

pub use settings::{SaveSettings, SaveSettingsBuilder, DEFAULT_COMPRESS_QUALITY};
pub use types::RenderSize;
