//! Plain value types shared by the settings and their consumers.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a rendered image.
///
/// Used both for the optional render override on
/// [`SaveSettings`](crate::SaveSettings) and for the natural size of the
/// editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl RenderSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for RenderSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
