//! Immutable save settings and their builder.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::core::RenderSize;
use crate::utils::validation::{self, MAX_QUALITY};
use crate::utils::{CompressFormat, SaveResult};

pub const DEFAULT_COMPRESS_QUALITY: u32 = 100;

/// Options applied when the editor saves its canvas to an image.
///
/// Created through [`SaveSettingsBuilder`] (or deserialized from config) and
/// read-only afterwards. The export routine consults it for alpha handling,
/// encoder parameters, output size and post-save cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveSettings {
    transparency_enabled: bool,
    clear_views_enabled: bool,
    compress_format: CompressFormat,
    /// Stored as given, even outside 0..=100
    compress_quality: u32,
    size: Option<RenderSize>,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            transparency_enabled: true,
            clear_views_enabled: true,
            compress_format: CompressFormat::Png,
            compress_quality: DEFAULT_COMPRESS_QUALITY,
            size: None,
        }
    }
}

impl SaveSettings {
    /// Create a builder initialised with the defaults
    pub fn builder() -> SaveSettingsBuilder {
        SaveSettingsBuilder::default()
    }

    /// Builder seeded with these settings, for deriving variants
    pub fn to_builder(&self) -> SaveSettingsBuilder {
        SaveSettingsBuilder { settings: *self }
    }

    /// Whether the alpha channel is kept when saving.
    pub fn transparency_enabled(&self) -> bool {
        self.transparency_enabled
    }

    /// Whether overlay views are cleared from the editor after the save completes.
    pub fn clear_views_enabled(&self) -> bool {
        self.clear_views_enabled
    }

    pub fn compress_format(&self) -> CompressFormat {
        self.compress_format
    }

    /// Quality exactly as configured; see [`Self::encoder_quality`] for the clamped value.
    pub fn compress_quality(&self) -> u32 {
        self.compress_quality
    }

    /// Render size override, if any.
    pub fn size(&self) -> Option<RenderSize> {
        self.size
    }

    pub fn width(&self) -> Option<u32> {
        self.size.map(|s| s.width)
    }

    pub fn height(&self) -> Option<u32> {
        self.size.map(|s| s.height)
    }

    /// Quality clamped to 0..=100 for handing to an encoder.
    pub fn encoder_quality(&self) -> u8 {
        self.compress_quality.min(MAX_QUALITY) as u8
    }

    /// The alpha channel has to be flattened before encoding.
    pub fn removes_transparency(&self) -> bool {
        !self.transparency_enabled
    }

    /// Whether the saved file will actually carry alpha.
    ///
    /// JPEG cannot, regardless of the transparency flag.
    pub fn keeps_alpha(&self) -> bool {
        self.transparency_enabled && self.compress_format.supports_alpha()
    }

    /// Size to render at: the override when set, otherwise `natural`.
    pub fn render_size(&self, natural: RenderSize) -> RenderSize {
        self.size.unwrap_or(natural)
    }

    pub fn file_extension(&self) -> &'static str {
        self.compress_format.primary_extension()
    }

    /// Checks the quality range and size override.
    pub fn validate(&self) -> SaveResult<()> {
        validation::validate_settings(self)
    }

    /// Load settings from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> SaveResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        debug!(?settings, "Loaded save settings from config");
        Ok(settings)
    }

    pub fn to_json(&self) -> SaveResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for [`SaveSettings`].
///
/// Setters take and return the builder by value so calls chain. The builder
/// is `Copy`; `build` snapshots the current state and can be called any
/// number of times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSettingsBuilder {
    settings: SaveSettings,
}

impl SaveSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the alpha channel when saving. When disabled the export flattens
    /// transparency before encoding.
    pub fn transparency_enabled(mut self, enabled: bool) -> Self {
        self.settings.transparency_enabled = enabled;
        self
    }

    /// Clear all overlay views from the editor once the image is saved.
    pub fn clear_views_enabled(mut self, enabled: bool) -> Self {
        self.settings.clear_views_enabled = enabled;
        self
    }

    /// Set the output codec: PNG, JPEG or WEBP.
    pub fn compress_format(mut self, format: CompressFormat) -> Self {
        self.settings.compress_format = format;
        self
    }

    /// Set the compression quality, expected between 0 and 100.
    ///
    /// Out-of-range values are stored unchanged; use
    /// [`SaveSettings::validate`] or [`Self::try_build`] to reject them.
    pub fn compress_quality(mut self, quality: u32) -> Self {
        if quality > MAX_QUALITY {
            warn!("Compression quality {} is outside 0..={}", quality, MAX_QUALITY);
        }
        self.settings.compress_quality = quality;
        self
    }

    /// Override the render size. Without it the editor's own size is used.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.settings.size = Some(RenderSize::new(width, height));
        self
    }

    /// Snapshot the current state into immutable settings.
    pub fn build(&self) -> SaveSettings {
        debug!(settings = ?self.settings, "Built save settings");
        self.settings
    }

    /// Like [`Self::build`], but fails when the settings do not validate.
    pub fn try_build(&self) -> SaveResult<SaveSettings> {
        let settings = self.build();
        settings.validate()?;
        Ok(settings)
    }
}

impl From<SaveSettings> for SaveSettingsBuilder {
    fn from(settings: SaveSettings) -> Self {
        Self { settings }
    }
}
