//! Save settings for exporting an edited photo.
//!
//! ```
//! use photoeditor_save::{CompressFormat, SaveSettings};
//!
//! let settings = SaveSettings::builder()
//!     .compress_format(CompressFormat::Jpeg)
//!     .compress_quality(85)
//!     .size(1080, 1920)
//!     .clear_views_enabled(false)
//!     .build();
//!
//! assert_eq!(settings.width(), Some(1080));
//! assert!(settings.transparency_enabled());
//! ```

// Module declarations in dependency order
pub mod utils;
pub mod core;

// Public exports for external consumers
pub use crate::core::{SaveSettings, SaveSettingsBuilder, RenderSize};
pub use crate::utils::{CompressFormat, SaveError, SaveResult, ValidationError};

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    // Another test may have installed the subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();
}
