pub mod error;
pub mod validation;
pub mod formats;

pub use error::{SaveError, SaveResult, ValidationError};
pub use validation::{validate_settings, validate_quality};
pub use formats::{CompressFormat, format_from_extension};
