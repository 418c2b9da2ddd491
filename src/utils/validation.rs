use crate::core::SaveSettings;
use crate::utils::{SaveResult, ValidationError};

pub const MAX_QUALITY: u32 = 100;

/// Validates save settings.
///
/// Building never enforces these rules; callers that want strict settings
/// run this before handing them to an encoder.
pub fn validate_settings(settings: &SaveSettings) -> SaveResult<()> {
    validate_quality(settings.compress_quality())?;

    if let Some(size) = settings.size() {
        if size.width == 0 {
            return Err(ValidationError::size("Width cannot be 0").into());
        }
        if size.height == 0 {
            return Err(ValidationError::size("Height cannot be 0").into());
        }
    }

    Ok(())
}

/// Validates a compression quality value
pub fn validate_quality(quality: u32) -> SaveResult<()> {
    if quality > MAX_QUALITY {
        return Err(ValidationError::Quality(quality).into());
    }
    Ok(())
}
