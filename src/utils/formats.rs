use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::SaveError;

/// Output codec for a saved image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl CompressFormat {
    pub const ALL: [CompressFormat; 3] = [Self::Png, Self::Jpeg, Self::Webp];

    /// Lowercase canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Png => &["png"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Webp => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &'static str {
        self.extensions()[0]
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// PNG ignores the quality setting.
    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Png)
    }

    /// Whether the encoded output can carry an alpha channel
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

impl fmt::Display for CompressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressFormat {
    type Err = SaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            _ => Err(SaveError::format(format!(
                "Unsupported image format: {}", s
            ))),
        }
    }
}

#[cfg(feature = "image")]
impl From<CompressFormat> for image::ImageFormat {
    fn from(format: CompressFormat) -> Self {
        match format {
            CompressFormat::Png => image::ImageFormat::Png,
            CompressFormat::Jpeg => image::ImageFormat::Jpeg,
            CompressFormat::Webp => image::ImageFormat::WebP,
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: &str) -> Result<CompressFormat, SaveError> {
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| SaveError::format(
            format!("File has no extension: {}", path)
        ))?;

    CompressFormat::from_str(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("PNG".parse::<CompressFormat>().unwrap(), CompressFormat::Png);
        assert_eq!("jpg".parse::<CompressFormat>().unwrap(), CompressFormat::Jpeg);
        assert_eq!("Jpeg".parse::<CompressFormat>().unwrap(), CompressFormat::Jpeg);
        assert_eq!("webp".parse::<CompressFormat>().unwrap(), CompressFormat::Webp);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "bmp".parse::<CompressFormat>().unwrap_err();
        assert!(matches!(err, SaveError::Format(_)));
        assert_eq!(err.to_string(), "Format error: Unsupported image format: bmp");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in CompressFormat::ALL {
            assert_eq!(format.to_string().parse::<CompressFormat>().unwrap(), format);
        }
    }

    #[test]
    fn format_properties() {
        assert!(CompressFormat::Png.is_lossless());
        assert!(!CompressFormat::Jpeg.is_lossless());
        assert!(!CompressFormat::Webp.is_lossless());

        assert!(CompressFormat::Png.supports_alpha());
        assert!(CompressFormat::Webp.supports_alpha());
        assert!(!CompressFormat::Jpeg.supports_alpha());

        assert_eq!(CompressFormat::Jpeg.primary_extension(), "jpg");
        assert!(CompressFormat::Jpeg.matches_extension("JPEG"));
        assert_eq!(CompressFormat::Webp.mime_type(), "image/webp");
    }

    #[test]
    fn format_from_path_extension() {
        assert_eq!(format_from_extension("out/photo.JPG").unwrap(), CompressFormat::Jpeg);
        assert_eq!(format_from_extension("edited.webp").unwrap(), CompressFormat::Webp);
        assert!(format_from_extension("no_extension").is_err());
        assert!(format_from_extension("image.tiff").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CompressFormat::Webp).unwrap(), "\"webp\"");
        let format: CompressFormat = serde_json::from_str("\"jpeg\"").unwrap();
        assert_eq!(format, CompressFormat::Jpeg);
    }

    #[cfg(feature = "image")]
    #[test]
    fn maps_to_image_crate_formats() {
        assert_eq!(image::ImageFormat::from(CompressFormat::Webp), image::ImageFormat::WebP);
        assert_eq!(image::ImageFormat::from(CompressFormat::Jpeg), image::ImageFormat::Jpeg);
    }
}
