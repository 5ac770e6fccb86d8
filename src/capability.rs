use image::ImageFormat;

use crate::error::IconError;

/// Message printed when the build cannot encode PNG.
pub const MISSING_PNG_MESSAGE: &str =
    "PNG support is required. Build the image crate with its \"png\" feature enabled.";

/// Checks once at startup that the linked `image` crate can write PNG files.
pub fn png_support() -> Result<(), IconError> {
    if ImageFormat::Png.writing_enabled() {
        Ok(())
    } else {
        tracing::error!("image crate was built without PNG encoding");
        Err(IconError::MissingCapability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_enabled_in_this_build() {
        assert!(png_support().is_ok());
    }
}
