//! Aspect-preserving image scaling against a height cap.

use folio_flow::Flowable;
use log::{debug, error, warn};
use std::path::Path;

/// Why an image was left out of the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The height cap was zero, negative or NaN.
    InvalidMaxHeight,
    /// The image file does not exist.
    Missing,
    /// The image metadata could not be decoded.
    Unreadable,
    /// The decoded image has a zero-sized axis.
    InvalidDimensions,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidMaxHeight => "invalid max height",
            SkipReason::Missing => "file not found",
            SkipReason::Unreadable => "unreadable image data",
            SkipReason::InvalidDimensions => "invalid dimensions",
        }
    }
}

/// Outcome of [`scaled_image`]: either an image flowable sized to the cap,
/// or an explicit reason the image was skipped.
///
/// Skips are soft by design; callers degrade by omitting the image rather
/// than aborting.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutcome {
    Flowable(Flowable),
    Skipped(SkipReason),
}

impl ImageOutcome {
    pub fn into_flowable(self) -> Option<Flowable> {
        match self {
            ImageOutcome::Flowable(f) => Some(f),
            ImageOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            ImageOutcome::Flowable(_) => None,
            ImageOutcome::Skipped(reason) => Some(*reason),
        }
    }
}

/// Computes display dimensions for an image under a maximum height,
/// preserving the aspect ratio exactly.
///
/// With `upscale` disabled (the default policy), images shorter than
/// `max_height` keep their natural size; otherwise the scale factor is
/// `max_height / natural_height`. Only the image header is read; pixel
/// decoding is the engine's job.
///
/// Every failure path logs at an appropriate severity and returns
/// [`ImageOutcome::Skipped`] instead of an error.
pub fn scaled_image(path: &Path, max_height: f32, upscale: bool) -> ImageOutcome {
    // The negated comparison also rejects NaN.
    if !(max_height > 0.0) {
        error!("Invalid max_height={}; must be > 0", max_height);
        return ImageOutcome::Skipped(SkipReason::InvalidMaxHeight);
    }

    if !path.exists() {
        warn!("Image file not found: {}", path.display());
        return ImageOutcome::Skipped(SkipReason::Missing);
    }

    let (natural_width, natural_height) = match image::image_dimensions(path) {
        Ok(dims) => dims,
        Err(e) => {
            error!("Failed to read image metadata for {}: {}", path.display(), e);
            return ImageOutcome::Skipped(SkipReason::Unreadable);
        }
    };

    if natural_width == 0 || natural_height == 0 {
        error!(
            "Image has invalid dimensions ({}x{}): {}",
            natural_width,
            natural_height,
            path.display()
        );
        return ImageOutcome::Skipped(SkipReason::InvalidDimensions);
    }

    let (iw, ih) = (natural_width as f32, natural_height as f32);
    let scale = if !upscale && ih < max_height {
        1.0
    } else {
        max_height / ih
    };

    let width = iw * scale;
    let height = ih * scale;
    debug!(
        "Creating image flowable for {} scaled {:.2}x (orig={}x{}, new={:.1}x{:.1})",
        path.display(),
        scale,
        natural_width,
        natural_height,
        width,
        height
    );

    ImageOutcome::Flowable(Flowable::image(path, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn png_at(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    fn dims(outcome: ImageOutcome) -> (f32, f32) {
        match outcome.into_flowable() {
            Some(Flowable::Image { width, height, .. }) => (width, height),
            other => panic!("expected image flowable, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_max_height_is_skipped() {
        let dir = tempdir().unwrap();
        let path = png_at(dir.path(), "img.png", 10, 10);

        let outcome = scaled_image(&path, 0.0, false);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InvalidMaxHeight));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempdir().unwrap();
        let outcome = scaled_image(&dir.path().join("missing.png"), 100.0, false);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::Missing));
    }

    #[test]
    fn test_undecodable_file_is_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let outcome = scaled_image(&path, 100.0, false);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::Unreadable));
    }

    #[test]
    fn test_tall_image_is_scaled_down() {
        let dir = tempdir().unwrap();
        let path = png_at(dir.path(), "tall.png", 10, 20);

        let (width, height) = dims(scaled_image(&path, 10.0, false));
        assert_eq!((width, height), (5.0, 10.0));
    }

    #[test]
    fn test_short_image_keeps_natural_size_without_upscale() {
        let dir = tempdir().unwrap();
        let path = png_at(dir.path(), "small.png", 5, 5);

        let (width, height) = dims(scaled_image(&path, 50.0, false));
        assert_eq!((width, height), (5.0, 5.0));
    }

    #[test]
    fn test_short_image_grows_with_upscale() {
        let dir = tempdir().unwrap();
        let path = png_at(dir.path(), "small.png", 5, 5);

        let (width, height) = dims(scaled_image(&path, 50.0, true));
        assert_eq!((width, height), (50.0, 50.0));
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        let dir = tempdir().unwrap();
        let path = png_at(dir.path(), "wide.png", 300, 100);

        let (width, height) = dims(scaled_image(&path, 50.0, false));
        assert_eq!(height, 50.0);
        assert!((width / height - 3.0).abs() < 1e-5);
    }
}
