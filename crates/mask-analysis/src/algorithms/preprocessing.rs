use image::GrayImage;
use imageproc::contrast::ThresholdType;
use imageproc::distance_transform::Norm;

use crate::{error::Result, traits::MaskPreprocessor};

/// Normalizes a mask to strict binary: every non-zero pixel becomes 255.
///
/// The analyzer always runs this on an internal copy immediately before
/// extraction, so callers may pass masks with arbitrary foreground values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryNormalizer;

impl MaskPreprocessor for BinaryNormalizer {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(mask, 0, ThresholdType::Binary))
    }
}

/// Morphological opening: removes foreground speckles smaller than the
/// structuring radius.
#[derive(Debug, Clone)]
pub struct OpeningDenoiser {
    pub radius: u8,
}

impl Default for OpeningDenoiser {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl MaskPreprocessor for OpeningDenoiser {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::morphology::open(mask, Norm::LInf, self.radius))
    }
}

/// Morphological closing: fills background pinholes smaller than the
/// structuring radius.
#[derive(Debug, Clone)]
pub struct ClosingDenoiser {
    pub radius: u8,
}

impl Default for ClosingDenoiser {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

impl MaskPreprocessor for ClosingDenoiser {
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::morphology::close(mask, Norm::LInf, self.radius))
    }
}
