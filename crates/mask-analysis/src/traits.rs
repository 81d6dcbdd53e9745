use image::GrayImage;
use crate::{error::Result, types::Region};

/// Trait for mask preprocessing algorithms (normalization, denoising)
pub trait MaskPreprocessor: Send + Sync {
    /// Produce a cleaned-up copy of the input mask
    fn preprocess(&self, mask: &GrayImage) -> Result<GrayImage>;
}

/// Trait for connected-region boundary extraction algorithms
pub trait RegionExtractor: Send + Sync {
    /// Extract the boundary of every foreground region in a binary mask.
    ///
    /// Outer borders and hole borders are both reported, each as its own
    /// region, in the extractor's enumeration order.
    fn extract_regions(&self, binary: &GrayImage) -> Result<Vec<Region>>;
}
