use image::GrayImage;
use tracing::{debug, trace};

use crate::{
    algorithms::{BinaryNormalizer, ImageprocRegionExtractor},
    error::Result,
    traits::{MaskPreprocessor, RegionExtractor},
    types::{BoundingBox, Centroid, EnclosingCircle, Region},
};

/// Analyzes binary masks, like the ones returned by color detection
/// filters: finds the foreground region with the largest area and derives
/// simple geometric descriptors from it.
///
/// Every operation takes `Option<&GrayImage>` and reports the two benign
/// "nothing to analyze" conditions as `Ok(None)`: an absent mask, or a mask
/// with no foreground regions. Only genuinely exceptional situations occupy
/// the error channel. Operations are pure functions of the mask at call
/// time; no state is carried between calls, and the caller's buffer is
/// never touched (analysis runs on a binarized internal copy).
pub struct MaskAnalyzer {
    preprocessors: Vec<Box<dyn MaskPreprocessor>>,
    extractor: Box<dyn RegionExtractor>,
}

impl Default for MaskAnalyzer {
    fn default() -> Self {
        Self {
            preprocessors: Vec::new(),
            extractor: Box::new(ImageprocRegionExtractor),
        }
    }
}

impl MaskAnalyzer {
    /// Create an analyzer with a custom region extractor.
    pub fn new<E>(extractor: E) -> Self
    where
        E: RegionExtractor + 'static,
    {
        Self {
            preprocessors: Vec::new(),
            extractor: Box::new(extractor),
        }
    }

    /// Append a preprocessing step (e.g. a denoiser) applied to the
    /// internal copy before extraction, in insertion order.
    pub fn with_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: MaskPreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Total number of regions present on the mask, including hole borders.
    ///
    /// Returns `Ok(None)` when no mask is supplied and `Ok(Some(0))` when
    /// the mask has no foreground. Call this before the descriptor
    /// operations to confirm there is at least one region to report.
    pub fn count_regions(&self, mask: Option<&GrayImage>) -> Result<Option<usize>> {
        let Some(mask) = mask else { return Ok(None) };
        let regions = self.extract(mask)?;
        Ok(Some(regions.len()))
    }

    /// Centroid of the region with the largest area, from the boundary's
    /// zeroth and first moments, truncated to integer pixel coordinates.
    ///
    /// Unlike the other descriptor operations this one can fail: a winning
    /// region with zero enclosed area (single point, 1-pixel-wide line) has
    /// no defined centroid and yields
    /// [`AnalysisError::DegenerateRegion`](crate::AnalysisError::DegenerateRegion)
    /// instead of a division by zero.
    pub fn largest_region_centroid(&self, mask: Option<&GrayImage>) -> Result<Option<Centroid>> {
        match self.largest_region_outline(mask)? {
            Some(region) => region.centroid().map(Some),
            None => Ok(None),
        }
    }

    /// Raw boundary of the region with the largest area.
    pub fn largest_region_outline(&self, mask: Option<&GrayImage>) -> Result<Option<Region>> {
        let Some(mask) = mask else { return Ok(None) };
        let regions = self.extract(mask)?;
        Ok(Self::select_largest(regions))
    }

    /// Smallest axis-aligned rectangle around the region with the largest
    /// area.
    pub fn largest_region_bounding_box(
        &self,
        mask: Option<&GrayImage>,
    ) -> Result<Option<BoundingBox>> {
        Ok(self
            .largest_region_outline(mask)?
            .and_then(|region| region.bounding_box()))
    }

    /// Minimum enclosing circle of the region with the largest area,
    /// center and radius truncated to integers.
    pub fn largest_region_enclosing_circle(
        &self,
        mask: Option<&GrayImage>,
    ) -> Result<Option<EnclosingCircle>> {
        Ok(self
            .largest_region_outline(mask)?
            .and_then(|region| region.enclosing_circle()))
    }

    /// Normalize a copy of the mask and run the extractor on it.
    fn extract(&self, mask: &GrayImage) -> Result<Vec<Region>> {
        let mut working = mask.clone();
        for preprocessor in &self.preprocessors {
            working = preprocessor.preprocess(&working)?;
        }
        let binary = BinaryNormalizer.preprocess(&working)?;

        let regions = self.extractor.extract_regions(&binary)?;
        debug!(regions = regions.len(), "extracted regions from mask");
        Ok(regions)
    }

    /// Region with the maximum area; ties go to the first in enumeration
    /// order.
    fn select_largest(regions: Vec<Region>) -> Option<Region> {
        let mut best_index = None;
        let mut best_area = f32::NEG_INFINITY;
        for (index, region) in regions.iter().enumerate() {
            let area = region.area();
            if best_index.is_none() || area > best_area {
                best_index = Some(index);
                best_area = area;
            }
        }

        let index = best_index?;
        trace!(index, area = best_area, "selected largest region");
        regions.into_iter().nth(index)
    }
}
