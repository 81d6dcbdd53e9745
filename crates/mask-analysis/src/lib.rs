//! # Binary Mask Region Analysis
//!
//! A small library for analyzing binary masks, like the ones produced by
//! skin/color detection filters: locate the connected foreground regions,
//! pick the one with the largest area and derive simple geometric
//! descriptors from it (centroid, bounding rectangle, minimum enclosing
//! circle).
//!
//! ## Core Features
//!
//! - **Dominant-region descriptors**: count regions, then query the
//!   largest one as a centroid, raw outline, bounding box or enclosing
//!   circle
//! - **Absence is not failure**: a missing mask or an all-background mask
//!   reports `Ok(None)`, never an error
//! - **Pluggable extraction**: contour tracing sits behind the
//!   [`RegionExtractor`] trait; the default binds `imageproc`'s border
//!   following
//! - **Optional denoising**: morphological opening/closing preprocessors
//!   for speckled detector output
//!
//! ## Quick Start
//!
//! ```rust
//! use image::{GrayImage, Luma};
//! use mask_analysis::MaskAnalyzer;
//!
//! // a 64x64 mask with one filled square
//! let mut mask = GrayImage::new(64, 64);
//! for y in 16..48 {
//!     for x in 16..48 {
//!         mask.put_pixel(x, y, Luma([255u8]));
//!     }
//! }
//!
//! let analyzer = MaskAnalyzer::default();
//! if analyzer.count_regions(Some(&mask))?.unwrap_or(0) > 0 {
//!     let rect = analyzer.largest_region_bounding_box(Some(&mask))?;
//!     let center = analyzer.largest_region_centroid(Some(&mask))?;
//!     println!("{rect:?} centered on {center:?}");
//! }
//! # Ok::<(), mask_analysis::AnalysisError>(())
//! ```

pub mod algorithms;
pub mod analyzer;
pub mod error;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use analyzer::MaskAnalyzer;
pub use error::{AnalysisError, Result};
pub use traits::*;
pub use types::{BoundingBox, Centroid, EnclosingCircle, Region};
