use image::GrayImage;
use crate::{error::Result, traits::RegionExtractor, types::Region};

/// Region extractor backed by `imageproc`'s Suzuki-Abe border following.
///
/// Every non-zero pixel is treated as foreground. Outer borders and hole
/// borders are reported as separate regions, in raster-scan order.
#[derive(Debug, Clone, Default)]
pub struct ImageprocRegionExtractor;

impl RegionExtractor for ImageprocRegionExtractor {
    fn extract_regions(&self, binary: &GrayImage) -> Result<Vec<Region>> {
        let contours = imageproc::contours::find_contours::<i32>(binary);

        let regions = contours
            .into_iter()
            .map(|contour| Region {
                boundary: contour
                    .points
                    .iter()
                    .map(|p| [p.x as f32, p.y as f32])
                    .collect(),
            })
            .collect();

        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn empty_mask_yields_no_regions() {
        let mask = GrayImage::new(16, 16);
        let regions = ImageprocRegionExtractor.extract_regions(&mask).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn filled_square_yields_one_outer_border() {
        let mut mask = GrayImage::new(16, 16);
        for y in 4..12 {
            for x in 4..12 {
                mask.put_pixel(x, y, Luma([255u8]));
            }
        }

        let regions = ImageprocRegionExtractor.extract_regions(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert!(!regions[0].is_empty());
    }

    #[test]
    fn ring_reports_outer_and_hole_borders() {
        let mut mask = GrayImage::new(20, 20);
        for y in 2..18 {
            for x in 2..18 {
                mask.put_pixel(x, y, Luma([255u8]));
            }
        }
        for y in 7..13 {
            for x in 7..13 {
                mask.put_pixel(x, y, Luma([0u8]));
            }
        }

        let regions = ImageprocRegionExtractor.extract_regions(&mask).unwrap();
        assert_eq!(regions.len(), 2);
    }
}
