use serde::{Deserialize, Serialize};
use geo_types::{Coord, LineString, Polygon};

use crate::algorithms::geometry::smallest_enclosing_circle;
use crate::error::{AnalysisError, Result};

/// One connected foreground region, represented by the ordered sequence of
/// boundary points (pixel coordinates) along its outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub boundary: Vec<[f32; 2]>,
}

/// Centroid of a region, truncated to integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: i32,
    pub y: i32,
}

/// Smallest axis-aligned rectangle containing a region's boundary.
///
/// `(x, y)` is the top-left corner; width and height count whole pixels, so
/// a boundary spanning columns 3..=7 has width 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Minimum enclosing circle of a region's boundary, truncated to integer
/// pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingCircle {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl Region {
    /// Convert to a geo-types Polygon for geometric operations
    pub fn to_geo_polygon(&self) -> Polygon<f32> {
        let coords: Vec<Coord<f32>> = self.boundary
            .iter()
            .map(|&[x, y]| Coord { x, y })
            .collect();

        Polygon::new(LineString::new(coords), vec![])
    }

    /// Area enclosed by the boundary, via the shoelace formula.
    ///
    /// This is polygon area over the boundary points, not a pixel count, so
    /// a single-point or collinear boundary has area zero.
    pub fn area(&self) -> f32 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Centroid of the enclosed area from the boundary's zeroth and first
    /// moments: (M10 / M00, M01 / M00), truncated to integers.
    ///
    /// Fails with [`AnalysisError::DegenerateRegion`] when M00 is zero.
    pub fn centroid(&self) -> Result<Centroid> {
        use geo::{Area, Centroid as _};

        let polygon = self.to_geo_polygon();
        if polygon.unsigned_area() == 0.0 {
            return Err(AnalysisError::DegenerateRegion);
        }

        let center = polygon.centroid().ok_or(AnalysisError::DegenerateRegion)?;
        Ok(Centroid {
            x: center.x() as i32,
            y: center.y() as i32,
        })
    }

    /// Smallest axis-aligned rectangle containing the boundary, or `None`
    /// for an empty boundary.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let &[first_x, first_y] = self.boundary.first()?;
        let (mut min_x, mut min_y) = (first_x, first_y);
        let (mut max_x, mut max_y) = (first_x, first_y);

        for &[x, y] in &self.boundary {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Some(BoundingBox {
            x: min_x as i32,
            y: min_y as i32,
            width: (max_x - min_x) as u32 + 1,
            height: (max_y - min_y) as u32 + 1,
        })
    }

    /// Minimum enclosing circle of the boundary points, or `None` for an
    /// empty boundary.
    pub fn enclosing_circle(&self) -> Option<EnclosingCircle> {
        let circle = smallest_enclosing_circle(&self.boundary)?;
        Some(EnclosingCircle {
            center_x: circle.center[0] as i32,
            center_y: circle.center[1] as i32,
            radius: circle.radius as i32,
        })
    }

    /// Number of boundary points
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_region() -> Region {
        // 4x4 pixel square with corners at (2, 3) and (5, 6)
        Region {
            boundary: vec![[2.0, 3.0], [5.0, 3.0], [5.0, 6.0], [2.0, 6.0]],
        }
    }

    #[test]
    fn area_uses_shoelace_not_pixel_count() {
        assert_eq!(square_region().area(), 9.0);
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let centroid = square_region().centroid().unwrap();
        // exact center is (3.5, 4.5); integer truncation
        assert_eq!(centroid, Centroid { x: 3, y: 4 });
    }

    #[test]
    fn centroid_of_single_point_is_degenerate() {
        let region = Region {
            boundary: vec![[4.0, 4.0]],
        };
        assert!(matches!(
            region.centroid(),
            Err(AnalysisError::DegenerateRegion)
        ));
    }

    #[test]
    fn centroid_of_collinear_boundary_is_degenerate() {
        let region = Region {
            boundary: vec![[1.0, 5.0], [4.0, 5.0], [8.0, 5.0]],
        };
        assert!(matches!(
            region.centroid(),
            Err(AnalysisError::DegenerateRegion)
        ));
    }

    #[test]
    fn bounding_box_spans_whole_pixels() {
        let rect = square_region().bounding_box().unwrap();
        assert_eq!(
            rect,
            BoundingBox {
                x: 2,
                y: 3,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn bounding_box_of_empty_region_is_none() {
        let region = Region { boundary: vec![] };
        assert!(region.bounding_box().is_none());
        assert!(region.enclosing_circle().is_none());
    }

    #[test]
    fn enclosing_circle_covers_all_corners() {
        let region = square_region();
        let circle = region.enclosing_circle().unwrap();
        // truncation may shrink the radius by less than one pixel
        let slack = circle.radius as f32 + 1.0;
        for &[x, y] in &region.boundary {
            let dx = x - circle.center_x as f32;
            let dy = y - circle.center_y as f32;
            assert!((dx * dx + dy * dy).sqrt() <= slack);
        }
    }

    #[test]
    fn descriptors_round_trip_through_json() {
        let rect = BoundingBox {
            x: 2,
            y: 3,
            width: 4,
            height: 4,
        };
        let json = serde_json::to_string(&rect).unwrap();
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);

        let circle = EnclosingCircle {
            center_x: 3,
            center_y: 4,
            radius: 2,
        };
        let json = serde_json::to_string(&circle).unwrap();
        let back: EnclosingCircle = serde_json::from_str(&json).unwrap();
        assert_eq!(circle, back);
    }
}
