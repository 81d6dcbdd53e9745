//! Minimum enclosing circle of a point set.
//!
//! Neither `imageproc` nor `geo` exposes this primitive, so it is computed
//! here with Welzl-style incremental construction: grow the circle point by
//! point, re-seeding from the points known to lie on the boundary. Exact up
//! to floating-point error; accumulation is done in `f64`.

/// A circle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Containment slack for accumulated floating-point error.
const EPSILON: f64 = 1e-7;

impl Circle {
    fn contains(&self, p: [f64; 2]) -> bool {
        distance(self.center, p) <= self.radius + EPSILON
    }

    /// Circle with the segment `a`-`b` as diameter.
    fn through_two(a: [f64; 2], b: [f64; 2]) -> Self {
        let center = [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0];
        Self {
            center,
            radius: distance(center, a),
        }
    }

    /// Circumcircle of `a`, `b`, `c`; falls back to the widest two-point
    /// circle when the points are collinear.
    fn through_three(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Self {
        let d = 2.0
            * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
        if d.abs() < f64::EPSILON {
            let ab = Self::through_two(a, b);
            let ac = Self::through_two(a, c);
            let bc = Self::through_two(b, c);
            let mut widest = ab;
            if ac.radius > widest.radius {
                widest = ac;
            }
            if bc.radius > widest.radius {
                widest = bc;
            }
            return widest;
        }

        let a2 = a[0] * a[0] + a[1] * a[1];
        let b2 = b[0] * b[0] + b[1] * b[1];
        let c2 = c[0] * c[0] + c[1] * c[1];
        let center = [
            (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d,
            (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d,
        ];
        Self {
            center,
            radius: distance(center, a),
        }
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Smallest circle containing every point in `points`, or `None` for an
/// empty slice.
pub fn smallest_enclosing_circle(points: &[[f32; 2]]) -> Option<Circle> {
    let pts: Vec<[f64; 2]> = points
        .iter()
        .map(|&[x, y]| [f64::from(x), f64::from(y)])
        .collect();

    let first = *pts.first()?;
    let mut circle = Circle {
        center: first,
        radius: 0.0,
    };

    for i in 1..pts.len() {
        let p = pts[i];
        if circle.contains(p) {
            continue;
        }
        // p lies on the boundary of the minimal circle of pts[..=i]
        circle = Circle {
            center: p,
            radius: 0.0,
        };
        for j in 0..i {
            let q = pts[j];
            if circle.contains(q) {
                continue;
            }
            circle = Circle::through_two(p, q);
            for k in 0..j {
                let r = pts[k];
                if !circle.contains(r) {
                    circle = Circle::through_three(p, q, r);
                }
            }
        }
    }

    Some(circle)
}
