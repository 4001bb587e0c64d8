//! Anti-aliased coverage masks built by accumulating per-pixel signed
//! differences of the outline, then integrating along each row.

use crate::{EPSILON, Line, PI, Point, Scalar, SurfaceOwned};
use std::cmp::min;

/// Maximum distance between a flattened segment and the true curve.
pub const DEFAULT_FLATNESS: Scalar = 0.05;

/// Update provided surface with the signed difference of the line
///
/// Signed difference is a difference between adjacent pixels introduced by the line.
pub(crate) fn signed_difference_line(surf: &mut SurfaceOwned<Scalar>, line: Line) {
    // y - is a row
    // x - is a column
    let Line([p0, p1]) = line;

    // handle lines that are intersecting `x == surf.width()`
    // - just throw away part that has x > surf.width for all points
    let width = surf.width() as Scalar - 1.0;
    let line = if p0.x() > width || p1.x() > width {
        if p0.x() > width && p1.x() > width {
            Line::new((width - 0.001, p0.y()), (width - 0.001, p1.y()))
        } else {
            let t = (p0.x() - width) / (p0.x() - p1.x());
            let mid = Point::new(width, (1.0 - t) * p0.y() + t * p1.y());
            if p0.x() < width {
                Line::new(p0, mid)
            } else {
                Line::new(mid, p1)
            }
        }
    } else {
        line
    };

    // handle lines that are intersecting `x == 0.0`
    // - line is split in left (for all points where x < 0.0) and the mid part
    // - left part is converted to a vertical line that spans same y's and x == 0.0
    // - left part is rasterized recursively, and mid part rasterized after this
    let line = if p0.x() < 0.0 || p1.x() < 0.0 {
        let (vertical, line) = if p1.x() > 0.0 || p0.x() > 0.0 {
            let t = p0.x() / (p0.x() - p1.x());
            let mid = Point::new(0.0, (1.0 - t) * p0.y() + t * p1.y());
            if p1.x() > 0.0 {
                let p = Point::new(0.0, p0.y());
                (Line::new(p, mid), Line::new(mid, p1))
            } else {
                let p = Point::new(0.0, p1.y());
                (Line::new(mid, p), Line::new(p0, mid))
            }
        } else {
            (
                Line::new((0.0, p0.y()), (0.0, p1.y())),
                Line::new((0.0, 0.0), (0.0, 0.0)),
            )
        };
        // signed difference by the line left of `x == 0.0`
        signed_difference_line(surf, vertical);
        line
    } else {
        line
    };

    let Line([p0, p1]) = line;
    let shape = surf.shape();
    let data = surf.data_mut();
    let stride = shape.col_stride;

    if (p0.y() - p1.y()).abs() < EPSILON {
        // line does not introduce any signed coverage
        return;
    }
    // always iterate from the point with the smallest y coordinate
    let (dir, p0, p1) = if p0.y() < p1.y() {
        (1.0, p0, p1)
    } else {
        (-1.0, p1, p0)
    };
    let dxdy = (p1.x() - p0.x()) / (p1.y() - p0.y());
    // find first point to trace. since we are going to iterate over y's
    // we should pick min(y, p0.y) as a starting y point, and adjust x
    // accordingly
    let y = p0.y().max(0.0) as usize;
    let mut x = if p0.y() < 0.0 {
        p0.x() - p0.y() * dxdy
    } else {
        p0.x()
    };
    let mut x_next = x;
    for y in y..min(shape.height, p1.y().ceil().max(0.0) as usize) {
        x = x_next;
        let row_offset = shape.offset(y, 0); // current row offset in the data array
        let dy = ((y + 1) as Scalar).min(p1.y()) - (y as Scalar).max(p0.y());
        // signed y difference
        let d = dir * dy;
        // find next x position
        x_next = x + dxdy * dy;
        // order (x, x_next) from smaller value x0 to bigger x1
        let (x0, x1) = if x < x_next { (x, x_next) } else { (x_next, x) };
        // lower bound of effected x pixels
        let x0_floor = x0.floor().max(0.0);
        let x0i = x0_floor as i32;
        // upper bound of effected x pixels
        let x1_ceil = x1.ceil();
        let x1i = x1_ceil as i32;
        if x1i <= x0i + 1 {
            // only goes through one pixel (with the total coverage of `d` spread over two pixels)
            let xmf = 0.5 * (x + x_next) - x0_floor; // effective height
            data[row_offset + (x0i as usize) * stride] += d * (1.0 - xmf);
            data[row_offset + ((x0i + 1) as usize) * stride] += d * xmf;
        } else {
            let s = (x1 - x0).recip();
            let x0f = x0 - x0_floor; // fractional part of x0
            let x1f = x1 - x1_ceil + 1.0; // fractional part of x1
            let a0 = 0.5 * s * (1.0 - x0f) * (1.0 - x0f); // fractional area of the pixel with smallest x
            let am = 0.5 * s * x1f * x1f; // fractional area of the pixel with largest x
            data[row_offset + (x0i as usize) * stride] += d * a0;
            if x1i == x0i + 2 {
                // only two pixels are covered
                data[row_offset + ((x0i + 1) as usize) * stride] += d * (1.0 - a0 - am);
            } else {
                // second pixel
                let a1 = s * (1.5 - x0f);
                data[row_offset + ((x0i + 1) as usize) * stride] += d * (a1 - a0);
                // (second, last) pixels
                for xi in x0i + 2..x1i - 1 {
                    data[row_offset + (xi as usize) * stride] += d * s;
                }
                // last pixel
                let a2 = a1 + (x1i - x0i - 3) as Scalar * s;
                data[row_offset + ((x1i - 1) as usize) * stride] += d * (1.0 - a2 - am);
            }
            data[row_offset + (x1i as usize) * stride] += d * am
        }
    }
}

/// Integrate signed differences along each row into plain coverage in [0, 1]
pub(crate) fn signed_difference_to_coverage(surf: &mut SurfaceOwned<Scalar>) {
    let shape = surf.shape();
    let data = surf.data_mut();
    for y in 0..shape.height {
        let mut acc = 0.0;
        for x in 0..shape.width {
            let offset = shape.offset(y, x);
            acc += data[offset];

            let value = acc.abs();
            data[offset] = if value > 1.0 {
                1.0
            } else if value < 1e-6 {
                0.0
            } else {
                value
            };
        }
    }
}

/// Flatten a circle outline into line segments with the desired flatness
pub fn circle_lines(center: Point, radius: Scalar, flatness: Scalar) -> Vec<Line> {
    // chord error for a segment spanning angle `a` is `radius * (1 - cos(a / 2))`
    let max_angle = 2.0 * (1.0 - (flatness / radius).min(1.0)).acos();
    let count = ((2.0 * PI / max_angle).ceil() as usize).max(8);
    let step = 2.0 * PI / count as Scalar;
    let at = |i: usize| {
        let (sin, cos) = (step * i as Scalar).sin_cos();
        center + Point::new(radius * cos, radius * sin)
    };
    (0..count).map(|i| Line::new(at(i), at(i + 1))).collect()
}

/// Rasterize a filled circle into a square coverage mask of the given size
pub fn fill_circle(size: usize, center: Point, radius: Scalar, flatness: Scalar) -> SurfaceOwned<Scalar> {
    let mut surf = SurfaceOwned::new(size, size);
    for line in circle_lines(center, radius, flatness) {
        signed_difference_line(&mut surf, line);
    }
    signed_difference_to_coverage(&mut surf);
    surf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_signed_difference_line() {
        let mut surf = SurfaceOwned::new(2, 5);

        // out of bound line (intersects x = 0.0)
        signed_difference_line(&mut surf, Line::new((-1.0, 0.0), (1.0, 1.0)));
        assert_approx_eq!(*surf.get(0, 0).unwrap(), 3.0 / 4.0);
        assert_approx_eq!(*surf.get(0, 1).unwrap(), 1.0 / 4.0);
        surf.clear();

        // single pixel covered
        signed_difference_line(&mut surf, Line::new((0.1, 0.1), (0.9, 0.9)));
        assert_approx_eq!(*surf.get(0, 0).unwrap(), 0.4);
        assert_approx_eq!(*surf.get(0, 1).unwrap(), 0.8 - 0.4);
        surf.clear();

        // multiple rows vertical
        signed_difference_line(&mut surf, Line::new((0.5, 0.5), (0.5, 1.75)));
        assert_approx_eq!(*surf.get(0, 0).unwrap(), 1.0 / 4.0);
        assert_approx_eq!(*surf.get(0, 1).unwrap(), 1.0 / 4.0);
        assert_approx_eq!(*surf.get(1, 0).unwrap(), 3.0 / 8.0);
        assert_approx_eq!(*surf.get(1, 1).unwrap(), 3.0 / 8.0);
        surf.clear();

        // horizontal line introduces no coverage
        signed_difference_line(&mut surf, Line::new((0.0, 1.0), (4.0, 1.0)));
        assert!(surf.iter().all(|v| v.abs() < EPSILON));
    }

    #[test]
    fn test_circle_lines_closed() {
        let lines = circle_lines(Point::new(10.0, 10.0), 4.0, DEFAULT_FLATNESS);
        assert!(lines.len() >= 8);
        for pair in lines.windows(2) {
            assert!(pair[0].end().is_close_to(pair[1].start()));
        }
        let first = lines.first().unwrap();
        let last = lines.last().unwrap();
        assert!(last.end().is_close_to(first.start()));
        // every vertex sits on the circle
        for line in &lines {
            assert_approx_eq!(line.start().dist(Point::new(10.0, 10.0)), 4.0, 1e-9);
        }
    }

    #[test]
    fn test_fill_circle_area() {
        let radius = 6.0;
        let mask = fill_circle(24, Point::new(12.0, 12.0), radius, DEFAULT_FLATNESS);
        let area: Scalar = mask.iter().sum();
        // coverage integrates to the area of the flattened polygon, which is
        // slightly below pi * r^2
        let circle = PI * radius * radius;
        assert!(area <= circle + 0.01, "{} > {}", area, circle);
        assert!(area > circle * 0.97, "{} too small", area);
        // center is fully covered, far corner is empty
        assert_approx_eq!(*mask.get(12, 12).unwrap(), 1.0);
        assert_approx_eq!(*mask.get(0, 0).unwrap(), 0.0);
    }
}
