//! Hole filling for vegetation masks.
//!
//! Two strategies: uniform morphological closing, and conservative
//! contour-based filling that only touches holes bounded inside a
//! vegetation region.

use image::{GrayImage, Luma};
use imageproc::contours::find_contours;
use imageproc::distance_transform::Norm;
use imageproc::drawing::draw_polygon_mut;
use imageproc::morphology;
use imageproc::point::Point;

use crate::mask::VegetationMask;

/// Default area ceiling, in pixels, for contour-based hole filling.
pub const DEFAULT_MAX_HOLE_AREA: f64 = 25.0;

const FOREGROUND: Luma<u8> = Luma([255]);

/// Close small gaps and thin breaks in the mask with a morphological
/// closing (dilation followed by erosion) using an L2 disk of radius 2,
/// the 5x5 elliptical kernel.
pub fn close_mask(mask: &VegetationMask) -> VegetationMask {
    let closed = morphology::close(&mask.to_luma(), Norm::L2, 2);
    VegetationMask::from_luma(&closed)
}

/// Fill every hole in the mask whose boundary polygon encloses an area of
/// at most `max_size_area` pixels.
///
/// The inverted mask is traced with hierarchy-aware border following, so
/// both outer boundaries and boundaries of holes-within-holes are found.
/// Areas are measured on the boundary polygon (shoelace formula). Filling
/// only ever sets pixels to true; the result is a superset of the input.
pub fn fill_small_holes(mask: &VegetationMask, max_size_area: f64) -> VegetationMask {
    let mut canvas = mask.to_luma();

    let holes = GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([if mask.get(x, y) { 0 } else { 255 }])
    });

    for contour in find_contours::<i32>(&holes) {
        let points = open_polygon(&contour.points);
        if points.is_empty() || polygon_area(points) > max_size_area {
            continue;
        }
        if points.len() > 1 {
            draw_polygon_mut(&mut canvas, points, FOREGROUND);
        }
        // A filled contour covers its own boundary pixels.
        for point in points {
            canvas.put_pixel(point.x as u32, point.y as u32, FOREGROUND);
        }
    }

    VegetationMask::from_luma(&canvas)
}

/// Strip a duplicated closing vertex; `draw_polygon_mut` requires an open
/// path.
fn open_polygon(points: &[Point<i32>]) -> &[Point<i32>] {
    if points.len() > 1 && points.first() == points.last() {
        &points[..points.len() - 1]
    } else {
        points
    }
}

/// Area enclosed by a boundary polygon, by the shoelace formula.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        twice_area += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    twice_area.abs() as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_area_unit_square() {
        let square = [
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 2),
            Point::new(0, 2),
        ];
        assert_eq!(polygon_area(&square), 4.0);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[Point::new(3, 3)]), 0.0);
        assert_eq!(polygon_area(&[Point::new(0, 0), Point::new(4, 0)]), 0.0);
    }
}
