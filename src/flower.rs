//! Procedural flower source: a ring of petal circles around a center disc,
//! all geometry derived from the tier dimension alone.

use crate::{
    Canvas, PI, Point, Rgba, Scalar, Tier,
    mask::{DEFAULT_FLATNESS, fill_circle},
};

/// Flower motif drawn from circles
#[derive(Debug, Clone, Copy)]
pub struct Flower {
    pub petals: u32,
    pub petal_color: Rgba,
    pub center_color: Rgba,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petals: 5,
            petal_color: Rgba::new(255, 182, 193, 255), // light pink
            center_color: Rgba::new(255, 215, 0, 255),  // gold
        }
    }
}

/// Petal center positions: evenly spaced around a full rotation, rotated a
/// quarter turn back so the first petal points up.
pub fn petal_centers(petals: u32, center: Point, offset: Scalar) -> Vec<Point> {
    (0..petals)
        .map(|i| {
            let angle = i as Scalar * 2.0 * PI / petals as Scalar - PI / 2.0;
            let (sin, cos) = angle.sin_cos();
            center + Point::new(offset * cos, offset * sin)
        })
        .collect()
}

impl Flower {
    /// Draw the flower onto a white canvas of the tier's dimension
    pub fn render(&self, tier: Tier) -> Canvas {
        let size = tier.size as Scalar;
        let mut canvas = Canvas::new(tier.size);
        let center = Point::new(size / 2.0, size / 2.0);
        let petal = size / 4.0;

        for position in petal_centers(self.petals, center, petal) {
            let mask = fill_circle(tier.size as usize, position, petal / 2.0, DEFAULT_FLATNESS);
            canvas.fill_mask(&mask, self.petal_color);
        }
        // center disc drawn over the petals, radius is half the petal size
        let mask = fill_circle(tier.size as usize, center, petal / 2.0, DEFAULT_FLATNESS);
        canvas.fill_mask(&mask, self.center_color);
        canvas
    }
}
