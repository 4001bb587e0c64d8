//! Minimal owned 2D surface used for coverage masks and pixel canvases.

/// Describes how a flat buffer maps to rows and columns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Shape {
    /// Width of the surface
    pub width: usize,
    /// Height of the surface
    pub height: usize,
    /// How many elements we need to skip to get to the next row.
    pub row_stride: usize,
    /// How many elements we need to skip to get to the next column.
    pub col_stride: usize,
}

impl Shape {
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
    }
}

#[derive(Clone)]
pub struct SurfaceOwned<P> {
    shape: Shape,
    data: Vec<P>,
}

impl<P> SurfaceOwned<P> {
    pub fn new(height: usize, width: usize) -> Self
    where
        P: Default,
    {
        Self::new_with(height, width, |_, _| Default::default())
    }

    pub fn new_with<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col))
            }
        }
        Self {
            shape: Shape {
                width,
                height,
                row_stride: width,
                col_stride: 1,
            },
            data,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&P> {
        if row >= self.shape.height || col >= self.shape.width {
            return None;
        }
        self.data.get(self.shape.offset(row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut P> {
        if row >= self.shape.height || col >= self.shape.width {
            return None;
        }
        let offset = self.shape.offset(row, col);
        self.data.get_mut(offset)
    }

    /// Row-major view over all elements
    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.data.iter()
    }

    pub fn clear(&mut self)
    where
        P: Default,
    {
        for item in self.data.iter_mut() {
            *item = Default::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_indexing() {
        let surf = SurfaceOwned::new_with(2, 3, |row, col| row * 10 + col);
        assert_eq!(surf.width(), 3);
        assert_eq!(surf.height(), 2);
        assert_eq!(surf.get(0, 0), Some(&0));
        assert_eq!(surf.get(1, 2), Some(&12));
        assert_eq!(surf.get(2, 0), None);
        assert_eq!(surf.get(0, 3), None);
        assert_eq!(surf.data(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_surface_clear() {
        let mut surf = SurfaceOwned::new_with(2, 2, |_, _| 7u32);
        surf.clear();
        assert!(surf.iter().all(|v| *v == 0));
    }
}
