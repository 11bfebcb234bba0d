/// Georeferencing bounds in geographic coordinates (EPSG:4326 axis order
/// lon/lat): west ≤ east, south ≤ north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// One north-up raster: row 0 is the northernmost latitude, values are
/// row-major Float32.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f32>,
    pub bounds: Bounds,
}

impl RasterGrid {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// GDAL-style affine transform anchored at the north-west corner with
    /// no rotation terms, matching rasterio's `from_bounds`.
    pub fn geo_transform(&self) -> [f64; 6] {
        let x_res = (self.bounds.east - self.bounds.west) / self.cols as f64;
        let y_res = (self.bounds.north - self.bounds.south) / self.rows as f64;
        [self.bounds.west, x_res, 0.0, self.bounds.north, 0.0, -y_res]
    }

    /// Minimum and maximum over the finite values only. A grid with no
    /// finite value at all reports `(NaN, NaN)`.
    pub fn finite_range(&self) -> (f32, f32) {
        let mut range: Option<(f32, f32)> = None;
        for &value in &self.values {
            if !value.is_finite() {
                continue;
            }
            range = Some(match range {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
        range.unwrap_or((f32::NAN, f32::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize, values: Vec<f32>) -> RasterGrid {
        RasterGrid {
            rows,
            cols,
            values,
            bounds: Bounds {
                west: -130.0,
                south: 20.0,
                east: -60.0,
                north: 55.0,
            },
        }
    }

    #[test]
    fn test_geo_transform_from_bounds() {
        let grid = grid(35, 70, vec![0.0; 35 * 70]);
        let transform = grid.geo_transform();

        assert_eq!(transform[0], -130.0);
        assert_eq!(transform[1], 1.0);
        assert_eq!(transform[2], 0.0);
        assert_eq!(transform[3], 55.0);
        assert_eq!(transform[4], 0.0);
        assert_eq!(transform[5], -1.0);
    }

    #[test]
    fn test_geo_transform_single_row() {
        // Degenerate one-row grid still yields a valid transform.
        let mut grid = grid(1, 4, vec![0.0; 4]);
        grid.bounds.south = grid.bounds.north;

        let transform = grid.geo_transform();
        assert_eq!(transform[5], 0.0);
        assert!(transform.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_finite_range_ignores_non_finite() {
        let grid = grid(1, 5, vec![1.5, f32::NAN, -2.0, f32::INFINITY, 0.25]);
        assert_eq!(grid.finite_range(), (-2.0, 1.5));
    }

    #[test]
    fn test_finite_range_all_nan() {
        let grid = grid(1, 3, vec![f32::NAN, f32::NAN, f32::NAN]);
        let (min, max) = grid.finite_range();
        assert!(min.is_nan());
        assert!(max.is_nan());
    }
}
