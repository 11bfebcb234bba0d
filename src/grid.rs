use crate::model::Bounds;

/// Orientation and bounds shared by every variable of one dataset,
/// computed once from the coordinate arrays and reused per variable.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub bounds: Bounds,
    /// Set when the source latitude axis is ascending and rows must be
    /// reversed to make the grid north-up.
    pub flip_rows: bool,
}

impl GridLayout {
    /// Returns `None` when either coordinate array is empty.
    pub fn from_coords(lon: &[f64], lat: &[f64]) -> Option<GridLayout> {
        let first_lat = *lat.first()?;
        let last_lat = *lat.last()?;
        lon.first()?;

        let extrema = |acc: (f64, f64), v: &f64| (acc.0.min(*v), acc.1.max(*v));
        let (west, east) = lon.iter().fold((f64::INFINITY, f64::NEG_INFINITY), extrema);
        let (south, north) = lat.iter().fold((f64::INFINITY, f64::NEG_INFINITY), extrema);

        Some(GridLayout {
            bounds: Bounds {
                west,
                south,
                east,
                north,
            },
            flip_rows: first_lat < last_lat,
        })
    }
}

/// Reverses the row order of a row-major grid when `flip_rows` is set,
/// so that row 0 ends up at the northernmost latitude.
pub fn north_up(mut values: Vec<f32>, rows: usize, cols: usize, flip_rows: bool) -> Vec<f32> {
    if flip_rows {
        for row in 0..rows / 2 {
            let top = row * cols;
            let bottom = (rows - 1 - row) * cols;
            for col in 0..cols {
                values.swap(top + col, bottom + col);
            }
        }
    }
    values
}

/// Clamps finite negative values (usually numerical noise) to zero.
/// Non-finite values are left untouched.
pub fn clamp_negative_to_zero(values: &mut [f32]) {
    for value in values.iter_mut() {
        if value.is_finite() && *value < 0.0 {
            *value = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_latitude_flips_rows() {
        let layout = GridLayout::from_coords(&[0.0, 1.0], &[10.0, 11.0, 12.0]).unwrap();
        assert!(layout.flip_rows);

        let layout = GridLayout::from_coords(&[0.0, 1.0], &[12.0, 11.0, 10.0]).unwrap();
        assert!(!layout.flip_rows);
    }

    #[test]
    fn test_bounds_from_extrema() {
        let layout = GridLayout::from_coords(&[-120.0, -119.0, -118.0], &[45.0, 44.0]).unwrap();

        assert_eq!(layout.bounds.west, -120.0);
        assert_eq!(layout.bounds.east, -118.0);
        assert_eq!(layout.bounds.south, 44.0);
        assert_eq!(layout.bounds.north, 45.0);
        assert!(layout.bounds.west <= layout.bounds.east);
        assert!(layout.bounds.south <= layout.bounds.north);
    }

    #[test]
    fn test_single_sample_axes() {
        let layout = GridLayout::from_coords(&[5.0], &[50.0]).unwrap();
        assert_eq!(layout.bounds.west, layout.bounds.east);
        assert_eq!(layout.bounds.south, layout.bounds.north);
        assert!(!layout.flip_rows);
    }

    #[test]
    fn test_empty_coords_rejected() {
        assert!(GridLayout::from_coords(&[], &[1.0]).is_none());
        assert!(GridLayout::from_coords(&[1.0], &[]).is_none());
    }

    #[test]
    fn test_north_up_reverses_row_order() {
        let values = vec![
            1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, //
            7.0, 8.0, 9.0,
        ];

        let flipped = north_up(values.clone(), 3, 3, true);
        assert_eq!(flipped, vec![7.0, 8.0, 9.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);

        let unchanged = north_up(values.clone(), 3, 3, false);
        assert_eq!(unchanged, values);
    }

    #[test]
    fn test_north_up_single_row() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(north_up(values.clone(), 1, 3, true), values);
    }

    #[test]
    fn test_clamp_is_idempotent_and_keeps_nan() {
        let mut values = vec![-0.5, 3.2, f32::NAN, -0.0001, f32::NEG_INFINITY];
        clamp_negative_to_zero(&mut values);

        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 3.2);
        assert!(values[2].is_nan());
        assert_eq!(values[3], 0.0);
        assert_eq!(values[4], f32::NEG_INFINITY);

        let once = values.clone();
        clamp_negative_to_zero(&mut values);
        assert_eq!(values[..2], once[..2]);
        assert!(values[2].is_nan());
        assert_eq!(values[3..], once[3..]);
    }
}
