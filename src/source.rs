use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::grid::{self, GridLayout};
use crate::model::RasterGrid;

/// One open input dataset: named 2-D variables over a shared lon/lat grid.
///
/// The coordinate arrays are read once at open time and the resulting
/// [`GridLayout`] (bounds + row orientation) is applied to every variable
/// of this file. The underlying handle closes when the source is dropped.
pub struct DatasetSource {
    file: netcdf::File,
    path: PathBuf,
    layout: GridLayout,
}

impl DatasetSource {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = netcdf::open(path).map_err(|source| Error::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let lon = read_coord(&file, "lon", path)?;
        let lat = read_coord(&file, "lat", path)?;
        let layout =
            GridLayout::from_coords(&lon, &lat).ok_or_else(|| Error::EmptyCoordinate {
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            layout,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Reads one variable as a north-up Float32 grid.
    ///
    /// Returns `Ok(None)` when the variable is absent from this file (a
    /// skip, not an error). Non-2-D or zero-sized variables and read
    /// failures are errors scoped to that variable.
    pub fn read_grid(&self, name: &str) -> Result<Option<RasterGrid>, Error> {
        let Some(var) = self.file.variable(name) else {
            return Ok(None);
        };

        let dims = var.dimensions();
        if dims.len() != 2 {
            return Err(Error::InvalidShape {
                name: name.to_string(),
                path: self.path.clone(),
                reason: format!("expected 2 dimensions, found {}", dims.len()),
            });
        }
        let (rows, cols) = (dims[0].len(), dims[1].len());
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape {
                name: name.to_string(),
                path: self.path.clone(),
                reason: format!("zero-sized grid ({}x{})", rows, cols),
            });
        }

        let values: Vec<f32> = var.get_values(..).map_err(|source| Error::VariableRead {
            name: name.to_string(),
            path: self.path.clone(),
            source,
        })?;

        let values = grid::north_up(values, rows, cols, self.layout.flip_rows);
        Ok(Some(RasterGrid {
            rows,
            cols,
            values,
            bounds: self.layout.bounds,
        }))
    }
}

fn read_coord(file: &netcdf::File, name: &str, path: &Path) -> Result<Vec<f64>, Error> {
    let var = file.variable(name).ok_or_else(|| Error::MissingCoordinate {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    var.get_values(..).map_err(|source| Error::VariableRead {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })
}
