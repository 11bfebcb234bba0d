use anyhow::{Context, Result};
use gdal::raster::{Buffer, RasterCreationOptions};
use gdal::spatial_ref::SpatialRef;
use gdal::{DriverManager, Metadata};
use std::path::Path;

use crate::model::RasterGrid;

/// Reduction factors of the precomputed overview pyramid.
const OVERVIEW_LEVELS: [i32; 4] = [2, 4, 8, 16];

#[derive(Default)]
pub struct GeoTiffWriter {}

impl GeoTiffWriter {
    pub fn new() -> Self {
        Self {}
    }

    /// Writes one north-up grid as a tiled, DEFLATE-compressed Float32
    /// GeoTIFF with an averaged overview pyramid, and returns the finite
    /// min/max of the array (`(NaN, NaN)` when nothing is finite).
    pub fn write(&self, grid: &RasterGrid, output_path: &Path) -> Result<(f32, f32)> {
        let (rows, cols) = grid.shape();
        if rows == 0 || cols == 0 || grid.values.len() != rows * cols {
            anyhow::bail!(
                "invalid grid shape {}x{} ({} values) for {:?}",
                rows,
                cols,
                grid.values.len(),
                output_path
            );
        }

        let driver =
            DriverManager::get_driver_by_name("GTiff").context("Failed to get GTiff driver")?;

        // 256x256 internal tiles so viewers can read partial windows;
        // PREDICTOR=3 is the floating-point predictor for DEFLATE.
        let options = RasterCreationOptions::from_iter([
            "TILED=YES",
            "BLOCKXSIZE=256",
            "BLOCKYSIZE=256",
            "COMPRESS=DEFLATE",
            "PREDICTOR=3",
        ]);

        let mut dataset = driver
            .create_with_band_type_with_options::<f32, _>(output_path, cols, rows, 1, &options)
            .with_context(|| format!("Failed to create dataset at {:?}", output_path))?;

        dataset
            .set_geo_transform(&grid.geo_transform())
            .context("Failed to set geo transform")?;

        let srs =
            SpatialRef::from_epsg(4326).context("Failed to create SpatialRef from EPSG:4326")?;
        let wkt = srs
            .to_wkt()
            .context("Failed to convert SpatialRef to WKT")?;
        dataset
            .set_projection(&wkt)
            .context("Failed to set projection")?;

        {
            let mut band = dataset.rasterband(1).context("Failed to get raster band")?;
            let mut buffer = Buffer::new((cols, rows), grid.values.clone());
            band.write((0, 0), (cols, rows), &mut buffer)
                .with_context(|| format!("Failed to write raster data to {:?}", output_path))?;
        }

        dataset
            .build_overviews("AVERAGE", &OVERVIEW_LEVELS, &[])
            .with_context(|| format!("Failed to build overviews for {:?}", output_path))?;

        // Tag the resampling method the way rasterio does so downstream
        // viewers know how the pyramid was built.
        dataset
            .set_metadata_item("resampling", "average", "rio_overview")
            .context("Failed to set overview resampling metadata")?;

        Ok(grid.finite_range())
    }
}
