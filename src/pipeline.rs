use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::grid;
use crate::manifest::{ManifestBuilder, TileEntry};
use crate::source::DatasetSource;
use crate::writer::GeoTiffWriter;
use crate::year;

/// Counters reported after a completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub files: usize,
    pub tiles_written: usize,
    /// Configured variables that were absent from some input file.
    pub skipped: usize,
}

/// Runs the whole conversion: every input file, every configured variable,
/// one manifest persisted at the end.
///
/// Year inference and dataset-open failures are fatal; a failure while
/// reading or writing one variable only skips that variable. Files are
/// processed strictly sequentially, in lexicographic name order, and each
/// dataset handle is released before the next file is opened.
pub fn run(config: &Config) -> Result<RunSummary> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", config.output_dir))?;

    let inputs = collect_input_files(&config.input_dir)?;
    info!("Found {} NetCDF files in {:?}", inputs.len(), config.input_dir);

    let writer = GeoTiffWriter::new();
    let mut manifest = ManifestBuilder::new(&config.variables);
    let mut summary = RunSummary::default();

    for path in &inputs {
        let year = year::infer_year(path)?;
        manifest.record_year(&year);

        let source = DatasetSource::open(path)?;
        process_source(config, &writer, &mut manifest, &source, &year, &mut summary);
        summary.files += 1;
    }

    let manifest = manifest.finalize();
    let manifest_path = config.output_dir.join("manifest.json");
    manifest.write_to(&manifest_path)?;
    info!("Wrote {:?}", manifest_path);

    Ok(summary)
}

fn process_source(
    config: &Config,
    writer: &GeoTiffWriter,
    manifest: &mut ManifestBuilder,
    source: &DatasetSource,
    year: &str,
    summary: &mut RunSummary,
) {
    let file_name = source
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    for variable in &config.variables {
        let mut raster = match source.read_grid(variable) {
            Ok(Some(raster)) => raster,
            Ok(None) => {
                warn!("Skipping {} (not in {})", variable, file_name);
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                error!("Skipping {} in {}: {:#}", variable, file_name, e);
                continue;
            }
        };

        if config.clamp_negative_to_zero {
            grid::clamp_negative_to_zero(&mut raster.values);
        }

        let tif_name = format!("{}_{}.tif", variable, year);
        let tif_path = config.output_dir.join(&tif_name);

        match writer.write(&raster, &tif_path) {
            Ok((min, max)) => {
                manifest.record_tile(
                    variable,
                    year,
                    TileEntry {
                        tif: tif_path.display().to_string(),
                        nc: source.path().display().to_string(),
                        min,
                        max,
                    },
                );
                info!("Wrote {:?}", tif_path);
                summary.tiles_written += 1;
            }
            Err(e) => {
                error!("Failed to write {:?}: {:#}", tif_path, e);
            }
        }
    }
}

/// All `*.nc` files directly under `dir`, in lexicographic name order.
fn collect_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {:?}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {:?}", dir))?
            .path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("nc") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
