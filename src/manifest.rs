use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// One persisted tile, keyed in the manifest by (variable, year).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileEntry {
    /// Path of the written GeoTIFF.
    pub tif: String,
    /// Path of the source dataset.
    pub nc: String,
    pub min: f32,
    pub max: f32,
}

/// Accumulates the index incrementally across all files and variables.
///
/// `record_year` is an idempotent insert, `record_tile` an upsert where
/// re-recording the same (variable, year) key overwrites the prior entry.
#[derive(Debug)]
pub struct ManifestBuilder {
    variables: Vec<String>,
    years: BTreeSet<String>,
    entries: HashMap<String, BTreeMap<String, TileEntry>>,
}

impl ManifestBuilder {
    pub fn new(variables: &[String]) -> Self {
        Self {
            variables: variables.to_vec(),
            years: BTreeSet::new(),
            entries: HashMap::new(),
        }
    }

    pub fn record_year(&mut self, year: &str) {
        self.years.insert(year.to_string());
    }

    pub fn record_tile(&mut self, variable: &str, year: &str, entry: TileEntry) {
        self.entries
            .entry(variable.to_string())
            .or_default()
            .insert(year.to_string(), entry);
    }

    /// Produces the immutable persisted form: years sorted ascending, data
    /// listing variables in their configured order (only those that got at
    /// least one tile).
    pub fn finalize(mut self) -> Manifest {
        let data = self
            .variables
            .iter()
            .filter_map(|variable| {
                self.entries
                    .remove(variable)
                    .map(|years| (variable.clone(), years))
            })
            .collect();

        Manifest {
            variables: self.variables,
            years: self.years.into_iter().collect(),
            data,
        }
    }
}

/// The complete index, persisted once as `manifest.json`.
#[derive(Debug)]
pub struct Manifest {
    pub variables: Vec<String>,
    pub years: Vec<String>,
    data: Vec<(String, BTreeMap<String, TileEntry>)>,
}

impl Manifest {
    pub fn entry(&self, variable: &str, year: &str) -> Option<&TileEntry> {
        self.data
            .iter()
            .find(|(name, _)| name == variable)
            .and_then(|(_, years)| years.get(year))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        fs::write(path, json).with_context(|| format!("Failed to write manifest {:?}", path))?;
        Ok(())
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Manifest", 3)?;
        state.serialize_field("variables", &self.variables)?;
        state.serialize_field("years", &self.years)?;
        state.serialize_field("data", &DataMap(&self.data))?;
        state.end()
    }
}

/// JSON object preserving the configured variable order.
struct DataMap<'a>(&'a [(String, BTreeMap<String, TileEntry>)]);

impl Serialize for DataMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (variable, years) in self.0 {
            map.serialize_entry(variable, years)?;
        }
        map.end()
    }
}
