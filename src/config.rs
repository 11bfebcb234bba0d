use std::path::PathBuf;

/// Emission categories extracted by default, in the order they appear in
/// the viewer dropdown.
pub const DEFAULT_VARIABLES: &[&str] = &[
    "EmisCH4_Total",
    "EmisCH4_Oil",
    "EmisCH4_Gas",
    "EmisCH4_Coal",
    "EmisCH4_Livestock",
    "EmisCH4_Wastewater",
    "EmisCH4_Landfills",
    "EmisCH4_Rice",
    "EmisCH4_Reservoirs",
    "EmisCH4_Wetlands",
];

/// Full configuration of one pipeline run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the yearly NetCDF files.
    pub input_dir: PathBuf,
    /// Directory receiving the GeoTIFF tiles and manifest.json.
    pub output_dir: PathBuf,
    /// Variables to extract, in manifest order.
    pub variables: Vec<String>,
    /// Clamp finite negative values (numerical noise) to zero.
    pub clamp_negative_to_zero: bool,
}

impl Config {
    /// Configuration with the default variable list and clamping enabled.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            variables: DEFAULT_VARIABLES.iter().map(|v| v.to_string()).collect(),
            clamp_negative_to_zero: true,
        }
    }
}
