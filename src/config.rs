use std::path::PathBuf;

/// Resolved settings for one plotting run.
///
/// `Default` mirrors the command-line defaults.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// First location name (display-only).
    pub location1: String,
    /// Second location name (display-only).
    pub location2: String,
    pub title: String,
    pub year: i32,
    pub variable: String,
    pub unit: String,
    /// Lower color-scale bound; derived from the data when unset.
    pub vmin: Option<f64>,
    /// Upper color-scale bound; derived from the data when unset.
    pub vmax: Option<f64>,
    pub cmap: String,
    pub width: u32,
    pub height: u32,
    /// Font file for titles and labels. It is registered again whenever it
    /// differs from the font used by the previous run in this process.
    pub font: Option<PathBuf>,
    /// Search the system font locations when `font` is unset or unusable.
    pub system_fonts: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            location1: "Location1".to_string(),
            location2: "Location2".to_string(),
            title: "Location Comparison".to_string(),
            year: 1950,
            variable: "Difference".to_string(),
            unit: "units".to_string(),
            vmin: None,
            vmax: None,
            cmap: "roma_r".to_string(),
            width: 1600,
            height: 800,
            font: None,
            system_fonts: true,
        }
    }
}
