use thiserror::Error;

/// Errors that can occur while loading, validating or rendering a table.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Colormap '{0}' not found in the scientific or library colormap registries")]
    UnknownColormap(String),
    #[error("Input CSV has no '{0}' index column")]
    MissingIndexColumn(String),
    #[error("Input CSV must have columns: {expected:?} (missing: {missing:?})")]
    MissingColumns {
        expected: Vec<String>,
        missing: Vec<String>,
    },
    #[error("Input CSV index must be: {expected:?} (invalid: {invalid:?})")]
    InvalidRowLabels {
        expected: Vec<String>,
        invalid: Vec<String>,
    },
    #[error("Non-numeric value {value:?} in row '{row}', column '{column}'")]
    InvalidCell {
        row: String,
        column: String,
        value: String,
    },
    #[error("Input table has no values to plot")]
    EmptyTable,
    #[error("Invalid color range [{vmin}, {vmax}]: bounds must be finite with vmin < vmax")]
    InvalidRange { vmin: f64, vmax: f64 },
    #[error("Image size {width}x{height} is below the minimum of {min_width}x{min_height}")]
    ImageTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("No usable TrueType font found for the figure text (pass --font <path>)")]
    NoFont,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Drawing error: {0}")]
    Drawing(String),
}
