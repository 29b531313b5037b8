//! Render a pivoted month x hour table of differences between two
//! locations as a heatmap image.

pub mod colormap;
pub mod config;
pub mod error;
pub mod font;
pub mod range;
pub mod render;
pub mod table;

use anyhow::{Context, Result};
use tracing::info;

pub use colormap::{available_colormaps, resolve_colormap, Colormap, ColormapSource};
pub use config::PlotConfig;
pub use error::PlotError;
pub use range::{resolve_range, ColorRange};
pub use render::{render_heatmap, RenderOptions};
pub use table::{load_table, read_table, MonthHourTable};

/// Load, validate and render the table described by `config`.
pub fn run(config: &PlotConfig) -> Result<()> {
    info!(
        location1 = %config.location1,
        location2 = %config.location2,
        "comparing locations"
    );

    let colormap = resolve_colormap(&config.cmap)?;
    info!(cmap = colormap.name(), source = ?colormap.source(), "resolved colormap");

    let table = load_table(&config.input)
        .with_context(|| format!("Failed to load input table: {}", config.input.display()))?;
    info!(
        "Loaded: {} ({} rows x {} columns)",
        config.input.display(),
        table.len(),
        table.columns().len()
    );

    let range = resolve_range(&table, config.vmin, config.vmax)?;
    info!(vmin = range.vmin, vmax = range.vmax, "color range");

    let options = RenderOptions {
        colormap,
        range,
        title: config.title.clone(),
        year: config.year,
        variable: config.variable.clone(),
        unit: config.unit.clone(),
        width: config.width,
        height: config.height,
        font: config.font.clone(),
        system_fonts: config.system_fonts,
    };
    render_heatmap(&table, &options, &config.output)
        .with_context(|| format!("Failed to save output image: {}", config.output.display()))?;

    info!("Wrote: {}", config.output.display());
    Ok(())
}
