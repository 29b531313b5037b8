use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use diffgrid::{available_colormaps, PlotConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a grid plot of variable differences between two locations"
)]
struct Args {
    /// Path to input pivoted CSV file
    #[arg(required_unless_present = "list_cmaps")]
    input_file: Option<PathBuf>,

    /// Output file path (format from the extension, e.g. .png)
    #[arg(required_unless_present = "list_cmaps")]
    output: Option<PathBuf>,

    /// First location name (e.g., Sydney)
    #[arg(long, default_value = "Location1")]
    location1: String,

    /// Second location name (e.g., Hauketo)
    #[arg(long, default_value = "Location2")]
    location2: String,

    /// Custom title for the plot (e.g., Sydney vs. Hauketo NOx Comparison)
    #[arg(long, default_value = "Location Comparison")]
    title: String,

    /// Year of the data (e.g., 1950)
    #[arg(long, default_value_t = 1950, allow_negative_numbers = true)]
    year: i32,

    /// Name of the variable (e.g., NOx Difference, Temperature Difference)
    #[arg(long, default_value = "Difference")]
    variable: String,

    /// Unit of the variable (e.g., µg/m³, °C)
    #[arg(long, default_value = "units")]
    unit: String,

    /// Minimum value for plotting (default: data minimum - 0.1)
    #[arg(long, allow_negative_numbers = true)]
    vmin: Option<f64>,

    /// Maximum value for plotting (default: data maximum + 0.1)
    #[arg(long, allow_negative_numbers = true)]
    vmax: Option<f64>,

    /// Colormap name, scientific colour maps first, then library maps (viridis, RdBu, coolwarm, ...)
    #[arg(long, default_value = "roma_r")]
    cmap: String,

    /// Image width in pixels before cropping
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Image height in pixels before cropping
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// TrueType font for titles and labels (default: first system font found)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Only use --font, never the system font locations
    #[arg(long)]
    no_system_fonts: bool,

    /// Print the available colormap names and exit
    #[arg(long)]
    list_cmaps: bool,
}

impl Args {
    fn into_config(self) -> Result<PlotConfig> {
        Ok(PlotConfig {
            input: self.input_file.context("input_file is required")?,
            output: self.output.context("output is required")?,
            location1: self.location1,
            location2: self.location2,
            title: self.title,
            year: self.year,
            variable: self.variable,
            unit: self.unit,
            vmin: self.vmin,
            vmax: self.vmax,
            cmap: self.cmap,
            width: self.width,
            height: self.height,
            font: self.font,
            system_fonts: !self.no_system_fonts,
        })
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_cmaps {
        for name in available_colormaps() {
            println!("{name}");
        }
        return Ok(());
    }

    diffgrid::run(&args.into_config()?)
}
