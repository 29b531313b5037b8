//! Heatmap rendering: cell grid, colorbar, title and axis labels.

use std::error::Error;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use tracing::debug;

use crate::colormap::Colormap;
use crate::error::PlotError;
use crate::font::{ensure_font, FONT_FAMILY};
use crate::range::ColorRange;
use crate::table::{MonthHourTable, HOURS};

pub const MIN_WIDTH: u32 = 480;
pub const MIN_HEIGHT: u32 = 240;

const TITLE_BAND: u32 = 90;
const COLORBAR_BAND: u32 = 230;
const COLORBAR_LABEL_BAND: u32 = 70;
const X_LABEL_AREA: u32 = 70;
const Y_LABEL_AREA: u32 = 160;
const COLORBAR_STEPS: usize = 256;
// white space between the colorbar and its tick axis, as a fraction of the bar width
const COLORBAR_GAP: f64 = 0.35;
// whitespace kept around the content after cropping
const TIGHT_PAD: u32 = 10;

/// Everything the renderer needs besides the table itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub colormap: Colormap,
    pub range: ColorRange,
    pub title: String,
    pub year: i32,
    pub variable: String,
    pub unit: String,
    pub width: u32,
    pub height: u32,
    /// Font file tried before the system font locations.
    pub font: Option<PathBuf>,
    /// Fall back to the system font locations when `font` is unset or unusable.
    pub system_fonts: bool,
}

impl RenderOptions {
    pub fn title_lines(&self) -> [String; 2] {
        [
            format!("{} - Year {}", self.title, self.year),
            "Hourly data".to_string(),
        ]
    }

    pub fn colorbar_label(&self) -> String {
        format!("{} ({})", self.variable, self.unit)
    }
}

/// Render `table` as a heatmap and write it to `path`.
///
/// The figure is drawn into an in-memory buffer, cropped to its content and
/// saved in the format given by the extension of `path`, replacing any
/// existing file. Fails with [`PlotError::NoFont`] before drawing anything
/// when no font is available for the title and labels.
pub fn render_heatmap(
    table: &MonthHourTable,
    options: &RenderOptions,
    path: &Path,
) -> Result<(), PlotError> {
    if table.is_empty() {
        return Err(PlotError::EmptyTable);
    }
    let (width, height) = (options.width, options.height);
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(PlotError::ImageTooSmall {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }

    let font =
        ensure_font(options.font.as_deref(), options.system_fonts).ok_or(PlotError::NoFont)?;
    debug!(font = %font.display(), "using font");

    let mut buffer = vec![255u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;
        draw_figure(&root, table, options)?;
        root.present().map_err(drawing_error)?;
    }

    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PlotError::Drawing("figure buffer has the wrong size".to_string()))?;
    let cropped = crop_to_content(&img, TIGHT_PAD);
    debug!(
        width = cropped.width(),
        height = cropped.height(),
        "cropped figure"
    );

    cropped.save(path)?;
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &MonthHourTable,
    options: &RenderOptions,
) -> Result<(), PlotError> {
    let (width, _) = root.dim_in_pixel();
    let (title_area, body) = root.split_vertically(TITLE_BAND);
    let (plot_area, side_area) = body.split_horizontally(width - COLORBAR_BAND);
    let (bar_area, bar_label_area) =
        side_area.split_horizontally(COLORBAR_BAND - COLORBAR_LABEL_BAND);

    draw_cells(&plot_area, table, options)?;
    draw_colorbar(&bar_area, options)?;

    let label_style = TextStyle::from(
        (FONT_FAMILY, 22)
            .into_font()
            .transform(FontTransform::Rotate270),
    )
    .color(&BLACK)
    .pos(Pos::new(HPos::Center, VPos::Center));
    let (label_w, label_h) = bar_label_area.dim_in_pixel();
    bar_label_area
        .draw_text(
            &options.colorbar_label(),
            &label_style,
            (label_w as i32 / 2, (label_h - X_LABEL_AREA) as i32 / 2),
        )
        .map_err(drawing_error)?;

    draw_title(&title_area, options)
}

fn draw_cells<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &MonthHourTable,
    options: &RenderOptions,
) -> Result<(), PlotError> {
    let n_rows = table.len() as i32;
    let n_hours = HOURS as i32;

    // rows run top to bottom, so the y axis is flipped
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0i32..n_hours, n_rows..0i32)
        .map_err(drawing_error)?;

    let matrix = table.hour_matrix();
    let cells = matrix.iter().zip(0i32..).flat_map(|(row, y)| {
        row.iter()
            .zip(0i32..)
            .filter(|(v, _)| v.is_finite())
            .map(move |(v, x)| (x, y, *v))
    });
    chart
        .draw_series(cells.map(|(x, y, v)| {
            let color = options.colormap.sample(options.range.normalize(v));
            Rectangle::new([(x, y), (x + 1, y + 1)], color.filled())
        }))
        .map_err(drawing_error)?;

    let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
    let cell_w = plot_w as i32 / n_hours;
    let cell_h = plot_h as i32 / n_rows;
    let labels = table.row_labels();
    let month_label = |y: &i32| {
        usize::try_from(*y)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default()
    };
    let hour_label = |x: &i32| {
        if (0..n_hours).contains(x) {
            x.to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(HOURS + 1)
        .y_labels(table.len() + 1)
        .x_label_offset(cell_w / 2)
        .y_label_offset(cell_h / 2)
        .x_label_formatter(&hour_label)
        .y_label_formatter(&month_label)
        .x_desc("Local time (hours)")
        .y_desc("Month of the year")
        .label_style((FONT_FAMILY, 18))
        .axis_desc_style((FONT_FAMILY, 22))
        .draw()
        .map_err(drawing_error)
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    options: &RenderOptions,
) -> Result<(), PlotError> {
    let ColorRange { vmin, vmax } = options.range;

    // same vertical margins as the heatmap so the bar lines up with the grid
    let mut chart = ChartBuilder::on(area)
        .margin_top(10)
        .margin_bottom(10)
        .margin_left(30)
        .set_label_area_size(LabelAreaPosition::Left, 0)
        .set_label_area_size(LabelAreaPosition::Bottom, X_LABEL_AREA)
        .set_label_area_size(LabelAreaPosition::Right, 90)
        .build_cartesian_2d(0.0..1.0 + COLORBAR_GAP, vmin..vmax)
        .map_err(drawing_error)?;

    let step = (vmax - vmin) / COLORBAR_STEPS as f64;
    chart
        .draw_series((0..COLORBAR_STEPS).map(|i| {
            let lo = vmin + step * i as f64;
            let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            Rectangle::new(
                [(0.0, lo), (1.0, lo + step)],
                options.colormap.sample(t).filled(),
            )
        }))
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(7)
        .set_tick_mark_size(LabelAreaPosition::Right, 6)
        .y_label_formatter(&|v| format!("{v:.2}"))
        .label_style((FONT_FAMILY, 18))
        .draw()
        .map_err(drawing_error)
}

fn draw_title<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    options: &RenderOptions,
) -> Result<(), PlotError> {
    let (w, h) = area.dim_in_pixel();
    let style = TextStyle::from((FONT_FAMILY, 26).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let [first, second] = options.title_lines();
    let x = w as i32 / 2;
    area.draw_text(&first, &style, (x, h as i32 * 2 / 5)).map_err(drawing_error)?;
    area.draw_text(&second, &style, (x, h as i32 * 3 / 4)).map_err(drawing_error)
}

// --- error plumbing ---

fn drawing_error<E: Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Drawing(err.to_string())
}

// --- tight bounding box ---

fn crop_to_content(img: &RgbImage, pad: u32) -> RgbImage {
    let background = Rgb([255u8, 255, 255]);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, p) in img.enumerate_pixels() {
        if *p == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let Some((x0, y0, x1, y1)) = bounds else {
        return img.clone();
    };

    let (w, h) = img.dimensions();
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(w - 1);
    let bottom = (y1 + pad).min(h - 1);

    image::imageops::crop_imm(img, left, top, right - left + 1, bottom - top + 1).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::resolve_colormap;
    use crate::table::tests::month_hour_csv;
    use crate::table::{hour_columns, read_table};
    use tempfile::tempdir;

    fn options() -> RenderOptions {
        RenderOptions {
            colormap: resolve_colormap("roma_r").unwrap(),
            range: ColorRange {
                vmin: -1.0,
                vmax: 1.0,
            },
            title: "Sydney vs. Hauketo".to_string(),
            year: 1987,
            variable: "NOx Difference".to_string(),
            unit: "µg/m³".to_string(),
            width: 1600,
            height: 800,
            font: None,
            system_fonts: true,
        }
    }

    #[test]
    fn test_labels() {
        let opts = options();
        assert_eq!(
            opts.title_lines(),
            [
                "Sydney vs. Hauketo - Year 1987".to_string(),
                "Hourly data".to_string()
            ]
        );
        assert_eq!(opts.colorbar_label(), "NOx Difference (µg/m³)");
    }

    #[test]
    fn test_render_subset_of_months() {
        let csv = month_hour_csv(&["January", "July"], &hour_columns(), |r, c| {
            (r as f64 - 0.5) * c as f64 / 23.0
        });
        let table = read_table(csv.as_bytes()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");
        render_heatmap(&table, &options(), &path).unwrap();

        let img = image::open(&path).unwrap();
        assert!(img.width() > 0 && img.width() <= 1600);
        assert!(img.height() > 0 && img.height() <= 800);
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let csv = month_hour_csv(&["March"], &hour_columns(), |_, _| 0.0);
        let table = read_table(csv.as_bytes()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");
        std::fs::write(&path, b"stale").unwrap();

        render_heatmap(&table, &options(), &path).unwrap();
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_render_rejects_empty_table() {
        let csv = month_hour_csv(&[], &hour_columns(), |_, _| 0.0);
        let table = read_table(csv.as_bytes()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let result = render_heatmap(&table, &options(), &path);

        assert!(matches!(result, Err(PlotError::EmptyTable)));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_rejects_tiny_image() {
        let csv = month_hour_csv(&["March"], &hour_columns(), |_, _| 0.0);
        let table = read_table(csv.as_bytes()).unwrap();
        let opts = RenderOptions {
            width: 100,
            ..options()
        };

        let dir = tempdir().unwrap();
        let result = render_heatmap(&table, &opts, &dir.path().join("grid.png"));
        assert!(matches!(result, Err(PlotError::ImageTooSmall { .. })));
    }

    #[test]
    fn test_render_fails_without_font() {
        let csv = month_hour_csv(&["March"], &hour_columns(), |_, _| 0.0);
        let table = read_table(csv.as_bytes()).unwrap();

        let dir = tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"no glyphs in here").unwrap();
        let opts = RenderOptions {
            font: Some(bogus),
            system_fonts: false,
            ..options()
        };

        let path = dir.path().join("grid.png");
        let result = render_heatmap(&table, &opts, &path);
        assert!(matches!(result, Err(PlotError::NoFont)));
        assert!(!path.exists());
    }

    #[test]
    fn test_colorbar_ticks_clear_of_bar() {
        ensure_font(None, true).unwrap();
        let (w, h) = (300u32, 600u32);
        let mut buffer = vec![255u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
            draw_colorbar(&root, &options()).unwrap();
            root.present().unwrap();
        }
        let img = RgbImage::from_raw(w, h, buffer).unwrap();

        // text, ticks and the axis line are all shades of grey
        let y = h / 2;
        let bar_right = (0..w)
            .rev()
            .find(|&x| {
                let Rgb([r, g, b]) = *img.get_pixel(x, y);
                !(r == g && g == b)
            })
            .unwrap();
        for x in bar_right + 1..=bar_right + 4 {
            assert_eq!(img.get_pixel(x, y), &Rgb([255, 255, 255]), "column {x}");
        }
    }

    #[test]
    fn test_crop_to_content() {
        let mut img = RgbImage::from_pixel(100, 60, Rgb([255, 255, 255]));
        img.put_pixel(40, 20, Rgb([0, 0, 0]));
        img.put_pixel(50, 30, Rgb([10, 10, 10]));

        let cropped = crop_to_content(&img, 5);
        assert_eq!(cropped.dimensions(), (21, 21));
        assert_eq!(cropped.get_pixel(5, 5), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_crop_blank_image_is_unchanged() {
        let img = RgbImage::from_pixel(30, 20, Rgb([255, 255, 255]));
        assert_eq!(crop_to_content(&img, 5).dimensions(), (30, 20));
    }
}
