use std::fmt::Write as _;
use std::path::Path;

use diffgrid::table::{hour_columns, INDEX_COLUMN, MONTH_NAMES};
use diffgrid::{run, PlotConfig, PlotError};
use tempfile::tempdir;

fn write_table(path: &Path, months: &[&str], hours: &[String], value: f64) {
    let mut csv = String::from("# Sydney - Hauketo, hourly NOx difference\n");
    csv.push_str(INDEX_COLUMN);
    for h in hours {
        write!(csv, ",{h}").unwrap();
    }
    csv.push('\n');
    for month in months {
        csv.push_str(month);
        for _ in hours {
            write!(csv, ",{value}").unwrap();
        }
        csv.push('\n');
    }
    std::fs::write(path, csv).unwrap();
}

fn config_for(dir: &Path) -> PlotConfig {
    PlotConfig {
        input: dir.join("pivot.csv"),
        output: dir.join("grid.png"),
        title: "Test".to_string(),
        year: 2000,
        variable: "X".to_string(),
        unit: "u".to_string(),
        ..Default::default()
    }
}

#[test]
fn zeros_table_renders_png() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    write_table(&config.input, &MONTH_NAMES, &hour_columns(), 0.0);

    run(&config).unwrap();

    let metadata = std::fs::metadata(&config.output).unwrap();
    assert!(metadata.len() > 0);
    let img = image::open(&config.output).unwrap();
    assert!(img.width() > 0 && img.height() > 0);
}

#[test]
fn output_format_follows_extension() {
    let dir = tempdir().unwrap();
    let config = PlotConfig {
        output: dir.path().join("grid.bmp"),
        cmap: "viridis_r".to_string(),
        vmin: Some(-1.0),
        vmax: Some(1.0),
        ..config_for(dir.path())
    };
    write_table(&config.input, &["January", "February"], &hour_columns(), 0.5);

    run(&config).unwrap();

    let format = image::ImageFormat::from_path(&config.output).unwrap();
    assert_eq!(format, image::ImageFormat::Bmp);
    assert!(image::open(&config.output).is_ok());
}

#[test]
fn unknown_colormap_fails_before_reading_input() {
    let dir = tempdir().unwrap();
    let config = PlotConfig {
        cmap: "not_a_real_cmap".to_string(),
        ..config_for(dir.path())
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::UnknownColormap(_))
    ));
    assert!(!config.output.exists());
}

#[test]
fn missing_column_leaves_no_output() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    let hours: Vec<String> = hour_columns().into_iter().filter(|h| h != "17").collect();
    write_table(&config.input, &MONTH_NAMES, &hours, 1.0);

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::MissingColumns { .. })
    ));
    assert!(err.to_string().contains("pivot.csv"));
    assert!(!config.output.exists());
}

#[test]
fn invalid_month_is_reported() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    write_table(&config.input, &["January", "Smarch"], &hour_columns(), 1.0);

    let err = run(&config).unwrap_err();
    match err.downcast_ref::<PlotError>() {
        Some(PlotError::InvalidRowLabels { invalid, .. }) => {
            assert_eq!(invalid, &vec!["Smarch".to_string()])
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_table_is_rejected() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    write_table(&config.input, &[], &hour_columns(), 0.0);

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::EmptyTable)
    ));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::Io(_))
    ));
}

#[test]
fn unbounded_color_range_is_rejected() {
    let dir = tempdir().unwrap();
    let config = PlotConfig {
        vmin: Some(f64::NEG_INFINITY),
        ..config_for(dir.path())
    };
    write_table(&config.input, &MONTH_NAMES, &hour_columns(), 1.0);

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::InvalidRange { .. })
    ));
    assert!(!config.output.exists());
}

#[test]
fn extreme_values_are_rejected() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    write_table(&config.input, &["January"], &hour_columns(), 1e308);
    let mut csv = std::fs::read_to_string(&config.input).unwrap();
    csv.push_str(&format!("February{}\n", ",-1e308".repeat(hour_columns().len())));
    std::fs::write(&config.input, csv).unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::InvalidRange { .. })
    ));
}

#[test]
fn unusable_font_fails_without_output() {
    let dir = tempdir().unwrap();
    let font = dir.path().join("broken.ttf");
    std::fs::write(&font, b"not a font").unwrap();
    let config = PlotConfig {
        font: Some(font),
        system_fonts: false,
        ..config_for(dir.path())
    };
    write_table(&config.input, &MONTH_NAMES, &hour_columns(), 0.0);

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlotError>(),
        Some(PlotError::NoFont)
    ));
    assert!(!config.output.exists());
}
