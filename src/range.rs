use tracing::debug;

use crate::error::PlotError;
use crate::table::MonthHourTable;

/// Padding applied to bounds derived from the data.
pub const AUTO_PADDING: f64 = 0.1;

/// Lower and upper bound of the color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorRange {
    /// Position of `value` within the range, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }
}

/// Fill in unset bounds from the table's extremes, padded by [`AUTO_PADDING`].
///
/// Explicit bounds pass through unchanged. Missing (`NaN`) cells are ignored.
pub fn resolve_range(
    table: &MonthHourTable,
    vmin: Option<f64>,
    vmax: Option<f64>,
) -> Result<ColorRange, PlotError> {
    let (vmin, vmax) = match (vmin, vmax) {
        (Some(lo), Some(hi)) => (lo, hi),
        (lo, hi) => {
            let (data_min, data_max) = value_extremes(table).ok_or(PlotError::EmptyTable)?;
            debug!(data_min, data_max, "derived color range from data");
            (
                lo.unwrap_or(data_min - AUTO_PADDING),
                hi.unwrap_or(data_max + AUTO_PADDING),
            )
        }
    };

    // plotters cannot lay out ticks over an infinite span
    if !vmin.is_finite() || !vmax.is_finite() || !(vmax - vmin).is_finite() || vmin >= vmax {
        return Err(PlotError::InvalidRange { vmin, vmax });
    }

    Ok(ColorRange { vmin, vmax })
}

fn value_extremes(table: &MonthHourTable) -> Option<(f64, f64)> {
    table
        .values()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
