use log::debug;

use crate::cif::parse_number;
use crate::schema::TEMPERATURE;
use crate::table::{Cell, Table};

use super::BinningError;

/// Snap TEMPERATURE onto a grid of `spacing`-wide bins.
///
/// With `start` the lowest temperature and `steps = round((max - start) / spacing)`
/// (ties to even), bin `i` covers `[start + i·spacing, start + (i+1)·spacing)`
/// and its values become `(i·spacing + (i+1)·spacing) / 2`. Temperatures at
/// or above `start + steps·spacing` are left as they are.
///
/// Every value is binned from its original reading, so a midpoint written for
/// one bin is never moved again by a later one.
pub fn temperature_bins(table: &Table, spacing: f64) -> Result<Table, BinningError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(BinningError::InvalidSpacing(spacing));
    }
    if table.is_empty() {
        return Err(BinningError::EmptyTable);
    }

    let temperatures = table
        .column(TEMPERATURE)?
        .into_iter()
        .map(temperature_value)
        .collect::<Result<Vec<_>, _>>()?;

    let (start, end) = temperatures
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });
    if start > end {
        return Err(BinningError::EmptyTable);
    }
    let steps = round_half_even((end - start) / spacing) as usize;
    debug!(
        "Binning temperatures {}..{} K into {} bins of {} K",
        start, end, steps, spacing
    );

    let binned = temperatures
        .into_iter()
        .map(|value| match value {
            Some(t) => Cell::Number(bin_value(t, start, spacing, steps)),
            None => Cell::Missing,
        })
        .collect();

    Ok(table.with_column(TEMPERATURE, binned)?)
}

/// Binned value of one temperature
pub(crate) fn bin_value(t: f64, start: f64, spacing: f64, steps: usize) -> f64 {
    match bin_index(t, start, spacing) {
        Some(i) if i < steps => {
            let i = i as f64;
            (i * spacing + (i + 1.0) * spacing) / 2.0
        }
        _ => t,
    }
}

/// Index of the bin whose half-open interval holds `t`
fn bin_index(t: f64, start: f64, spacing: f64) -> Option<usize> {
    if t < start {
        return None;
    }

    let mut i = ((t - start) / spacing).floor();
    // The quotient can be one bin off at a boundary
    if start + i * spacing > t {
        i -= 1.0;
    } else if start + (i + 1.0) * spacing <= t {
        i += 1.0;
    }
    Some(i.max(0.0) as usize)
}

fn temperature_value(cell: &Cell) -> Result<Option<f64>, BinningError> {
    match cell {
        _ if cell.is_missing() => Ok(None),
        Cell::Number(value) => Ok(Some(*value)),
        Cell::Text(text) => parse_number(text)
            .map(Some)
            .ok_or_else(|| BinningError::invalid(TEMPERATURE, text)),
        other => Err(BinningError::invalid(TEMPERATURE, &other.to_string())),
    }
}

/// Round to the nearest integer, ties to even
pub(crate) fn round_half_even(value: f64) -> f64 {
    let rounded = value.round();
    if (value - value.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded - value.signum()
    } else {
        rounded
    }
}
