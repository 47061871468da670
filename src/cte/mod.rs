//! # Thermal Expansion Estimation
//!
//! For every crystal in a [`BinnedTable`], fits `ln(quantity)` against
//! temperature for the a, b and c cell lengths and the cell volume. The
//! slope of each fit is the coefficient of thermal expansion (1/K) and its
//! squared correlation is the goodness of fit.
//!
//! Fits that are not defined (one temperature, or a non-positive quantity)
//! come back as NaN rather than as an error.

pub mod regression;


use log::{debug, info};
use serde::Serialize;

use crate::binning::{BinnedTable, GroupKey};
use crate::schema::{GeometryColumns, FORMULA, SPACEGROUP_SYM};

use regression::fit;

/// Errors raised by [`estimate`]
#[derive(Debug, thiserror::Error)]
pub enum CteError {
    /// There are no binned rows to fit
    #[error("Cannot estimate CTE from an empty binned table")]
    EmptyTable,
}

/// CTE and R² of one quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisFit {
    /// Slope of ln(quantity) against temperature (1/K)
    pub cte: f64,
    /// Squared correlation of the fit
    pub r_squared: f64,
}

/// Fits of one crystal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CteRow {
    /// Crystal
    pub key: GroupKey,
    /// Fits for a, b, c and volume, in that order
    pub fits: [AxisFit; 4],
}

/// One row of fits per crystal, in key order
#[derive(Debug, Clone, PartialEq)]
pub struct CteTable {
    columns: GeometryColumns,
    rows: Vec<CteRow>,
}

impl CteTable {
    /// Column names the fits were computed from
    pub fn columns(&self) -> &GeometryColumns {
        &self.columns
    }

    /// Rows in key order
    pub fn rows(&self) -> &[CteRow] {
        &self.rows
    }

    /// Number of crystals
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no crystals
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for one crystal
    pub fn get(&self, key: &GroupKey) -> Option<&CteRow> {
        self.rows.iter().find(|row| &row.key == key)
    }

    /// Header row: FORMULA, SPACEGROUP_SYM, then `CTE <col>` / `R^2 <col>`
    /// pairs for a, b, c and volume.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![FORMULA.to_string(), SPACEGROUP_SYM.to_string()];
        let cte = self.columns.cte_labels();
        let r_squared = self.columns.r_squared_labels();
        for (cte, r_squared) in cte.into_iter().zip(r_squared) {
            headers.push(cte);
            headers.push(r_squared);
        }
        headers
    }
}

/// Fit every crystal of a binned table.
pub fn estimate(binned: &BinnedTable) -> Result<CteTable, CteError> {
    if binned.is_empty() {
        return Err(CteError::EmptyTable);
    }

    let mut rows = Vec::new();
    for (key, group) in binned.groups() {
        let temperatures: Vec<f64> = group.iter().map(|row| row.temperature).collect();

        let mut fits = [AxisFit {
            cte: f64::NAN,
            r_squared: f64::NAN,
        }; 4];
        for (axis, slot) in fits.iter_mut().enumerate() {
            let logs: Vec<f64> = group.iter().map(|row| row.quantities()[axis].ln()).collect();
            let line = fit(&temperatures, &logs);
            *slot = AxisFit {
                cte: line.slope,
                r_squared: line.r_squared(),
            };
        }

        debug!("{}: {} temperatures, volume CTE {:e}", key, group.len(), fits[3].cte);
        rows.push(CteRow {
            key: key.clone(),
            fits,
        });
    }

    info!("Estimated CTE for {} crystals", rows.len());
    Ok(CteTable {
        columns: binned.columns().clone(),
        rows,
    })
}
