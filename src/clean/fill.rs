use serde::{Deserialize, Serialize};

use crate::cif::{is_placeholder, strip_annotations};
use crate::schema::{PRESSURE, TEMPERATURE};
use crate::table::{Cell, Table};

use super::CleanError;

/// Room temperature in K
pub const ROOM_TEMPERATURE: f64 = 293.15;
/// Room pressure as recorded by the source databases
pub const ROOM_PRESSURE: f64 = 101.325;

/// Value used for missing PRESSURE cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PressureFill {
    /// Fill with the room temperature value (historical pipeline behavior)
    #[default]
    RoomTemperature,
    /// Fill with the room pressure value
    RoomPressure,
}

/// Imputation settings for [`fill_missing_values`]
#[derive(Debug, Clone, PartialEq)]
pub struct FillOptions {
    /// Value for missing TEMPERATURE
    pub room_temperature: f64,
    /// Value for missing PRESSURE when [`PressureFill::RoomPressure`] is selected
    pub room_pressure: f64,
    /// Which default fills PRESSURE
    pub pressure_fill: PressureFill,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            room_temperature: ROOM_TEMPERATURE,
            room_pressure: ROOM_PRESSURE,
            pressure_fill: PressureFill::default(),
        }
    }
}

impl FillOptions {
    fn pressure_default(&self) -> f64 {
        match self.pressure_fill {
            PressureFill::RoomTemperature => self.room_temperature,
            PressureFill::RoomPressure => self.room_pressure,
        }
    }
}

/// Impute missing experimental conditions.
///
/// 1. Every text cell containing `?` becomes missing.
/// 2. TEMPERATURE and PRESSURE lose parenthesized annotations and are parsed
///    as numbers; anything unparseable is an error.
/// 3. Missing TEMPERATURE and PRESSURE cells are filled from `options`.
///
/// Afterwards both columns hold only numbers.
pub fn fill_missing_values(table: &Table, options: &FillOptions) -> Result<Table, CleanError> {
    let mut table = table.clone();

    let columns = table.columns().to_vec();
    for column in &columns {
        table = table.map_column(column, |cell| {
            Ok::<_, CleanError>(match cell {
                Cell::Text(text) if text.contains('?') => Cell::Missing,
                other => other.clone(),
            })
        })?;
    }

    let fills = [
        (TEMPERATURE, options.room_temperature),
        (PRESSURE, options.pressure_default()),
    ];
    for (column, default) in fills {
        table = table.map_column(column, |cell| -> Result<Cell, CleanError> {
            Ok(Cell::Number(parse_condition(column, cell)?.unwrap_or(default)))
        })?;
    }

    Ok(table)
}

/// Parse a temperature or pressure cell. `None` means missing.
fn parse_condition(column: &str, cell: &Cell) -> Result<Option<f64>, CleanError> {
    let text = match cell {
        _ if cell.is_missing() => return Ok(None),
        Cell::Number(value) => return Ok(Some(*value)),
        Cell::Text(text) => text.as_str(),
        Cell::List(values) if values.len() == 1 => values[0].as_str(),
        other => {
            return Err(CleanError::InvalidNumber {
                column: column.to_string(),
                value: other.to_string(),
            })
        }
    };

    if is_placeholder(text) {
        return Ok(None);
    }
    strip_annotations(text)
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CleanError::InvalidNumber {
            column: column.to_string(),
            value: text.to_string(),
        })
}
