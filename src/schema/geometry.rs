use serde::{Deserialize, Serialize};

use super::columns::{CELL_LENGTH_A, CELL_LENGTH_B, CELL_LENGTH_C, TEMPERATURE, VOLUME};

/// Names of the temperature column and the four geometry columns used for
/// averaging and regression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryColumns {
    /// Temperature column
    pub temperature: String,
    /// Cell length a column
    pub a: String,
    /// Cell length b column
    pub b: String,
    /// Cell length c column
    pub c: String,
    /// Cell volume column
    pub volume: String,
}

impl Default for GeometryColumns {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE.to_string(),
            a: CELL_LENGTH_A.to_string(),
            b: CELL_LENGTH_B.to_string(),
            c: CELL_LENGTH_C.to_string(),
            volume: VOLUME.to_string(),
        }
    }
}

impl GeometryColumns {
    /// The four geometry columns in a, b, c, volume order
    pub fn quantities(&self) -> [&str; 4] {
        [&self.a, &self.b, &self.c, &self.volume]
    }

    /// `CTE <column>` labels in a, b, c, volume order
    pub fn cte_labels(&self) -> [String; 4] {
        self.quantities().map(|name| format!("CTE {name}"))
    }

    /// `R^2 <column>` labels in a, b, c, volume order
    pub fn r_squared_labels(&self) -> [String; 4] {
        self.quantities().map(|name| format!("R^2 {name}"))
    }
}
