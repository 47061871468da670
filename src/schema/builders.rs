use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

use super::columns::{FORMULA, SPACEGROUP_SYM};
use super::{GeometryColumns, CIFCTE_FORMAT_VERSION};

fn unit_field(name: &str, unit: &str) -> Field {
    Field::new(name, DataType::Float64, false).with_metadata(HashMap::from([(
        "unit".to_string(),
        unit.to_string(),
    )]))
}

/// Arrow schema of the temperature-binned geometry table
pub fn create_binned_schema(columns: &GeometryColumns) -> Schema {
    let fields = vec![
        Field::new(FORMULA, DataType::Utf8, false),
        Field::new(SPACEGROUP_SYM, DataType::Utf8, false),
        unit_field(&columns.temperature, "K"),
        unit_field(&columns.a, "angstrom"),
        unit_field(&columns.b, "angstrom"),
        unit_field(&columns.c, "angstrom"),
        unit_field(&columns.volume, "angstrom^3"),
    ];

    Schema::new(fields).with_metadata(HashMap::from([(
        "cifcte:format_version".to_string(),
        CIFCTE_FORMAT_VERSION.to_string(),
    )]))
}

/// Arc-wrapped [`create_binned_schema`]
pub fn create_binned_schema_arc(columns: &GeometryColumns) -> Arc<Schema> {
    Arc::new(create_binned_schema(columns))
}
