use super::*;
use crate::table::{Cell, Record, Table};
use arrow::datatypes::DataType;

fn indexed(rows: Vec<Vec<(&str, Cell)>>) -> Table {
    let records = rows
        .into_iter()
        .map(|fields| {
            let mut record = Record::new();
            for (tag, cell) in fields {
                record.insert(tag, cell);
            }
            record
        })
        .collect();
    Table::from_records(records).unwrap().set_index(ID).unwrap()
}

#[test]
fn test_default_renames_cover_default_columns() {
    for (raw, _) in DEFAULT_RENAMES {
        assert!(DEFAULT_COLUMNS.contains(raw), "{raw} is renamed but not kept");
    }
}

#[test]
fn test_every_canonical_name_has_a_kind() {
    for (_, canonical) in DEFAULT_RENAMES {
        if *canonical == ID {
            continue;
        }
        assert!(column_kind(canonical).is_some(), "{canonical} has no kind");
    }
}

#[test]
fn test_canonical_stage_accepts_cif_numbers_and_placeholders() {
    let table = indexed(vec![
        vec![(ID, "PCD_1".into()), (TEMPERATURE, "300(5)".into()), (DENSITY, "?".into())],
        vec![(ID, "PCD_2".into()), (TEMPERATURE, Cell::Missing), (DENSITY, "5.2".into())],
    ]);
    assert!(validate_table(&table, Stage::Canonical).is_ok());
}

#[test]
fn test_canonical_stage_rejects_wrong_kind() {
    let table = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (CELL_LENGTH_A, "five".into()),
    ]]);
    let err = validate_table(&table, Stage::Canonical).unwrap_err();
    assert!(matches!(
        err,
        SchemaValidationError::KindMismatch { column, row: 0, .. } if column == CELL_LENGTH_A
    ));
}

#[test]
fn test_canonical_stage_accepts_single_pressure_list() {
    let table = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (PRESSURE, Cell::List(vec!["101.3".into()])),
    ]]);
    assert!(validate_table(&table, Stage::Canonical).is_ok());

    let table = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (PRESSURE, Cell::List(vec!["101.3".into(), "0.1".into()])),
    ]]);
    assert!(validate_table(&table, Stage::Canonical).is_err());

    let table = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (DENSITY, Cell::List(vec!["5.2".into()])),
    ]]);
    assert!(validate_table(&table, Stage::Canonical).is_err());
}

#[test]
fn test_clean_stage_requires_numeric_conditions() {
    let text_temperature = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (TEMPERATURE, "300".into()),
        (PRESSURE, 101.325.into()),
    ]]);
    assert!(validate_table(&text_temperature, Stage::Clean).is_err());

    let numeric = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (TEMPERATURE, 300.0.into()),
        (PRESSURE, 101.325.into()),
    ]]);
    assert!(validate_table(&numeric, Stage::Clean).is_ok());

    let with_gap = indexed(vec![vec![
        (ID, "PCD_1".into()),
        (TEMPERATURE, 300.0.into()),
        (PRESSURE, 101.325.into()),
        (DENSITY, Cell::Missing),
    ]]);
    assert!(matches!(
        validate_table(&with_gap, Stage::Clean),
        Err(SchemaValidationError::MissingValue { .. })
    ));
}

#[test]
fn test_unindexed_table_is_rejected() {
    let table = Table::new(vec![FORMULA.to_string()]);
    assert!(matches!(
        validate_table(&table, Stage::Canonical),
        Err(SchemaValidationError::MissingIndex(_))
    ));
}

#[test]
fn test_geometry_labels() {
    let columns = GeometryColumns::default();
    assert_eq!(columns.quantities(), [CELL_LENGTH_A, CELL_LENGTH_B, CELL_LENGTH_C, VOLUME]);
    assert_eq!(columns.cte_labels()[0], "CTE CELL_LENGTH_A");
    assert_eq!(columns.r_squared_labels()[3], "R^2 VOLUME");
}

#[test]
fn test_binned_schema() {
    let schema = create_binned_schema(&GeometryColumns::default());
    assert_eq!(schema.fields().len(), 7);
    assert_eq!(
        schema.field_with_name(FORMULA).unwrap().data_type(),
        &DataType::Utf8
    );

    let temperature = schema.field_with_name(TEMPERATURE).unwrap();
    assert_eq!(temperature.data_type(), &DataType::Float64);
    assert_eq!(temperature.metadata().get("unit").unwrap(), "K");
    assert_eq!(
        schema.metadata().get("cifcte:format_version").map(String::as_str),
        Some(CIFCTE_FORMAT_VERSION)
    );
}
