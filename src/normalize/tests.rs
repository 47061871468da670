use super::*;
use crate::schema::{DATABASE, PRESSURE, RAW_DATABASE, RAW_ID, TEMPERATURE};
use crate::table::Record;
use serde_json::json;

fn raw_record(id: &str, formula: &str, spacegroup: &str) -> Record {
    let mut record = Record::new();
    record.insert(RAW_DATABASE, Cell::from("PCD"));
    record.insert(RAW_ID, Cell::from(id));
    record.insert("_chemical_formula_sum", Cell::from(formula));
    record.insert("_space_group_name_H-M_alt", Cell::from(spacegroup));
    record.insert("_space_group_IT_number", Cell::from("167"));
    record.insert("_diffrn_ambient_temperature", Cell::from("300(5)"));
    for tag in ["_cell_length_a", "_cell_length_b", "_cell_length_c"] {
        record.insert(tag, Cell::from("5.0356(1)"));
    }
    for tag in ["_cell_angle_alpha", "_cell_angle_beta"] {
        record.insert(tag, Cell::from("90"));
    }
    record.insert("_cell_angle_gamma", Cell::from("120"));
    record.insert("_cell_volume", Cell::from("301.93"));
    record.insert("_diffrn_ambient_pressure", Cell::Missing);
    record.insert("_exptl_crystal_density_diffrn", Cell::from("5.27"));
    record.insert(
        "_atom_type_symbol",
        Cell::List(vec!["Fe3+".to_string(), "O2-".to_string()]),
    );
    record.insert("_journal_year", Cell::from("1966"));
    record.insert("_journal_volume", Cell::from("45"));
    record.insert("_journal_page_first", Cell::from("123"));
    record.insert("_journal_page_last", Cell::from("130"));
    record.insert("@module", Cell::Structure(json!("cifcte.structure")));
    record.insert("@class", Cell::Structure(json!("Structure")));
    record.insert("charge", Cell::Structure(json!(0.0)));
    record.insert("lattice", Cell::Structure(json!({ "a": 5.0356 })));
    record.insert("sites", Cell::Structure(json!([])));
    record.insert("_publ_section_title", Cell::from("not kept"));
    record
}

fn raw_table(records: Vec<Record>) -> Table {
    Table::from_records(records).unwrap()
}

#[test]
fn test_keep_columns_defaults_drop_extra_tags() {
    let table = raw_table(vec![raw_record("PCD_1", "Fe2 O3", "R -3 c H")]);
    let kept = keep_columns(&table, None).unwrap();
    assert_eq!(kept.columns().len(), DEFAULT_COLUMNS.len());
    assert!(!kept.has_column("_publ_section_title"));
}

#[test]
fn test_keep_columns_reports_every_missing_column() {
    let table = raw_table(vec![raw_record("PCD_1", "Fe2 O3", "R -3 c H")]);
    let err = keep_columns(&table, Some(&["data_", "_missing_a", "_missing_b"][..])).unwrap_err();
    match err {
        TableError::MissingColumns(columns) => {
            assert_eq!(columns, vec!["_missing_a", "_missing_b"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rename_columns_indexes_by_id() {
    let table = raw_table(vec![
        raw_record("PCD_1", "Fe2 O3", "R -3 c H"),
        raw_record("ICSD_1", "Fe2 O3", "R -3 c H"),
    ]);
    let renamed = rename_columns(&keep_columns(&table, None).unwrap(), None).unwrap();
    assert_eq!(renamed.index_name(), Some(ID));
    assert_eq!(
        renamed.index_labels().unwrap(),
        &["PCD_1".to_string(), "ICSD_1".to_string()]
    );
    assert!(renamed.has_column(FORMULA));
    assert!(renamed.has_column(DATABASE));
    assert!(!renamed.has_column(RAW_ID));
}

#[test]
fn test_rename_columns_rejects_duplicate_ids() {
    let table = raw_table(vec![
        raw_record("PCD_1", "Fe2 O3", "R -3 c H"),
        raw_record("PCD_1", "Fe2 O3", "R -3 c H"),
    ]);
    assert!(matches!(
        rename_columns(&table, None),
        Err(TableError::DuplicateIndex(_))
    ));
}

#[test]
fn test_normalize_formula_variants() {
    let table = raw_table(vec![
        raw_record("PCD_1", "Fe2 O3", "R -3 c H"),
        raw_record("PCD_2", "Fe2 ~O3", "R -3 c H"),
        raw_record("PCD_3", "Ca (O H)2", "P -3 m 1"),
    ]);
    let normalized = normalize(&table, &NormalizeOptions::default()).unwrap();

    let formulas: Vec<String> = normalized
        .column(FORMULA)
        .unwrap()
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(formulas, vec!["Fe2O3", "Fe2O3", "Ca1O2H2"]);
}

#[test]
fn test_normalize_canonical_fields() {
    let table = raw_table(vec![raw_record("PCD_1", "Fe2 O3", "R -3 c H")]);
    let normalized = normalize(&table, &NormalizeOptions::default()).unwrap();

    assert_eq!(normalized.cell(0, SPACEGROUP_SYM), Some(&Cell::from("R-3cH")));
    assert_eq!(normalized.cell(0, ELEMENT_COUNT), Some(&Cell::Number(2.0)));
    assert_eq!(
        normalized.cell(0, REFERENCE),
        Some(&Cell::from("(1966) 45, 123-130"))
    );
    assert!(!normalized.has_column(JOURNAL_VOLUME));
    assert!(!normalized.has_column(JOURNAL_PAGE_FIRST));
    assert!(!normalized.has_column(JOURNAL_PAGE_LAST));
    // Annotated numbers are left for the cleaner
    assert_eq!(normalized.cell(0, TEMPERATURE), Some(&Cell::from("300(5)")));
    assert_eq!(normalized.cell(0, PRESSURE), Some(&Cell::Missing));
}

#[test]
fn test_missing_reference_parts_render_as_placeholder() {
    let mut record = raw_record("PCD_1", "Fe2 O3", "R -3 c H");
    record.insert("_journal_volume", Cell::Missing);
    let normalized = normalize(&raw_table(vec![record]), &NormalizeOptions::default()).unwrap();
    assert_eq!(
        normalized.cell(0, REFERENCE),
        Some(&Cell::from("(1966) n/a, 123-130"))
    );
}

#[test]
fn test_list_cells_are_joined_except_unjoined_columns() {
    let mut record = raw_record("PCD_1", "Fe2 O3", "R -3 c H");
    record.insert(
        "_diffrn_ambient_pressure",
        Cell::List(vec!["101.3".to_string()]),
    );
    record.insert(
        "_exptl_crystal_density_diffrn",
        Cell::List(vec!["5.2".to_string(), "5.3".to_string()]),
    );
    let renamed = rename_columns(&keep_columns(&raw_table(vec![record]), None).unwrap(), None).unwrap();
    let cleaned = remove_characters(&renamed).unwrap();

    assert_eq!(
        cleaned.cell(0, PRESSURE),
        Some(&Cell::List(vec!["101.3".to_string()]))
    );
    assert_eq!(cleaned.cell(0, "DENSITY"), Some(&Cell::from("5.2, 5.3")));
}

#[test]
fn test_malformed_formula_is_an_error() {
    let table = raw_table(vec![raw_record("PCD_1", "Fe2 O3)", "R -3 c H")]);
    assert!(matches!(
        normalize(&table, &NormalizeOptions::default()),
        Err(NormalizeError::Formula { .. })
    ));
}

#[test]
fn test_spacegroup_origin_choice() {
    assert_eq!(normalize_spacegroup("F d -3 m (originchoice2)"), "Fd-3m O2");
    assert_eq!(normalize_spacegroup("P 21/c ~"), "P21/c");
    // Only the spelled-out origin choice gains a space
    assert_eq!(normalize_spacegroup("P 4/n O2"), "P4/nO2");
}

#[test]
fn test_reference_requires_journal_columns() {
    let table = raw_table(vec![raw_record("PCD_1", "Fe2 O3", "R -3 c H")]);
    let columns = [
        "data_",
        "database",
        "_chemical_formula_sum",
        "_journal_year",
        "_journal_volume",
    ];
    let options = NormalizeOptions {
        columns: Some(columns.iter().map(|column| column.to_string()).collect()),
        ..NormalizeOptions::default()
    };

    match normalize(&table, &options).unwrap_err() {
        NormalizeError::Table(TableError::MissingColumns(missing)) => {
            assert_eq!(missing, vec![JOURNAL_PAGE_FIRST, JOURNAL_PAGE_LAST]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_keep_and_rename_are_idempotent_on_canonical_table() {
    let table = raw_table(vec![
        raw_record("PCD_1", "Fe2 O3", "R -3 c H"),
        raw_record("PCD_2", "Na Cl", "F m -3 m"),
    ]);
    let normalized = normalize(&table, &NormalizeOptions::default()).unwrap();

    let canonical: Vec<&str> = normalized.columns().iter().map(String::as_str).collect();
    let again = rename_columns(&keep_columns(&normalized, Some(canonical.as_slice())).unwrap(), None).unwrap();
    assert_eq!(again, normalized);
}

#[test]
fn test_composition_parsing() {
    let composition = Composition::parse("K0.5Na0.5NbO3").unwrap();
    assert_eq!(composition.to_string(), "K0.5Na0.5Nb1O3");
    assert_eq!(composition.count("O"), 3.0);

    let nested = Composition::parse("Ca3[Al(OH)4]2").unwrap();
    assert_eq!(nested.count("Al"), 2.0);
    assert_eq!(nested.count("O"), 8.0);
    assert_eq!(nested.count("H"), 8.0);

    let repeated = Composition::parse("CH3COOH").unwrap();
    assert_eq!(repeated.to_string(), "C2H4O2");

    assert_eq!(Composition::parse(""), Err(FormulaError::Empty));
    assert!(matches!(
        Composition::parse("Fe2(O3"),
        Err(FormulaError::UnbalancedBracket(3))
    ));
    assert!(matches!(
        Composition::parse("fe2"),
        Err(FormulaError::UnexpectedCharacter { character: 'f', .. })
    ));
    assert!(matches!(
        Composition::parse("Fe1.2.3"),
        Err(FormulaError::InvalidCount(_))
    ));
    let huge = format!("Fe{}", "9".repeat(400));
    assert!(matches!(
        Composition::parse(&huge),
        Err(FormulaError::InvalidCount(_))
    ));
}
