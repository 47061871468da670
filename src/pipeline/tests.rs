use super::*;
use crate::binning::GroupKey;
use crate::clean::PressureFill;
use crate::schema::{PRESSURE, TEMPERATURE};
use crate::table::{Cell, Record};
use serde_json::json;

const ALPHA: f64 = 1.5e-5;

fn raw_record(id: &str, formula: &str, temperature: f64) -> Record {
    let a = 5.6 * (ALPHA * temperature).exp();
    let mut record = Record::new();
    record.insert("database", Cell::from("PCD"));
    record.insert("data_", Cell::from(id));
    record.insert("_chemical_formula_sum", Cell::from(formula));
    record.insert("_space_group_name_H-M_alt", Cell::from("F m -3 m"));
    record.insert("_space_group_IT_number", Cell::from("225"));
    record.insert(
        "_diffrn_ambient_temperature",
        Cell::Text(format!("{temperature}(2)")),
    );
    for tag in ["_cell_length_a", "_cell_length_b", "_cell_length_c"] {
        record.insert(tag, Cell::Text(a.to_string()));
    }
    for tag in ["_cell_angle_alpha", "_cell_angle_beta", "_cell_angle_gamma"] {
        record.insert(tag, Cell::from("90"));
    }
    record.insert("_cell_volume", Cell::Text((a * a * a).to_string()));
    record.insert("_diffrn_ambient_pressure", Cell::from("?"));
    record.insert("_exptl_crystal_density_diffrn", Cell::from("2.16"));
    record.insert(
        "_atom_type_symbol",
        Cell::List(vec!["Na1+".to_string(), "Cl1-".to_string()]),
    );
    record.insert("_journal_year", Cell::from("1990"));
    record.insert("_journal_volume", Cell::from("12"));
    record.insert("_journal_page_first", Cell::from("1"));
    record.insert("_journal_page_last", Cell::from("9"));
    record.insert("@module", Cell::Structure(json!("cifcte.structure")));
    record.insert("@class", Cell::Structure(json!("Structure")));
    record.insert("charge", Cell::Structure(json!(0.0)));
    record.insert("lattice", Cell::Structure(json!({ "a": a })));
    record.insert("sites", Cell::Structure(json!([])));
    record
}

fn raw_table() -> Table {
    Table::from_records(vec![
        raw_record("PCD_1", "Na Cl", 100.0),
        raw_record("PCD_2", "Na Cl", 200.0),
        raw_record("PCD_3", "Na Cl", 300.0),
        raw_record("PCD_4", "K Cl", 300.0),
    ])
    .unwrap()
}

#[test]
fn test_process_end_to_end() {
    let config = PipelineConfig {
        // Wide bins leave the measured temperatures as they are
        bin_spacing: 1000.0,
        ..PipelineConfig::default()
    };
    let output = Pipeline::new(config).process(&raw_table()).unwrap();

    assert_eq!(output.row_summary.kept_entries, 4);
    assert_eq!(output.group_sizes.get(&3), Some(&1));
    assert_eq!(output.group_sizes.get(&1), Some(&1));
    assert_eq!(output.entry_summary.kept_crystals, 1);
    assert_eq!(output.entry_summary.removed_entries, 1);

    assert_eq!(output.clean.len(), 3);
    assert_eq!(output.clean.cell(0, TEMPERATURE), Some(&Cell::Number(100.0)));
    // Missing pressure takes the room temperature value by default
    assert_eq!(output.clean.cell(0, PRESSURE), Some(&Cell::Number(293.15)));

    assert_eq!(output.binned.len(), 3);
    assert_eq!(output.cte.len(), 1);
    let nacl = output.cte.get(&GroupKey::new("Na1Cl1", "Fm-3m")).unwrap();
    assert!((nacl.fits[0].cte - ALPHA).abs() < 1e-9);
    assert!((nacl.fits[3].cte - 3.0 * ALPHA).abs() < 1e-9);
    assert!((nacl.fits[3].r_squared - 1.0).abs() < 1e-6);
}

#[test]
fn test_process_with_corrected_pressure() {
    let config = PipelineConfig {
        pressure_fill: PressureFill::RoomPressure,
        min_entries: 1,
        ..PipelineConfig::default()
    };
    let output = Pipeline::new(config).process(&raw_table()).unwrap();

    assert_eq!(output.clean.len(), 4);
    assert_eq!(output.clean.cell(0, PRESSURE), Some(&Cell::Number(101.325)));
    assert_eq!(output.cte.len(), 2);
}

#[test]
fn test_process_with_looped_pressure() {
    let records = (1..=3)
        .map(|i| {
            let mut record = raw_record(&format!("PCD_{i}"), "Na Cl", 100.0 * i as f64);
            record.insert("_diffrn_ambient_pressure", Cell::List(vec!["101.3".to_string()]));
            record
        })
        .collect();
    let table = Table::from_records(records).unwrap();

    let output = Pipeline::new(PipelineConfig::default()).process(&table).unwrap();

    assert_eq!(output.clean.len(), 3);
    for row in 0..3 {
        assert_eq!(output.clean.cell(row, PRESSURE), Some(&Cell::Number(101.3)));
    }
    assert_eq!(output.cte.len(), 1);
}

#[test]
fn test_small_groups_leave_nothing_to_bin() {
    let config = PipelineConfig {
        min_entries: 10,
        ..PipelineConfig::default()
    };
    assert!(matches!(
        Pipeline::new(config).process(&raw_table()),
        Err(PipelineError::Binning(BinningError::EmptyTable))
    ));
}

#[test]
fn test_run_requires_sources() {
    assert!(matches!(
        Pipeline::default().run(&[]),
        Err(PipelineError::NoSources)
    ));
}

#[test]
fn test_config_from_toml() {
    let config: PipelineConfig = toml::from_str(
        r#"
            min_entries = 4
            bin_spacing = 5.0
            pressure_fill = "room-pressure"
            show_progress = false

            [renames]
            _cell_measurement_temperature = "TEMPERATURE"

            [geometry]
            volume = "CELL_VOLUME"
        "#,
    )
    .unwrap();

    assert_eq!(config.min_entries, 4);
    assert_eq!(config.bin_spacing, 5.0);
    assert_eq!(config.pressure_fill, PressureFill::RoomPressure);
    assert!(!config.show_progress);
    assert_eq!(config.room_temperature, 293.15);
    assert_eq!(config.geometry.volume, "CELL_VOLUME");
    assert_eq!(config.geometry.a, "CELL_LENGTH_A");
    assert_eq!(
        config.normalize_options().renames,
        Some(vec![(
            "_cell_measurement_temperature".to_string(),
            "TEMPERATURE".to_string()
        )])
    );
    assert!(config.normalize_options().columns.is_none());
}

#[test]
fn test_empty_config_is_default() {
    let config: PipelineConfig = toml::from_str("").unwrap();
    assert_eq!(config, PipelineConfig::default());
}

#[test]
fn test_summary_counts() {
    let config = PipelineConfig {
        bin_spacing: 1000.0,
        ..PipelineConfig::default()
    };
    let summary = Pipeline::new(config).process(&raw_table()).unwrap().summary();

    assert_eq!(summary.input_rows, 4);
    assert_eq!(summary.sparse_rows, 0);
    assert_eq!(summary.small_crystals, 1);
    assert_eq!(summary.small_crystal_rows, 1);
    assert_eq!(summary.clean_rows, 3);
    assert_eq!(summary.crystals, 1);
    assert_eq!(summary.undefined_fits, 0);

    let text = summary.to_string();
    assert!(text.contains("Small crystals removed: 1 (1 rows)"));
    assert!(text.contains("Crystals fitted: 1 (0 undefined)"));
}
