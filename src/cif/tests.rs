use super::*;

const HEMATITE: &str = r#"
# Hematite at elevated temperature
data_1-ICSD
_chemical_formula_sum 'Fe2 O3'
_space_group_name_H-M_alt 'R -3 c H'
_space_group_IT_number 167
_diffrn_ambient_temperature 300(5)
_cell_length_a 5.0356(1)
_cell_length_b 5.0356(1)
_cell_length_c 13.7489(7)
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 120
_cell_volume 301.93
_journal_year 1966
_journal_volume 45
_journal_page_first 123
_journal_page_last 130
_publ_section_title
;
Thermal expansion of
hematite
;
loop_
_atom_type_symbol
Fe3+
O2-
loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
_atom_site_occupancy
Fe1 Fe3+ 0 0 0.35530(2) 1
O1 O2- 0.3059(2) 0 0.25 1
"#;

#[test]
fn test_parse_block_name_and_scalars() {
    let doc = CifDocument::parse(HEMATITE).unwrap();
    assert_eq!(doc.block_name(), "1-ICSD");
    assert_eq!(doc.text("_chemical_formula_sum"), Some("Fe2 O3"));
    assert_eq!(doc.text("_space_group_name_H-M_alt"), Some("R -3 c H"));
    assert_eq!(doc.text("_diffrn_ambient_temperature"), Some("300(5)"));
    assert_eq!(doc.number("_cell_length_a"), Some(5.0356));
    assert_eq!(doc.number("_cell_angle_gamma"), Some(120.0));
}

#[test]
fn test_parse_text_field() {
    let doc = CifDocument::parse(HEMATITE).unwrap();
    assert_eq!(
        doc.text("_publ_section_title"),
        Some("Thermal expansion of\nhematite")
    );
}

#[test]
fn test_parse_loops_as_lists() {
    let doc = CifDocument::parse(HEMATITE).unwrap();

    let symbols = doc.get("_atom_type_symbol").unwrap();
    assert_eq!(
        symbols,
        &CifValue::List(vec!["Fe3+".to_string(), "O2-".to_string()])
    );

    let x = doc.get("_atom_site_fract_x").unwrap().values();
    assert_eq!(x, &["0".to_string(), "0.3059(2)".to_string()]);
    let labels = doc.get("_atom_site_label").unwrap().values();
    assert_eq!(labels, &["Fe1".to_string(), "O1".to_string()]);
}

#[test]
fn test_tags_keep_file_order() {
    let doc = CifDocument::parse(HEMATITE).unwrap();
    let tags: Vec<&str> = doc.iter().map(|(tag, _)| tag).take(3).collect();
    assert_eq!(
        tags,
        vec![
            "_chemical_formula_sum",
            "_space_group_name_H-M_alt",
            "_space_group_IT_number"
        ]
    );
}

#[test]
fn test_quote_inside_value() {
    let doc = CifDocument::parse("data_x\n_title 'it's fine'\n").unwrap();
    assert_eq!(doc.text("_title"), Some("it's fine"));
}

#[test]
fn test_only_first_block_is_read() {
    let doc = CifDocument::parse("data_a\n_cell_length_a 1\ndata_b\n_cell_length_a 2\n").unwrap();
    assert_eq!(doc.block_name(), "a");
    assert_eq!(doc.number("_cell_length_a"), Some(1.0));
}

#[test]
fn test_missing_data_block() {
    let err = CifDocument::parse("_cell_length_a 1\n").unwrap_err();
    assert!(matches!(err, CifError::MissingDataBlock));
}

#[test]
fn test_ragged_loop() {
    let err = CifDocument::parse("data_x\nloop_\n_a\n_b\n1 2 3\n").unwrap_err();
    assert!(matches!(err, CifError::RaggedLoop { tags: 2, values: 3 }));
}

#[test]
fn test_tag_without_value() {
    let err = CifDocument::parse("data_x\n_cell_length_a\n_cell_length_b 2\n").unwrap_err();
    assert!(matches!(err, CifError::MissingValue(tag) if tag == "_cell_length_a"));
}

#[test]
fn test_unterminated_text_field() {
    let err = CifDocument::parse("data_x\n_title\n;\nnever closed\n").unwrap_err();
    assert!(matches!(err, CifError::UnterminatedTextField { line: 3 }));
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("5.431(2)"), Some(5.431));
    assert_eq!(parse_number(" 300 "), Some(300.0));
    assert_eq!(parse_number("1.2e-3"), Some(0.0012));
    assert_eq!(parse_number("?"), None);
    assert_eq!(parse_number("."), None);
    assert_eq!(parse_number("abc"), None);
}

#[test]
fn test_strip_annotations() {
    assert_eq!(strip_annotations("300(5)"), "300");
    assert_eq!(strip_annotations("293(2) K(approx)"), "293 K");
    assert_eq!(strip_annotations("12(3"), "12(3");
}
