use super::*;

const ROCKSALT: &str = r#"
data_NaCl
_cell_length_a 5.64
_cell_length_b 5.64
_cell_length_c 5.64
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
_atom_site_occupancy
Na1 Na1+ 0 0 0 1
Cl1 Cl1- 0.5 0.5 0.5 1
"#;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_cubic_lattice() {
    let lattice = Lattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0).unwrap();
    assert!(approx(lattice.volume, 5.64f64.powi(3)));
    assert!(approx(lattice.matrix[0][0], 5.64));
    assert!(approx(lattice.matrix[1][1], 5.64));
    assert!(approx(lattice.matrix[2][2], 5.64));
    assert!(lattice.matrix[0][2].abs() < 1e-9);
}

#[test]
fn test_hexagonal_lattice_volume() {
    let lattice = Lattice::from_parameters(5.0356, 5.0356, 13.7489, 90.0, 90.0, 120.0).unwrap();
    let expected = 5.0356 * 5.0356 * 13.7489 * (3.0f64).sqrt() / 2.0;
    assert!((lattice.volume - expected).abs() < 1e-6);

    // Matrix determinant must agree with the parameter formula
    let m = lattice.matrix;
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    assert!((det.abs() - expected).abs() < 1e-6);
}

#[test]
fn test_invalid_lattice() {
    assert!(Lattice::from_parameters(0.0, 1.0, 1.0, 90.0, 90.0, 90.0).is_err());
    assert!(Lattice::from_parameters(1.0, 1.0, 1.0, 180.0, 90.0, 90.0).is_err());
    // alpha + beta < gamma cannot close a cell
    assert!(Lattice::from_parameters(1.0, 1.0, 1.0, 30.0, 30.0, 120.0).is_err());
}

#[test]
fn test_structure_from_cif() {
    let doc = CifDocument::parse(ROCKSALT).unwrap();
    let structure = Structure::from_cif(&doc).unwrap();

    assert_eq!(structure.sites.len(), 2);
    assert_eq!(structure.sites[0].species[0].element, "Na");
    assert_eq!(structure.sites[1].species[0].oxidation_state, Some(-1.0));
    assert_eq!(structure.sites[1].abc, [0.5, 0.5, 0.5]);
    assert!(approx(structure.sites[1].xyz[0], 2.82));
    assert!(approx(structure.charge, 0.0));
    assert_eq!(structure.site_formula(), "Na1Cl1");
}

#[test]
fn test_structure_dict_fields() {
    let doc = CifDocument::parse(ROCKSALT).unwrap();
    let dict = Structure::from_cif(&doc).unwrap().to_dict();

    assert_eq!(dict["@module"], STRUCTURE_MODULE);
    assert_eq!(dict["@class"], STRUCTURE_CLASS);
    assert_eq!(dict["sites"].as_array().unwrap().len(), 2);
    assert_eq!(dict["lattice"]["a"], 5.64);
    assert!(dict.contains_key("charge"));
    assert!(dict.contains_key("properties"));
}

#[test]
fn test_missing_cell_parameter() {
    let doc = CifDocument::parse("data_x\n_cell_length_a 1\n").unwrap();
    let err = Structure::from_cif(&doc).unwrap_err();
    assert!(matches!(err, StructureError::MissingCellParameter(tag) if tag == "_cell_length_b"));
}

#[test]
fn test_no_sites() {
    let cif = ROCKSALT.split("loop_").next().unwrap();
    let doc = CifDocument::parse(cif).unwrap();
    assert!(matches!(
        Structure::from_cif(&doc).unwrap_err(),
        StructureError::NoSites
    ));
}

#[test]
fn test_unknown_element() {
    let cif = ROCKSALT.replace("Cl1 Cl1-", "Xx1 Xx1-");
    let doc = CifDocument::parse(&cif).unwrap();
    assert!(matches!(
        Structure::from_cif(&doc).unwrap_err(),
        StructureError::UnknownElement(symbol) if symbol == "Xx1-"
    ));
}

#[test]
fn test_parse_species() {
    let fe = parse_species("Fe3+").unwrap();
    assert_eq!(fe.element, "Fe");
    assert_eq!(fe.oxidation_state, Some(3.0));

    let o = parse_species("O2-").unwrap();
    assert_eq!(o.element, "O");
    assert_eq!(o.oxidation_state, Some(-2.0));

    assert_eq!(parse_species("Os1").unwrap().element, "Os");
    assert_eq!(parse_species("Oa").unwrap().element, "O");
    assert_eq!(parse_species("Ca1").unwrap().oxidation_state, None);
    assert_eq!(parse_species("Mn+2").unwrap().oxidation_state, Some(2.0));
    assert!(parse_species("fe").is_none());
    assert!(parse_species("Q1").is_none());
}

#[test]
fn test_element_table_and_deuterium() {
    assert_eq!(ELEMENT_SYMBOLS.len(), 118);
    assert_eq!(ELEMENT_SYMBOLS[0], "H");
    assert_eq!(ELEMENT_SYMBOLS[117], "Og");
    assert!(!ELEMENT_SYMBOLS.contains(&"D"));

    assert!(is_element("D"));
    assert!(is_element("Og"));
    assert!(!is_element("Dx"));

    let d = parse_species("D1").unwrap();
    assert_eq!(d.element, "D");
    assert_eq!(d.oxidation_state, None);
    assert_eq!(parse_species("Dy3+").unwrap().element, "Dy");
}
