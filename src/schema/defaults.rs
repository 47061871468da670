use super::columns::*;

/// Raw columns kept by default when projecting the ingested table.
pub const DEFAULT_COLUMNS: &[&str] = &[
    RAW_ID,
    "_chemical_formula_sum",
    "_space_group_name_H-M_alt",
    "_space_group_IT_number",
    "_diffrn_ambient_temperature",
    "_cell_length_a",
    "_cell_length_b",
    "_cell_length_c",
    "_cell_angle_alpha",
    "_cell_angle_beta",
    "_cell_angle_gamma",
    "_cell_volume",
    "_diffrn_ambient_pressure",
    "_exptl_crystal_density_diffrn",
    "_atom_type_symbol",
    RAW_DATABASE,
    "_journal_year",
    JOURNAL_VOLUME,
    JOURNAL_PAGE_FIRST,
    JOURNAL_PAGE_LAST,
    MODULE,
    CLASS,
    CHARGE,
    LATTICE,
    SITES,
];

/// Default raw tag → canonical name mapping.
///
/// `_journal_year` becomes REFERENCE and is later expanded into the full
/// citation string.
pub const DEFAULT_RENAMES: &[(&str, &str)] = &[
    ("_chemical_formula_sum", FORMULA),
    ("_space_group_name_H-M_alt", SPACEGROUP_SYM),
    ("_space_group_IT_number", SPACEGROUP_NO),
    ("_diffrn_ambient_temperature", TEMPERATURE),
    ("_cell_length_a", CELL_LENGTH_A),
    ("_cell_length_b", CELL_LENGTH_B),
    ("_cell_length_c", CELL_LENGTH_C),
    ("_cell_angle_alpha", ALPHA),
    ("_cell_angle_beta", BETA),
    ("_cell_angle_gamma", GAMMA),
    ("_cell_volume", VOLUME),
    ("_diffrn_ambient_pressure", PRESSURE),
    ("_exptl_crystal_density_diffrn", DENSITY),
    ("_atom_type_symbol", ELEMENT_COUNT),
    (RAW_DATABASE, DATABASE),
    (RAW_ID, ID),
    ("_journal_year", REFERENCE),
];

/// Columns whose list values are left as lists during field coercion.
pub const UNJOINED_COLUMNS: &[&str] = &[DATABASE, PRESSURE, MODULE, CLASS, CHARGE, LATTICE, SITES];
