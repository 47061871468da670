/// Canonical column names as constants for type safety
/// Row identifier (`PCD_<id>` / `ICSD_<id>`), used as the table index
pub const ID: &str = "ID";
/// Chemical formula, rendered as element-count pairs (e.g. `Fe2O3`)
pub const FORMULA: &str = "FORMULA";
/// Hermann–Mauguin space-group symbol, whitespace and parentheses stripped
pub const SPACEGROUP_SYM: &str = "SPACEGROUP_SYM";
/// International Tables space-group number.
///
/// The spelling is the established column name in downstream notebooks.
pub const SPACEGROUP_NO: &str = "SPCAEGROUP_NO";
/// Measurement temperature (K)
pub const TEMPERATURE: &str = "TEMPERATURE";
/// Cell length a (Å)
pub const CELL_LENGTH_A: &str = "CELL_LENGTH_A";
/// Cell length b (Å)
pub const CELL_LENGTH_B: &str = "CELL_LENGTH_B";
/// Cell length c (Å)
pub const CELL_LENGTH_C: &str = "CELL_LENGTH_C";
/// Cell angle alpha (°)
pub const ALPHA: &str = "ALPHA";
/// Cell angle beta (°)
pub const BETA: &str = "BETA";
/// Cell angle gamma (°)
pub const GAMMA: &str = "GAMMA";
/// Cell volume (Å³)
pub const VOLUME: &str = "VOLUME";
/// Measurement pressure (MPa)
pub const PRESSURE: &str = "PRESSURE";
/// Calculated density (g/cm³)
pub const DENSITY: &str = "DENSITY";
/// Number of distinct atom types
pub const ELEMENT_COUNT: &str = "ELEMENT_COUNT";
/// Source database (`PCD` or `ICSD`)
pub const DATABASE: &str = "DATABASE";
/// Bibliographic reference, `(<year>) <volume>, <first>-<last>`
pub const REFERENCE: &str = "REFERENCE";

/// Structure dictionary: producing module
pub const MODULE: &str = "@module";
/// Structure dictionary: class name
pub const CLASS: &str = "@class";
/// Structure dictionary: formal charge
pub const CHARGE: &str = "charge";
/// Structure dictionary: lattice
pub const LATTICE: &str = "lattice";
/// Structure dictionary: atom sites
pub const SITES: &str = "sites";

// Raw tags that are consumed rather than renamed

/// Raw identifier column produced by ingestion
pub const RAW_ID: &str = "data_";
/// Raw database tag column produced by ingestion
pub const RAW_DATABASE: &str = "database";
/// Journal volume, folded into REFERENCE
pub const JOURNAL_VOLUME: &str = "_journal_volume";
/// First page, folded into REFERENCE
pub const JOURNAL_PAGE_FIRST: &str = "_journal_page_first";
/// Last page, folded into REFERENCE
pub const JOURNAL_PAGE_LAST: &str = "_journal_page_last";
