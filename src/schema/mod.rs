//! # Canonical Schema
//!
//! Column names, the default projection and rename tables, and the declared
//! value kind of each canonical column.
//!
//! ## Canonical Columns
//!
//! | Column | Kind | Unit | Source tag |
//! |--------|------|------|------------|
//! | ID (index) | text | | `data_` |
//! | FORMULA | categorical | | `_chemical_formula_sum` |
//! | SPACEGROUP_SYM | categorical | | `_space_group_name_H-M_alt` |
//! | SPCAEGROUP_NO | numeric | | `_space_group_IT_number` |
//! | TEMPERATURE | numeric | K | `_diffrn_ambient_temperature` |
//! | CELL_LENGTH_A/B/C | numeric | Å | `_cell_length_a/b/c` |
//! | ALPHA/BETA/GAMMA | numeric | ° | `_cell_angle_alpha/beta/gamma` |
//! | VOLUME | numeric | Å³ | `_cell_volume` |
//! | PRESSURE | numeric | MPa | `_diffrn_ambient_pressure` |
//! | DENSITY | numeric | g/cm³ | `_exptl_crystal_density_diffrn` |
//! | ELEMENT_COUNT | numeric | | `_atom_type_symbol` |
//! | DATABASE | categorical | | ingestion tag |
//! | REFERENCE | text | | `_journal_*` |
//! | @module, @class, charge, lattice, sites | structural | | structure model |
//!
//! Tables are checked against these kinds with [`validate_table`] when they
//! leave normalization and cleaning.

mod builders;
/// Canonical column name constants.
pub mod columns;
mod defaults;
mod geometry;
mod validation;

#[cfg(test)]
mod tests;

pub use builders::{create_binned_schema, create_binned_schema_arc};
pub use columns::*;
pub use defaults::{DEFAULT_COLUMNS, DEFAULT_RENAMES, UNJOINED_COLUMNS};
pub use geometry::GeometryColumns;
pub use validation::{
    column_kind, validate_table, ColumnKind, SchemaValidationError, Stage, CANONICAL_KINDS,
};

/// Version tag written into exported Parquet metadata
pub const CIFCTE_FORMAT_VERSION: &str = "1.0";
