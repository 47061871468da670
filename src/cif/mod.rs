//! # CIF Reader
//!
//! Reads a Crystallographic Information File into a flat tag dictionary, the
//! same shape the PCD and ICSD exports are consumed in downstream:
//!
//! - `data_<name>` gives the block identifier
//! - `_tag value` pairs become scalar text values
//! - every tag declared in a `loop_` becomes an ordered list of values
//!
//! Only the first data block is read. Quoted values, `;` text fields and `#`
//! comments follow CIF 1.1. Values are kept as written; numeric coercion is
//! left to the stage that needs it (see [`parse_number`]).

mod error;
mod number;
mod reader;

#[cfg(test)]
mod tests;

pub use error::CifError;
pub use number::{is_placeholder, parse_number, strip_annotations};
pub use reader::{CifDocument, CifValue};
