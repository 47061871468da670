//! # In-Memory Structure Tables
//!
//! Row-major tables that carry records from ingestion through cleaning.
//! A [`Record`] is one parsed structure file; [`Table::from_records`] merges
//! many of them into a table whose columns are the union of their fields.
//!
//! Stages never mutate a table in place: every operation returns a new
//! [`Table`], so the table a stage was given stays valid for the caller.

mod cell;
mod error;
mod frame;
mod record;


pub use cell::Cell;
pub use error::TableError;
pub use frame::Table;
pub use record::Record;
