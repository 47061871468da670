/// Errors building a structure from a CIF dictionary
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    /// A cell parameter is absent or not numeric
    #[error("Missing or non-numeric cell parameter: {0}")]
    MissingCellParameter(String),

    /// Cell parameters do not describe a valid cell
    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    /// No atom sites are listed
    #[error("Structure has no atom sites")]
    NoSites,

    /// Atom site loop columns have different lengths or bad values
    #[error("Invalid atom site: {0}")]
    InvalidSite(String),

    /// A site symbol does not name a known element
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),
}
