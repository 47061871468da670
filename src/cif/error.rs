/// Errors that can occur while reading a CIF file
#[derive(Debug, thiserror::Error)]
pub enum CifError {
    /// I/O error reading the file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file does not contain a `data_` block header
    #[error("No data_ block found")]
    MissingDataBlock,

    /// A `;` text field was opened but never closed
    #[error("Unterminated text field starting at line {line}")]
    UnterminatedTextField {
        /// Line on which the text field starts (1-based)
        line: usize,
    },

    /// A quoted value was opened but never closed on the same line
    #[error("Unterminated quoted value on line {line}")]
    UnterminatedQuote {
        /// Line containing the quote (1-based)
        line: usize,
    },

    /// A tag was not followed by a value
    #[error("Tag {0} has no value")]
    MissingValue(String),

    /// A value appeared without a preceding tag or loop header
    #[error("Value '{0}' is not attached to any tag")]
    UnexpectedValue(String),

    /// A `loop_` header has no tags
    #[error("loop_ without tags")]
    EmptyLoop,

    /// Loop values do not fill complete rows
    #[error("Loop has {values} values which is not a multiple of its {tags} tags")]
    RaggedLoop {
        /// Number of tags in the loop header
        tags: usize,
        /// Number of values in the loop body
        values: usize,
    },
}
