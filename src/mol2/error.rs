use thiserror::Error;

/// Errors produced while reading or dissecting DOCK multi-molecule mol2 data.
///
/// Parse-level variants carry a 1-based line number pointing at the offending
/// line of the input stream. Extraction-level variants (`MissingDescriptor`,
/// `MissingName`) identify the molecule by its 0-based ordinal within the
/// file, matching the row it would have occupied in tabular output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A line inside a recognized section could not be interpreted.
    #[error("failed to parse mol2 data: {details} (at line ~{line})")]
    Parse { line: usize, details: String },

    /// A declared descriptor label matched no line of a molecule's segment.
    #[error("descriptor '{label}' not found in molecule {molecule}")]
    MissingDescriptor { label: String, molecule: usize },

    /// A molecule segment carries no name line after its MOLECULE header.
    #[error("molecule {molecule} has no name line")]
    MissingName { molecule: usize },

    /// A fragment record carries no frequency header.
    #[error("fragment starting at line ~{line} has no '{label}' header")]
    MissingFrequency { line: usize, label: &'static str },

    /// A fragment frequency value did not parse as an unsigned integer.
    #[error("invalid fragment frequency '{value}' (at line ~{line})")]
    Frequency { line: usize, value: String },
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}
