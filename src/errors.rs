use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DwarfGenError {
    // Output errors
    OutputError(io::Error),

    // Rendering errors
    FormatError(fmt::Error),
}

impl fmt::Display for DwarfGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DwarfGenError::OutputError(err) => write!(f, "Output error: {}", err),
            DwarfGenError::FormatError(err) => write!(f, "Format error: {}", err),
        }
    }
}

impl std::error::Error for DwarfGenError {}

// Conversion implementations for common error types
impl From<io::Error> for DwarfGenError {
    fn from(err: io::Error) -> Self {
        DwarfGenError::OutputError(err)
    }
}

impl From<fmt::Error> for DwarfGenError {
    fn from(err: fmt::Error) -> Self {
        DwarfGenError::FormatError(err)
    }
}

// Type alias for Result with DwarfGenError
pub type DwarfGenResult<T> = Result<T, DwarfGenError>;
