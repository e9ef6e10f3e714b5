//! # Error reporting for reading of payoff matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::data::linear_algebra::error::MatrixError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into numbers.
    Parse(ParseError),
    /// The rows that were read don't form a matrix, because they differ in length.
    Matrix(MatrixError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Matrix(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Matrix(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<MatrixError> for ImportError {
    fn from(error: MatrixError) -> Self {
        ImportError::Matrix(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// There may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    file_location: Option<(u64, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), file_location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            file_location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong, without the location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number, counting from 1, at which the error was caused.
    pub fn line_number(&self) -> Option<u64> {
        self.file_location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.file_location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }
        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(super) type FileLocation<'a> = (u64, &'a str);
