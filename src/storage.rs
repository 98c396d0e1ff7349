//! Line-oriented persistence of animals.
//!
//! A [`Codec`] turns one [`Animal`] into one line of text and back. The
//! [`AnimalFile`] writes a whole [`crate::Repository`] through a codec.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Animal;

mod delimited;
pub mod file;
mod json_lines;

pub use delimited::Delimited;
pub use file::{AnimalFile, PersistenceError};
pub use json_lines::JsonLines;

/// Converts animals to and from single lines of text.
///
/// Implementations must never produce a line containing a newline.
pub trait Codec {
    /// Encodes an animal as one line, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the animal cannot be represented in this format.
    fn encode(&self, animal: &Animal) -> Result<String, EncodeError>;

    /// Decodes one line into an animal.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed.
    fn decode(&self, line: &str) -> Result<Animal, ParseLineError>;
}

/// The on-disk format of the data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Comma-delimited fields, no quoting. Compatible with existing files.
    #[default]
    Delimited,
    /// One JSON object per line.
    JsonLines,
}

impl Format {
    /// The codec implementing this format.
    #[must_use]
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Delimited => &Delimited,
            Self::JsonLines => &JsonLines,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Delimited => "delimited",
            Self::JsonLines => "json_lines",
        })
    }
}

/// An animal that cannot be written in the chosen format.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A text field contains the field or record separator.
    #[error("{field} '{value}' contains a comma or line break")]
    Separator {
        /// The offending field.
        field: &'static str,
        /// Its value.
        value: String,
    },
    /// A number has no JSON representation.
    #[error("{field} {value} is not a finite number")]
    NotFinite {
        /// The offending field.
        field: &'static str,
        /// Its value.
        value: f32,
    },
    /// JSON serialisation failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A line that does not describe a valid animal.
#[derive(Debug, thiserror::Error)]
pub enum ParseLineError {
    /// The record tag is neither "Dog" nor "Monkey".
    #[error("unknown record type '{0}'")]
    UnknownTag(String),
    /// The line has the wrong number of fields for its record type.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields required by the record type.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("invalid {field} '{value}'")]
    Number {
        /// The field being parsed.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
    /// The name field is empty.
    #[error("empty name")]
    EmptyName,
    /// The species is not one of the accepted species.
    #[error("unknown species '{0}'")]
    Species(String),
    /// A field required by the record type is absent.
    #[error("missing {0}")]
    MissingField(&'static str),
    /// The line is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
