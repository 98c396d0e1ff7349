//! Rescue Animal Records
//!
//! Dogs and monkeys in service training are kept in two in-memory lists and
//! persisted to a plain-text file, one animal per line.

pub mod domain;
pub use domain::{
    Animal, Category, Config, DuplicateError, InvalidInputError, Repository, SearchField, Species,
};

/// Plain-text persistence of animals.
pub mod storage;
pub use storage::{AnimalFile, Format, PersistenceError};
