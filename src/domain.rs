//! Domain models for rescue animal records.
//!
//! This module contains the animal record types, the in-memory repository
//! that owns them, and configuration.

/// Animal records and input validation.
pub mod animal;
pub use animal::{Animal, DogData, InvalidInputError, Kind, MonkeyData, Name, Profile};

mod config;
pub use config::Config;

/// In-memory storage of animals.
pub mod repository;
pub use repository::{DuplicateError, Repository, SearchField};

mod seed;

mod species;
pub use species::{Category, Species};
