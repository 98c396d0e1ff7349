use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;

use crate::domain::{Category, Species};

/// Compares two strings for equality, ignoring case.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// The training status an animal must have to be assigned.
pub const IN_SERVICE: &str = "in service";

/// User input that could not be turned into a valid value.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A name was empty.
    #[error("Name must not be empty.")]
    EmptyName,
    /// A numeric field could not be parsed.
    #[error("Invalid number for {field}: '{value}'.")]
    Number {
        /// The field being read.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A monkey species outside the accepted list.
    #[error("Invalid species.")]
    Species(String),
    /// Neither "dog" nor "monkey".
    #[error("Invalid animal type.")]
    Category(String),
    /// A search field other than name, type or country.
    #[error("Invalid field. Please enter 'name', 'type', or 'country'.")]
    SearchField(String),
    /// A report tag other than dog, monkey or available.
    #[error("Invalid list type. Please use 'dog', 'monkey', or 'available'.")]
    ReportTag(String),
}

/// The name of an animal.
///
/// Names are never empty. Two names are considered the same if they match
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(NonEmptyString);

impl Name {
    /// Creates a new name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyName`] if the string is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidInputError> {
        NonEmptyString::new(name.into())
            .map(Self)
            .map_err(|_| InvalidInputError::EmptyName)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether this name matches `other`, ignoring case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(self.as_str(), other)
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonEmptyString> for Name {
    fn from(name: NonEmptyString) -> Self {
        Self(name)
    }
}

/// Fields shared by every animal, regardless of category.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Unique (ignoring case) within the animal's category.
    pub name: Name,
    /// Free text, e.g. "male" or "female".
    pub gender: String,
    /// Age in years.
    pub age: u32,
    /// Weight, in whatever unit intake used.
    pub weight: f32,
    /// Acquisition date, nominally `MM-DD-YYYY`. Not validated.
    pub acquisition_date: String,
    /// Country the animal was acquired from.
    pub acquisition_country: String,
    /// Free-text training status, e.g. "intake", "Phase I", "in service".
    pub training_status: String,
    /// Whether the animal has been allocated.
    pub reserved: bool,
    /// Country the animal serves (or will serve) in.
    pub in_service_country: String,
}

/// Data specific to dogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogData {
    /// Breed, as free text.
    pub breed: String,
}

/// Data specific to monkeys.
#[derive(Debug, Clone, PartialEq)]
pub struct MonkeyData {
    /// The monkey's species.
    pub species: Species,
    /// Tail length.
    pub tail_length: f32,
    /// Height.
    pub height: f32,
    /// Body length.
    pub body_length: f32,
}

/// The category-specific payload of an [`Animal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A dog.
    Dog(DogData),
    /// A monkey.
    Monkey(MonkeyData),
}

impl Kind {
    /// The category this payload belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Dog(_) => Category::Dog,
            Self::Monkey(_) => Category::Monkey,
        }
    }
}

/// A rescue animal: the shared [`Profile`] plus a category-specific [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    /// Fields common to all animals.
    pub profile: Profile,
    /// Category-specific data.
    pub kind: Kind,
}

impl Animal {
    /// Creates a dog.
    #[must_use]
    pub fn dog(profile: Profile, breed: impl Into<String>) -> Self {
        Self {
            profile,
            kind: Kind::Dog(DogData {
                breed: breed.into(),
            }),
        }
    }

    /// Creates a monkey.
    #[must_use]
    pub const fn monkey(profile: Profile, data: MonkeyData) -> Self {
        Self {
            profile,
            kind: Kind::Monkey(data),
        }
    }

    /// The animal's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.profile.name
    }

    /// The animal's category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Whether the animal has been reserved.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.profile.reserved
    }

    /// Marks the animal as reserved.
    pub const fn reserve(&mut self) {
        self.profile.reserved = true;
    }

    /// Whether the animal has completed training ("in service", ignoring
    /// case).
    #[must_use]
    pub fn is_in_service(&self) -> bool {
        eq_ignore_case(&self.profile.training_status, IN_SERVICE)
    }

    /// Unreserved and fully trained.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.is_reserved() && self.is_in_service()
    }

    /// Whether the animal serves in `country`, ignoring case.
    #[must_use]
    pub fn serves_in(&self, country: &str) -> bool {
        eq_ignore_case(&self.profile.in_service_country, country)
    }

    /// Whether the animal was acquired from `country`, ignoring case.
    #[must_use]
    pub fn acquired_from(&self, country: &str) -> bool {
        eq_ignore_case(&self.profile.acquisition_country, country)
    }
}
