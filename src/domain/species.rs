use std::{fmt, str::FromStr};

use crate::domain::animal::InvalidInputError;

/// The category an animal belongs to.
///
/// Each category is kept in its own ordered list, and names are only unique
/// within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A dog. Carries a breed.
    Dog,
    /// A monkey. Carries a species and body measurements.
    Monkey,
}

impl Category {
    /// All categories, in the order their lists are reported and persisted.
    pub const ALL: [Self; 2] = [Self::Dog, Self::Monkey];

    /// Capitalised label, used in reports and as the persisted record tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Monkey => "Monkey",
        }
    }

    /// Lowercase name, as typed by users ("dog", "monkey").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Monkey => "monkey",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidInputError::Category(s.to_string()))
    }
}

/// The monkey species accepted for training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Capuchin
    Capuchin,
    /// Guenon
    Guenon,
    /// Macaque
    Macaque,
    /// Marmoset
    Marmoset,
    /// Squirrel monkey
    SquirrelMonkey,
    /// Tamarin
    Tamarin,
}

impl Species {
    /// Every accepted species.
    pub const ALL: [Self; 6] = [
        Self::Capuchin,
        Self::Guenon,
        Self::Macaque,
        Self::Marmoset,
        Self::SquirrelMonkey,
        Self::Tamarin,
    ];

    /// The canonical display name of the species.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capuchin => "Capuchin",
            Self::Guenon => "Guenon",
            Self::Macaque => "Macaque",
            Self::Marmoset => "Marmoset",
            Self::SquirrelMonkey => "Squirrel Monkey",
            Self::Tamarin => "Tamarin",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = InvalidInputError;

    /// Matches case-insensitively against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidInputError::Species(s.to_string()))
    }
}
