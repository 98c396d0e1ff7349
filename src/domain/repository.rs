//! The in-memory store of animals.
//!
//! The [`Repository`] knows nothing about the filesystem. It keeps one ordered
//! list per [`Category`] and enforces name uniqueness within each list.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Animal, Category, InvalidInputError, animal::eq_ignore_case, seed};

/// An animal with the same name (ignoring case) already exists in the list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("This {category} is already in our system.")]
pub struct DuplicateError {
    /// The list the animal was added to.
    pub category: Category,
    /// The rejected name.
    pub name: String,
}

/// The fields animals can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// The animal's name.
    Name,
    /// The animal's category. Matches every animal in that category.
    Type,
    /// The animal's acquisition country.
    Country,
}

impl SearchField {
    /// Whether `animal` matches `value` on this field, ignoring case.
    #[must_use]
    pub fn matches(self, animal: &Animal, value: &str) -> bool {
        match self {
            Self::Name => animal.name().matches(value),
            Self::Type => eq_ignore_case(animal.category().as_str(), value),
            Self::Country => animal.acquired_from(value),
        }
    }
}

impl FromStr for SearchField {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "country" => Ok(Self::Country),
            _ => Err(InvalidInputError::SearchField(s.to_string())),
        }
    }
}

/// Two ordered lists of animals, one per category.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Repository {
    dogs: Vec<Animal>,
    monkeys: Vec<Animal>,
}

impl Repository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dogs: Vec::new(),
            monkeys: Vec::new(),
        }
    }

    /// Creates a repository holding the sample dogs and monkeys.
    #[must_use]
    pub fn with_samples() -> Self {
        let mut repository = Self::new();
        for animal in seed::dogs().into_iter().chain(seed::monkeys()) {
            repository.push(animal);
        }
        repository
    }

    /// Adds an animal to the end of its category's list.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateError`] if an animal of the same category already
    /// has the same name (ignoring case). The repository is left unchanged.
    #[instrument(
        level = "debug",
        skip(self, animal),
        fields(name = %animal.name(), category = %animal.category())
    )]
    pub fn add(&mut self, animal: Animal) -> Result<(), DuplicateError> {
        let category = animal.category();
        if self.contains(category, animal.name()) {
            debug!("rejected duplicate");
            return Err(DuplicateError {
                category,
                name: animal.name().to_string(),
            });
        }
        self.push(animal);
        Ok(())
    }

    /// Appends without checking for duplicates.
    ///
    /// Used when loading from storage, where file contents are trusted.
    pub(crate) fn push(&mut self, animal: Animal) {
        self.list_mut(animal.category()).push(animal);
    }

    /// Whether an animal with this name exists in the category.
    #[must_use]
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.find_by_name(category, name).is_some()
    }

    /// Finds an animal by name, ignoring case.
    ///
    /// If the list somehow holds duplicates, the first wins.
    #[must_use]
    pub fn find_by_name(&self, category: Category, name: &str) -> Option<&Animal> {
        self.list(category)
            .iter()
            .find(|animal| animal.name().matches(name))
    }

    /// The animals of a category, in insertion order.
    #[must_use]
    pub fn list(&self, category: Category) -> &[Animal] {
        match category {
            Category::Dog => &self.dogs,
            Category::Monkey => &self.monkeys,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<Animal> {
        match category {
            Category::Dog => &mut self.dogs,
            Category::Monkey => &mut self.monkeys,
        }
    }

    /// Every animal: dogs first, then monkeys, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.dogs.iter().chain(&self.monkeys)
    }

    /// Lazily yields the animals matching `predicate`, preserving order.
    ///
    /// With a category, only that list is scanned; with `None`, dogs are
    /// scanned before monkeys.
    pub fn filter<'a, P>(
        &'a self,
        category: Option<Category>,
        predicate: P,
    ) -> impl Iterator<Item = &'a Animal> + 'a
    where
        P: Fn(&Animal) -> bool + 'a,
    {
        let none: &[Animal] = &[];
        let (dogs, monkeys) = match category {
            Some(Category::Dog) => (self.dogs.as_slice(), none),
            Some(Category::Monkey) => (none, self.monkeys.as_slice()),
            None => (self.dogs.as_slice(), self.monkeys.as_slice()),
        };
        dogs.iter()
            .chain(monkeys)
            .filter(move |&animal| predicate(animal))
    }

    /// Animals that are unreserved and in service, dogs first.
    pub fn available(&self) -> impl Iterator<Item = &Animal> {
        self.filter(None, Animal::is_available)
    }

    /// Animals matching `value` on `field`, dogs first.
    pub fn search<'a>(
        &'a self,
        field: SearchField,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Animal> + 'a {
        self.filter(None, move |animal| field.matches(animal, value))
    }

    /// Reserves the first unreserved animal of the category that serves in
    /// `country` (ignoring case).
    ///
    /// At most one animal is reserved. Returns the reserved animal, or `None`
    /// if nothing matched.
    #[instrument(level = "debug", skip(self))]
    pub fn reserve(&mut self, category: Category, country: &str) -> Option<&Animal> {
        let animal = self
            .list_mut(category)
            .iter_mut()
            .find(|animal| !animal.is_reserved() && animal.serves_in(country))?;
        animal.reserve();
        debug!(name = %animal.name(), "reserved");
        Some(&*animal)
    }

    /// Empties both lists.
    pub fn clear(&mut self) {
        self.dogs.clear();
        self.monkeys.clear();
    }

    /// Replaces the contents with a fully loaded repository.
    ///
    /// Loading builds `staged` separately, so a failed load never reaches
    /// this point and the current contents survive.
    pub fn reload(&mut self, staged: Self) {
        self.clear();
        self.dogs.extend(staged.dogs);
        self.monkeys.extend(staged.monkeys);
    }

    /// The total number of animals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dogs.len() + self.monkeys.len()
    }

    /// Whether both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty() && self.monkeys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::{MonkeyData, Name, Profile, Species};

    fn profile(name: &str, status: &str, reserved: bool, country: &str) -> Profile {
        Profile {
            name: Name::new(name).unwrap(),
            gender: "female".to_string(),
            age: 2,
            weight: 20.0,
            acquisition_date: "01-01-2020".to_string(),
            acquisition_country: country.to_string(),
            training_status: status.to_string(),
            reserved,
            in_service_country: country.to_string(),
        }
    }

    fn dog(name: &str) -> Animal {
        Animal::dog(profile(name, "intake", false, "Canada"), "Beagle")
    }

    fn monkey(name: &str) -> Animal {
        Animal::monkey(
            profile(name, "intake", false, "Canada"),
            MonkeyData {
                species: Species::Guenon,
                tail_length: 1.0,
                height: 2.0,
                body_length: 3.0,
            },
        )
    }

    fn names<'a>(animals: impl Iterator<Item = &'a Animal>) -> Vec<String> {
        animals.map(|animal| animal.name().to_string()).collect()
    }

    #[test]
    fn add_appends_to_matching_list() {
        let mut repository = Repository::new();
        repository.add(dog("Max")).unwrap();
        repository.add(monkey("George")).unwrap();

        assert_eq!(names(repository.list(Category::Dog).iter()), ["Max"]);
        assert_eq!(names(repository.list(Category::Monkey).iter()), ["George"]);
        assert_eq!(repository.len(), 2);
    }

    #[test_case("Spot"; "same case")]
    #[test_case("spot"; "lowercase")]
    #[test_case("SPOT"; "uppercase")]
    fn duplicate_dog_names_are_rejected(name: &str) {
        let mut repository = Repository::with_samples();
        let before = repository.list(Category::Dog).len();

        let error = repository.add(dog(name)).unwrap_err();

        assert_eq!(error.category, Category::Dog);
        assert_eq!(repository.list(Category::Dog).len(), before);
        assert_eq!(error.to_string(), "This dog is already in our system.");
    }

    #[test]
    fn names_are_unique_per_category_only() {
        let mut repository = Repository::with_samples();
        // "Spot" is a sample dog, not a monkey.
        repository.add(monkey("Spot")).unwrap();
        assert!(repository.contains(Category::Monkey, "spot"));
    }

    #[test]
    fn find_by_name_ignores_case() {
        let repository = Repository::with_samples();
        let found = repository.find_by_name(Category::Monkey, "kong").unwrap();
        assert_eq!(found.name().as_str(), "Kong");
        assert!(repository.find_by_name(Category::Dog, "kong").is_none());
    }

    #[test]
    fn find_by_name_prefers_first_duplicate() {
        let mut repository = Repository::new();
        repository.push(Animal::dog(profile("Ace", "intake", false, "Peru"), "Pug"));
        repository.push(Animal::dog(profile("ace", "intake", false, "Chile"), "Pug"));

        let found = repository.find_by_name(Category::Dog, "ACE").unwrap();
        assert_eq!(found.profile.in_service_country, "Peru");
    }

    #[test]
    fn reserve_takes_first_unreserved_match() {
        let mut repository = Repository::with_samples();

        let reserved = repository
            .reserve(Category::Dog, "united states")
            .unwrap()
            .name()
            .to_string();
        assert_eq!(reserved, "Spot");

        let reserved_count = repository
            .list(Category::Dog)
            .iter()
            .filter(|animal| animal.is_reserved())
            .count();
        // Bella was reserved in the samples already.
        assert_eq!(reserved_count, 2);

        let next = repository
            .reserve(Category::Dog, "United States")
            .unwrap()
            .name()
            .to_string();
        assert_eq!(next, "Rex");
        assert!(repository.reserve(Category::Dog, "United States").is_none());
    }

    #[test]
    fn reserve_without_match_changes_nothing() {
        let mut repository = Repository::with_samples();
        let before = repository.clone();

        assert!(repository.reserve(Category::Monkey, "France").is_none());
        // Marcel serves in Canada but is already reserved.
        assert!(repository.reserve(Category::Monkey, "Canada").is_none());
        assert_eq!(repository, before);
    }

    #[test]
    fn available_excludes_reserved_and_untrained() {
        let repository = Repository::with_samples();
        let available: Vec<_> = repository.available().collect();

        assert!(
            available
                .iter()
                .all(|animal| !animal.is_reserved() && animal.is_in_service())
        );
        assert_eq!(names(available.into_iter()), ["Kong"]);
    }

    #[test]
    fn search_by_type_returns_whole_list_in_order() {
        let repository = Repository::with_samples();
        assert_eq!(
            names(repository.search(SearchField::Type, "DOG")),
            ["Spot", "Rex", "Bella"]
        );
        assert_eq!(
            names(repository.search(SearchField::Type, "monkey")),
            ["Marcel", "Kong", "Pat"]
        );
        assert_eq!(repository.search(SearchField::Type, "cat").count(), 0);
    }

    #[test]
    fn search_by_name_finds_exactly_one_sample() {
        let repository = Repository::with_samples();
        assert_eq!(names(repository.search(SearchField::Name, "spot")), ["Spot"]);
    }

    #[test]
    fn search_by_country_scans_dogs_then_monkeys() {
        let repository = Repository::with_samples();
        assert_eq!(
            names(repository.search(SearchField::Country, "canada")),
            ["Bella", "Marcel"]
        );
    }

    #[test_case("name", SearchField::Name; "name")]
    #[test_case("TYPE", SearchField::Type; "type")]
    #[test_case("Country", SearchField::Country; "country")]
    fn search_fields_parse(input: &str, expected: SearchField) {
        assert_eq!(input.parse::<SearchField>().unwrap(), expected);
    }

    #[test]
    fn unknown_search_field_is_rejected() {
        assert!(matches!(
            "breed".parse::<SearchField>(),
            Err(InvalidInputError::SearchField(_))
        ));
    }

    #[test]
    fn filter_limited_to_category() {
        let repository = Repository::with_samples();
        let unreserved = repository.filter(Some(Category::Monkey), |animal| !animal.is_reserved());
        assert_eq!(names(unreserved), ["Kong", "Pat"]);
    }

    #[test]
    fn reload_replaces_contents() {
        let mut repository = Repository::with_samples();
        let mut staged = Repository::new();
        staged.push(dog("Fido"));

        repository.reload(staged);

        assert_eq!(names(repository.iter()), ["Fido"]);
        assert!(repository.list(Category::Monkey).is_empty());
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut repository = Repository::with_samples();
        repository.clear();
        assert!(repository.is_empty());
    }
}
