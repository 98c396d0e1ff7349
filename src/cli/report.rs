use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use rescue::{Animal, Category, InvalidInputError, domain::Kind};
use tracing::instrument;

use super::session::{CommandError, Session};

/// What to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    /// Every animal of one category, with all attributes.
    All(Category),
    /// Unreserved, in-service animals: name and in-service country only.
    Available,
}

impl FromStr for Report {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("available") {
            return Ok(Self::Available);
        }
        s.parse()
            .map(Self::All)
            .map_err(|_| InvalidInputError::ReportTag(s.to_string()))
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prints the report named by `tag`: "dog", "monkey" or "available".
    #[instrument(level = "debug", skip(self))]
    pub(super) fn print_animals(&mut self, tag: &str) -> Result<(), CommandError> {
        match tag.parse::<Report>()? {
            Report::All(category) => {
                let heading = match category {
                    Category::Dog => "All Dogs:",
                    Category::Monkey => "All Monkeys:",
                };
                let lines: Vec<String> =
                    self.repository.list(category).iter().map(describe).collect();
                self.print_section(heading, &lines)?;
            }
            Report::Available => {
                for category in Category::ALL {
                    let heading = match category {
                        Category::Dog => "Available Dogs:",
                        Category::Monkey => "Available Monkeys:",
                    };
                    let lines: Vec<String> = self
                        .repository
                        .filter(Some(category), Animal::is_available)
                        .map(summarize)
                        .collect();
                    self.print_section(heading, &lines)?;
                }
            }
        }
        Ok(())
    }

    fn print_section(&mut self, heading: &str, lines: &[String]) -> Result<(), CommandError> {
        let heading = self.palette.heading(heading);
        self.prompt.say(heading)?;
        if lines.is_empty() {
            let none = self.palette.dim("  (none)");
            self.prompt.say(none)?;
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }
}

/// Every attribute of an animal on one line.
fn describe(animal: &Animal) -> String {
    let profile = &animal.profile;
    let specific = match &animal.kind {
        Kind::Dog(dog) => format!(" | Breed: {}", dog.breed),
        Kind::Monkey(monkey) => format!(" | Species: {}", monkey.species),
    };
    let measurements = match &animal.kind {
        Kind::Dog(_) => String::new(),
        Kind::Monkey(monkey) => format!(
            " | Tail Length: {} | Height: {} | Body Length: {}",
            monkey.tail_length, monkey.height, monkey.body_length
        ),
    };
    format!(
        "{}: {}{specific} | Gender: {} | Age: {} | Weight: {}{measurements} | Acquired: {} | \
         Training: {} | Reserved: {} | Country: {} | In Service: {}",
        animal.category().label(),
        profile.name,
        profile.gender,
        profile.age,
        profile.weight,
        profile.acquisition_date,
        profile.training_status,
        profile.reserved,
        profile.acquisition_country,
        profile.in_service_country,
    )
}

/// Name and in-service country.
fn summarize(animal: &Animal) -> String {
    format!(
        "{}: {} | In Service Country: {}",
        animal.category().label(),
        animal.name(),
        animal.profile.in_service_country
    )
}
