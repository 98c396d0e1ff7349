use std::io::{BufRead, Write};

use rescue::{
    Animal, Category, DuplicateError, Species,
    domain::{MonkeyData, Name, Profile},
};
use tracing::{info, instrument};

use super::session::{CommandError, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Registers a new dog.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn intake_dog(&mut self) -> Result<(), CommandError> {
        let name = self.new_name(Category::Dog)?;
        let breed = self.prompt.ask("Breed: ")?;
        let profile = self.profile(name, Category::Dog)?;

        self.admit(Animal::dog(profile, breed))
    }

    /// Registers a new monkey.
    ///
    /// The species is checked as soon as it is entered, before any other
    /// questions are asked.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn intake_monkey(&mut self) -> Result<(), CommandError> {
        let name = self.new_name(Category::Monkey)?;
        let species: Species = self.prompt.ask("Species: ")?.parse()?;
        let data = MonkeyData {
            species,
            tail_length: self.prompt.ask_measurement("Tail Length: ", "tail length")?,
            height: self.prompt.ask_measurement("Height: ", "height")?,
            body_length: self.prompt.ask_measurement("Body Length: ", "body length")?,
        };
        let profile = self.profile(name, Category::Monkey)?;

        self.admit(Animal::monkey(profile, data))
    }

    /// Asks for a name that is not yet used in the category.
    fn new_name(&mut self, category: Category) -> Result<Name, CommandError> {
        let answer = self
            .prompt
            .ask(&format!("What is the {category}'s name? "))?;
        if self.repository.contains(category, &answer) {
            return Err(DuplicateError {
                category,
                name: answer,
            }
            .into());
        }
        Ok(Name::new(answer)?)
    }

    /// Asks for the fields every animal shares.
    fn profile(&mut self, name: Name, category: Category) -> Result<Profile, CommandError> {
        Ok(Profile {
            name,
            gender: self.prompt.ask("Gender: ")?,
            age: self.prompt.ask_number("Age: ", "age")?,
            weight: self.prompt.ask_measurement("Weight: ", "weight")?,
            acquisition_date: self.prompt.ask("Acquisition date (MM-DD-YYYY): ")?,
            acquisition_country: self.prompt.ask("Acquisition country: ")?,
            training_status: self.prompt.ask("Training status: ")?,
            reserved: self
                .prompt
                .ask_yes_no(&format!("Is the {category} reserved? (yes/no): "))?,
            in_service_country: self.prompt.ask("In-service country: ")?,
        })
    }

    fn admit(&mut self, animal: Animal) -> Result<(), CommandError> {
        let label = animal.category().label();
        info!(name = %animal.name(), category = %animal.category(), "intake");
        self.repository.add(animal)?;
        self.success(&format!("{label} added successfully."))?;
        Ok(())
    }
}
