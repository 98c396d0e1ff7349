//! The legacy comma-delimited format.
//!
//! ```text
//! Dog,name,breed,gender,age,weight,acquisitionDate,acquisitionCountry,trainingStatus,reserved,inServiceCountry
//! Monkey,name,species,tailLength,height,bodyLength,gender,age,weight,acquisitionDate,acquisitionCountry,trainingStatus,reserved,inServiceCountry
//! ```
//!
//! Fields are neither quoted nor escaped, so free text containing a comma
//! cannot be represented.

use std::str::FromStr;

use crate::{
    domain::{Animal, Category, Kind, MonkeyData, Name, Profile, Species},
    storage::{Codec, EncodeError, ParseLineError},
};

const SEPARATOR: char = ',';
const DOG_FIELDS: usize = 11;
const MONKEY_FIELDS: usize = 14;

/// Comma-delimited codec, compatible with existing data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delimited;

impl Codec for Delimited {
    fn encode(&self, animal: &Animal) -> Result<String, EncodeError> {
        let profile = &animal.profile;
        let fields = match &animal.kind {
            Kind::Dog(dog) => vec![
                Category::Dog.label().to_string(),
                text("name", profile.name.as_str())?,
                text("breed", &dog.breed)?,
                text("gender", &profile.gender)?,
                profile.age.to_string(),
                profile.weight.to_string(),
                text("acquisition date", &profile.acquisition_date)?,
                text("acquisition country", &profile.acquisition_country)?,
                text("training status", &profile.training_status)?,
                profile.reserved.to_string(),
                text("in-service country", &profile.in_service_country)?,
            ],
            Kind::Monkey(monkey) => vec![
                Category::Monkey.label().to_string(),
                text("name", profile.name.as_str())?,
                monkey.species.to_string(),
                monkey.tail_length.to_string(),
                monkey.height.to_string(),
                monkey.body_length.to_string(),
                text("gender", &profile.gender)?,
                profile.age.to_string(),
                profile.weight.to_string(),
                text("acquisition date", &profile.acquisition_date)?,
                text("acquisition country", &profile.acquisition_country)?,
                text("training status", &profile.training_status)?,
                profile.reserved.to_string(),
                text("in-service country", &profile.in_service_country)?,
            ],
        };
        Ok(fields.join(","))
    }

    fn decode(&self, line: &str) -> Result<Animal, ParseLineError> {
        let tokens: Vec<&str> = line.split(SEPARATOR).collect();
        let category = Category::from_str(tokens[0])
            .map_err(|_| ParseLineError::UnknownTag(tokens[0].to_string()))?;

        match category {
            Category::Dog => {
                let [
                    _,
                    name,
                    breed,
                    gender,
                    age,
                    weight,
                    date,
                    country,
                    status,
                    reserved,
                    serving,
                ] = fields::<DOG_FIELDS>(&tokens)?;
                let profile = profile(
                    name, gender, age, weight, date, country, status, reserved, serving,
                )?;
                Ok(Animal::dog(profile, breed))
            }
            Category::Monkey => {
                let [
                    _,
                    name,
                    species,
                    tail_length,
                    height,
                    body_length,
                    gender,
                    age,
                    weight,
                    date,
                    country,
                    status,
                    reserved,
                    serving,
                ] = fields::<MONKEY_FIELDS>(&tokens)?;
                let species = Species::from_str(species)
                    .map_err(|_| ParseLineError::Species(species.to_string()))?;
                let data = MonkeyData {
                    species,
                    tail_length: number("tail length", tail_length)?,
                    height: number("height", height)?,
                    body_length: number("body length", body_length)?,
                };
                let profile = profile(
                    name, gender, age, weight, date, country, status, reserved, serving,
                )?;
                Ok(Animal::monkey(profile, data))
            }
        }
    }
}

/// Rejects text that would break the line structure.
fn text(field: &'static str, value: &str) -> Result<String, EncodeError> {
    if value.contains([SEPARATOR, '\n', '\r']) {
        return Err(EncodeError::Separator {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn fields<'a, const N: usize>(tokens: &[&'a str]) -> Result<[&'a str; N], ParseLineError> {
    <[&str; N]>::try_from(tokens).map_err(|_| ParseLineError::FieldCount {
        expected: N,
        found: tokens.len(),
    })
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseLineError> {
    value.trim().parse().map_err(|_| ParseLineError::Number {
        field,
        value: value.to_string(),
    })
}

/// Anything other than "true" (ignoring case) is `false`.
fn boolean(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[allow(clippy::too_many_arguments)]
fn profile(
    name: &str,
    gender: &str,
    age: &str,
    weight: &str,
    acquisition_date: &str,
    acquisition_country: &str,
    training_status: &str,
    reserved: &str,
    in_service_country: &str,
) -> Result<Profile, ParseLineError> {
    Ok(Profile {
        name: Name::new(name).map_err(|_| ParseLineError::EmptyName)?,
        gender: gender.to_string(),
        age: number("age", age)?,
        weight: number("weight", weight)?,
        acquisition_date: acquisition_date.to_string(),
        acquisition_country: acquisition_country.to_string(),
        training_status: training_status.to_string(),
        reserved: boolean(reserved),
        in_service_country: in_service_country.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::Repository;

    const SPOT: &str =
        "Dog,Spot,German Shepherd,male,1,25.6,05-12-2019,United States,intake,false,United States";
    const KONG: &str = "Monkey,Kong,Macaque,4.8,10.2,20.7,female,1,17.4,12-05-2020,United \
                        Kingdom,in service,false,United Kingdom";

    #[test]
    fn encodes_samples_in_legacy_layout() {
        let repository = Repository::with_samples();
        let spot = repository.find_by_name(Category::Dog, "Spot").unwrap();
        let kong = repository.find_by_name(Category::Monkey, "Kong").unwrap();

        assert_eq!(Delimited.encode(spot).unwrap(), SPOT);
        assert_eq!(Delimited.encode(kong).unwrap(), KONG);
    }

    #[test]
    fn decodes_dog_line() {
        let animal = Delimited.decode(SPOT).unwrap();

        assert_eq!(animal.name().as_str(), "Spot");
        assert_eq!(animal.profile.age, 1);
        assert!((animal.profile.weight - 25.6).abs() < f32::EPSILON);
        assert!(!animal.is_reserved());
        assert!(
            matches!(animal.kind, Kind::Dog(ref dog) if dog.breed == "German Shepherd")
        );
    }

    #[test]
    fn decodes_monkey_line() {
        let animal = Delimited.decode(KONG).unwrap();

        assert_eq!(animal.category(), Category::Monkey);
        assert_eq!(animal.profile.acquisition_country, "United Kingdom");
        let Kind::Monkey(monkey) = animal.kind else {
            panic!("expected a monkey");
        };
        assert_eq!(monkey.species, Species::Macaque);
        assert!((monkey.body_length - 20.7).abs() < f32::EPSILON);
    }

    #[test]
    fn record_tag_ignores_case() {
        let line = SPOT.replacen("Dog", "DOG", 1);
        assert_eq!(Delimited.decode(&line).unwrap().category(), Category::Dog);
    }

    #[test_case("TRUE", true; "uppercase true")]
    #[test_case("true", true; "lowercase true")]
    #[test_case("yes", false; "yes is not true")]
    #[test_case("", false; "empty")]
    fn reserved_uses_lenient_boolean(value: &str, expected: bool) {
        let line = SPOT.replace(",false,", &format!(",{value},"));
        assert_eq!(Delimited.decode(&line).unwrap().is_reserved(), expected);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let line = format!("{SPOT},extra");
        assert!(matches!(
            Delimited.decode(&line),
            Err(ParseLineError::FieldCount {
                expected: 11,
                found: 12
            })
        ));
        assert!(matches!(
            Delimited.decode("Monkey,Kong"),
            Err(ParseLineError::FieldCount {
                expected: 14,
                found: 2
            })
        ));
    }

    #[test]
    fn bad_number_is_rejected() {
        let line = SPOT.replace(",1,", ",one,");
        assert!(matches!(
            Delimited.decode(&line),
            Err(ParseLineError::Number { field: "age", .. })
        ));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            Delimited.decode("Cat,Tom"),
            Err(ParseLineError::UnknownTag(tag)) if tag == "Cat"
        ));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let line = KONG.replace("Macaque", "Koala");
        assert!(matches!(
            Delimited.decode(&line),
            Err(ParseLineError::Species(_))
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        let line = SPOT.replace("Spot", "");
        assert!(matches!(
            Delimited.decode(&line),
            Err(ParseLineError::EmptyName)
        ));
    }

    #[test]
    fn comma_in_text_cannot_be_encoded() {
        let mut animal = Delimited.decode(SPOT).unwrap();
        animal.profile.training_status = "Phase I, week 2".to_string();

        assert!(matches!(
            Delimited.encode(&animal),
            Err(EncodeError::Separator {
                field: "training status",
                ..
            })
        ));
    }

    #[test]
    fn every_sample_round_trips() {
        let repository = Repository::with_samples();
        for animal in repository.iter() {
            let line = Delimited.encode(animal).unwrap();
            assert_eq!(&Delimited.decode(&line).unwrap(), animal);
        }
    }
}
