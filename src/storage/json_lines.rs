use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Animal, Category, Kind, MonkeyData, Name, Profile, Species},
    storage::{Codec, EncodeError, ParseLineError},
};

/// One JSON object per line.
///
/// Free text is escaped, so commas and line breaks survive a round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLines;

impl Codec for JsonLines {
    fn encode(&self, animal: &Animal) -> Result<String, EncodeError> {
        let record = Record::from(animal);
        // JSON has no NaN or infinity; serde_json would write `null`.
        for (field, value) in record.numbers() {
            if !value.is_finite() {
                return Err(EncodeError::NotFinite { field, value });
            }
        }
        Ok(serde_json::to_string(&record)?)
    }

    fn decode(&self, line: &str) -> Result<Animal, ParseLineError> {
        serde_json::from_str::<Record>(line)?.try_into()
    }
}

/// The serialised shape of an animal.
///
/// Field names match the legacy column names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    #[serde(rename = "type")]
    category: String,
    name: String,
    gender: String,
    age: u32,
    weight: f32,
    acquisition_date: String,
    acquisition_country: String,
    training_status: String,
    reserved: bool,
    in_service_country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tail_length: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body_length: Option<f32>,
}

impl Record {
    fn numbers(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        [
            ("weight", Some(self.weight)),
            ("tail length", self.tail_length),
            ("height", self.height),
            ("body length", self.body_length),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some((field, value?)))
    }
}

impl From<&Animal> for Record {
    fn from(animal: &Animal) -> Self {
        let profile = &animal.profile;
        let mut record = Self {
            category: animal.category().label().to_string(),
            name: profile.name.to_string(),
            gender: profile.gender.clone(),
            age: profile.age,
            weight: profile.weight,
            acquisition_date: profile.acquisition_date.clone(),
            acquisition_country: profile.acquisition_country.clone(),
            training_status: profile.training_status.clone(),
            reserved: profile.reserved,
            in_service_country: profile.in_service_country.clone(),
            breed: None,
            species: None,
            tail_length: None,
            height: None,
            body_length: None,
        };
        match &animal.kind {
            Kind::Dog(dog) => record.breed = Some(dog.breed.clone()),
            Kind::Monkey(monkey) => {
                record.species = Some(monkey.species.to_string());
                record.tail_length = Some(monkey.tail_length);
                record.height = Some(monkey.height);
                record.body_length = Some(monkey.body_length);
            }
        }
        record
    }
}

impl TryFrom<Record> for Animal {
    type Error = ParseLineError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let category = Category::from_str(&record.category)
            .map_err(|_| ParseLineError::UnknownTag(record.category.clone()))?;

        let profile = Profile {
            name: Name::new(record.name).map_err(|_| ParseLineError::EmptyName)?,
            gender: record.gender,
            age: record.age,
            weight: record.weight,
            acquisition_date: record.acquisition_date,
            acquisition_country: record.acquisition_country,
            training_status: record.training_status,
            reserved: record.reserved,
            in_service_country: record.in_service_country,
        };

        match category {
            Category::Dog => {
                let breed = record.breed.ok_or(ParseLineError::MissingField("breed"))?;
                Ok(Self::dog(profile, breed))
            }
            Category::Monkey => {
                let species = record
                    .species
                    .ok_or(ParseLineError::MissingField("species"))?;
                let species = Species::from_str(&species)
                    .map_err(|_| ParseLineError::Species(species.clone()))?;
                let data = MonkeyData {
                    species,
                    tail_length: record
                        .tail_length
                        .ok_or(ParseLineError::MissingField("tail length"))?,
                    height: record.height.ok_or(ParseLineError::MissingField("height"))?,
                    body_length: record
                        .body_length
                        .ok_or(ParseLineError::MissingField("body length"))?,
                };
                Ok(Self::monkey(profile, data))
            }
        }
    }
}
