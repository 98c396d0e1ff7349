//! Sample animals loaded at startup.

use non_empty_string::{NonEmptyString, non_empty_string};

use crate::domain::{Animal, MonkeyData, Profile, Species};

/// The values every sample animal is intaken with, minus its category data.
struct Sample {
    name: NonEmptyString,
    gender: &'static str,
    age: u32,
    weight: f32,
    acquired: (&'static str, &'static str),
    training_status: &'static str,
    reserved: bool,
    in_service_country: &'static str,
}

impl From<Sample> for Profile {
    fn from(sample: Sample) -> Self {
        let (acquisition_date, acquisition_country) = sample.acquired;
        Self {
            name: sample.name.into(),
            gender: sample.gender.to_string(),
            age: sample.age,
            weight: sample.weight,
            acquisition_date: acquisition_date.to_string(),
            acquisition_country: acquisition_country.to_string(),
            training_status: sample.training_status.to_string(),
            reserved: sample.reserved,
            in_service_country: sample.in_service_country.to_string(),
        }
    }
}

const fn measurements(
    species: Species,
    tail_length: f32,
    height: f32,
    body_length: f32,
) -> MonkeyData {
    MonkeyData {
        species,
        tail_length,
        height,
        body_length,
    }
}

/// The sample dogs, in insertion order.
pub(crate) fn dogs() -> Vec<Animal> {
    let spot = Sample {
        name: non_empty_string!("Spot"),
        gender: "male",
        age: 1,
        weight: 25.6,
        acquired: ("05-12-2019", "United States"),
        training_status: "intake",
        reserved: false,
        in_service_country: "United States",
    };
    let rex = Sample {
        name: non_empty_string!("Rex"),
        gender: "male",
        age: 3,
        weight: 35.2,
        acquired: ("02-03-2020", "United States"),
        training_status: "Phase I",
        reserved: false,
        in_service_country: "United States",
    };
    let bella = Sample {
        name: non_empty_string!("Bella"),
        gender: "female",
        age: 4,
        weight: 25.6,
        acquired: ("12-12-2019", "Canada"),
        training_status: "in service",
        reserved: true,
        in_service_country: "Canada",
    };

    vec![
        Animal::dog(spot.into(), "German Shepherd"),
        Animal::dog(rex.into(), "Great Dane"),
        Animal::dog(bella.into(), "Chihuahua"),
    ]
}

/// The sample monkeys, in insertion order.
pub(crate) fn monkeys() -> Vec<Animal> {
    let marcel = Sample {
        name: non_empty_string!("Marcel"),
        gender: "male",
        age: 2,
        weight: 15.3,
        acquired: ("09-11-2019", "Canada"),
        training_status: "Phase I",
        reserved: true,
        in_service_country: "Canada",
    };
    let kong = Sample {
        name: non_empty_string!("Kong"),
        gender: "female",
        age: 1,
        weight: 17.4,
        acquired: ("12-05-2020", "United Kingdom"),
        training_status: "in service",
        reserved: false,
        in_service_country: "United Kingdom",
    };
    let pat = Sample {
        name: non_empty_string!("Pat"),
        gender: "male",
        age: 3,
        weight: 18.2,
        acquired: ("12-10-2019", "United States"),
        training_status: "intake",
        reserved: false,
        in_service_country: "United States",
    };

    vec![
        Animal::monkey(marcel.into(), measurements(Species::Capuchin, 5.2, 9.4, 19.6)),
        Animal::monkey(kong.into(), measurements(Species::Macaque, 4.8, 10.2, 20.7)),
        Animal::monkey(pat.into(), measurements(Species::Tamarin, 5.5, 8.6, 18.4)),
    ]
}
