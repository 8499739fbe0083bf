use chrono::NaiveDate;

use crate::domain::person::Person;

/// Placeholder used when the source person has no address on file.
pub const NO_ADDRESS: &str = "No address provided";

/// Flattened view of a single vehicle: make and model joined, the split
/// originals are not recoverable.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSummary {
    make_and_model: String,
    year: i32,
    color: String,
    price: f64,
}

impl VehicleSummary {
    pub fn make_and_model(&self) -> &str {
        &self.make_and_model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Lossy snapshot of a [`Person`] for display or transport. Drops the id,
/// fuel type, horsepower and VIN; there is no way back to a `Person`.
///
/// Each summary owns its vehicle list outright, so two snapshots of the same
/// person are fully independent of each other and of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    full_name: String,
    age: i32,
    birth_date: NaiveDate,
    email: String,
    phone_number: Option<String>,
    gender: String,
    address: String,
    cars: Vec<VehicleSummary>,
}

impl PersonSummary {
    /// Pure one-way projection from the full entity.
    pub fn from_person(person: &Person) -> Self {
        let cars = person
            .cars()
            .iter()
            .map(|car| VehicleSummary {
                make_and_model: format!("{} {}", car.make(), car.model()),
                year: car.year(),
                color: car.color().to_string(),
                price: car.price(),
            })
            .collect();

        let address = person
            .address()
            .map(|a| a.formatted())
            .unwrap_or_else(|| NO_ADDRESS.to_string());

        Self {
            full_name: person.full_name(),
            age: person.age(),
            birth_date: person.birth_date(),
            email: person.email().to_string(),
            phone_number: person.phone_number().map(str::to_string),
            gender: person.gender().to_string(),
            address,
            cars,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn cars(&self) -> &[VehicleSummary] {
        &self.cars
    }

    /// Vehicle summaries matching `predicate`, in original order.
    pub fn filter_cars<P>(&self, predicate: P) -> Vec<&VehicleSummary>
    where
        P: Fn(&VehicleSummary) -> bool,
    {
        self.cars.iter().filter(|car| predicate(car)).collect()
    }

    pub fn total_car_value(&self) -> f64 {
        self.cars.iter().map(VehicleSummary::price).sum()
    }

    /// Highest-priced summary entry, leftmost on ties.
    pub fn find_most_expensive_car(&self) -> Option<&VehicleSummary> {
        let mut best: Option<&VehicleSummary> = None;
        for car in &self.cars {
            match best {
                Some(current) if car.price() > current.price() => best = Some(car),
                None => best = Some(car),
                _ => {}
            }
        }
        best
    }
}
