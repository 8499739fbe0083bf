use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::vehicle::Vehicle;
use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_non_blank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        };
        f.write_str(token)
    }
}

/// Immutable postal address. All five fields must be non-blank; the first
/// empty one, in declaration order, names the validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self> {
        let street = street.into();
        let city = city.into();
        let state = state.into();
        let zip_code = zip_code.into();
        let country = country.into();

        validate_non_blank("street", &street)?;
        validate_non_blank("city", &city)?;
        validate_non_blank("state", &state)?;
        validate_non_blank("zipCode", &zip_code)?;
        validate_non_blank("country", &country)?;

        Ok(Self {
            street,
            city,
            state,
            zip_code,
            country,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// A person and the vehicles they own. Immutable after construction: the
/// vehicle list is private and only handed out as a slice, and every mutator
/// returns a new `Person` instead of touching `self`.
///
/// Equality and hashing go by `id` alone, so two snapshots of the same
/// person compare equal even when their attributes have diverged.
#[derive(Debug, Clone)]
pub struct Person {
    id: Uuid,
    name: String,
    last_name: String,
    age: i32,
    birth_date: NaiveDate,
    email: String,
    phone_number: Option<String>,
    gender: Gender,
    address: Option<Address>,
    cars: Vec<Vehicle>,
}

impl Person {
    /// Builds a person with a freshly generated id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        birth_date: NaiveDate,
        email: impl Into<String>,
        phone_number: Option<String>,
        gender: Gender,
        address: Option<Address>,
        cars: Vec<Vehicle>,
    ) -> Result<Self> {
        Self::with_id(
            Uuid::new_v4(),
            name,
            last_name,
            age,
            birth_date,
            email,
            phone_number,
            gender,
            address,
            cars,
        )
    }

    /// Full constructor with a caller-supplied id.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        birth_date: NaiveDate,
        email: impl Into<String>,
        phone_number: Option<String>,
        gender: Gender,
        address: Option<Address>,
        cars: Vec<Vehicle>,
    ) -> Result<Self> {
        let name = name.into();
        let last_name = last_name.into();
        let email = email.into();

        validate_non_blank("name", &name)?;
        validate_non_blank("lastName", &last_name)?;
        validate_min("age", age, 0)?;
        validate_non_blank("email", &email)?;

        Ok(Self {
            id,
            name,
            last_name,
            age,
            birth_date,
            email,
            phone_number,
            gender,
            address,
            cars,
        })
    }

    /// Convenience constructor for a person without vehicles.
    #[allow(clippy::too_many_arguments)]
    pub fn without_cars(
        name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        birth_date: NaiveDate,
        email: impl Into<String>,
        phone_number: Option<String>,
        gender: Gender,
        address: Option<Address>,
    ) -> Result<Self> {
        Self::new(
            name,
            last_name,
            age,
            birth_date,
            email,
            phone_number,
            gender,
            address,
            Vec::new(),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
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

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Read-only view of the owned vehicles; callers can never reach the
    /// backing storage.
    pub fn cars(&self) -> &[Vehicle] {
        &self.cars
    }

    /// Vehicles matching `predicate`, in original order.
    pub fn filter_cars<P>(&self, predicate: P) -> Vec<&Vehicle>
    where
        P: Fn(&Vehicle) -> bool,
    {
        self.cars.iter().filter(|car| predicate(car)).collect()
    }

    /// The highest-priced vehicle, leftmost on ties, `None` when the person
    /// owns no vehicles.
    pub fn find_most_expensive_car(&self) -> Option<&Vehicle> {
        let mut best: Option<&Vehicle> = None;
        for car in &self.cars {
            match best {
                Some(current) if car.price() > current.price() => best = Some(car),
                None => best = Some(car),
                _ => {}
            }
        }
        best
    }

    pub fn total_car_value(&self) -> f64 {
        self.cars.iter().map(Vehicle::price).sum()
    }

    pub fn has_electric_car(&self) -> bool {
        self.cars.iter().any(Vehicle::is_electric)
    }

    /// New person with `car` appended; `self` is untouched.
    pub fn add_car(&self, car: Vehicle) -> Person {
        let mut cars = self.cars.clone();
        cars.push(car);
        self.replace(|person| person.cars = cars)
    }

    /// New person with the vehicle list replaced wholesale.
    pub fn with_cars(&self, cars: Vec<Vehicle>) -> Person {
        self.replace(|person| person.cars = cars)
    }

    /// New person with the address replaced.
    pub fn with_address(&self, address: Address) -> Person {
        self.replace(|person| person.address = Some(address))
    }

    fn replace(&self, apply: impl FnOnce(&mut Person)) -> Person {
        let mut copy = self.clone();
        apply(&mut copy);
        copy
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{id={}, name='{}', lastName='{}', age={}, birthDate={}, email='{}', phoneNumber={:?}, gender={}, address={:?}, cars={}}}",
            self.id,
            self.name,
            self.last_name,
            self.age,
            self.birth_date,
            self.email,
            self.phone_number,
            self.gender,
            self.address,
            self.cars.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::FuelType;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
    }

    fn car(price: f64, fuel_type: FuelType) -> Vehicle {
        Vehicle::new("Honda", "Civic", "Red", 2018, price, "VIN-9", fuel_type, 150).unwrap()
    }

    fn sample_person(cars: Vec<Vehicle>) -> Person {
        Person::new(
            "Grace",
            "Hopper",
            34,
            birth_date(),
            "grace@example.com",
            Some("555-0101".to_string()),
            Gender::Female,
            None,
            cars,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_roundtrip() {
        let person = sample_person(vec![]);
        assert_eq!(person.name(), "Grace");
        assert_eq!(person.last_name(), "Hopper");
        assert_eq!(person.full_name(), "Grace Hopper");
        assert_eq!(person.age(), 34);
        assert_eq!(person.birth_date(), birth_date());
        assert_eq!(person.email(), "grace@example.com");
        assert_eq!(person.phone_number(), Some("555-0101"));
        assert_eq!(person.gender(), Gender::Female);
        assert!(person.address().is_none());
        assert!(person.cars().is_empty());
    }

    #[test]
    fn test_invalid_fields_fail_construction() {
        let date = birth_date();
        assert!(Person::without_cars("", "H", 1, date, "a@b.c", None, Gender::Other, None).is_err());
        assert!(Person::without_cars("G", "", 1, date, "a@b.c", None, Gender::Other, None).is_err());
        assert!(Person::without_cars("G", "H", -1, date, "a@b.c", None, Gender::Other, None).is_err());
        assert!(Person::without_cars("G", "H", 1, date, " ", None, Gender::Other, None).is_err());
    }

    #[test]
    fn test_equality_is_id_only() {
        let id = Uuid::new_v4();
        let a = Person::with_id(
            id, "Ada", "Lovelace", 28, birth_date(), "ada@example.com", None,
            Gender::Female, None, vec![],
        )
        .unwrap();
        let b = Person::with_id(
            id, "Different", "Name", 99, birth_date(), "other@example.com", None,
            Gender::Male, None, vec![],
        )
        .unwrap();
        assert_eq!(a, b);

        let c = sample_person(vec![]);
        let d = sample_person(vec![]);
        assert_ne!(c, d);
    }

    #[test]
    fn test_add_car_is_non_mutating() {
        let original = sample_person(vec![car(10_000.0, FuelType::Gasoline)]);
        let updated = original.add_car(car(5_000.0, FuelType::Diesel));

        assert_eq!(original.cars().len(), 1);
        assert_eq!(updated.cars().len(), 2);
        assert_eq!(updated.cars()[1].price(), 5_000.0);
        assert_eq!(original, updated); // same id, still "equal"
    }

    #[test]
    fn test_with_cars_replaces_collection() {
        let original = sample_person(vec![car(10_000.0, FuelType::Gasoline)]);
        let updated = original.with_cars(vec![]);
        assert_eq!(original.cars().len(), 1);
        assert!(updated.cars().is_empty());
    }

    #[test]
    fn test_with_address_replaces_address() {
        let original = sample_person(vec![]);
        let address = Address::new("1 Main St", "Springfield", "IL", "62701", "USA").unwrap();
        let updated = original.with_address(address.clone());
        assert!(original.address().is_none());
        assert_eq!(updated.address(), Some(&address));
    }

    #[test]
    fn test_total_car_value() {
        assert_eq!(sample_person(vec![]).total_car_value(), 0.0);
        let person = sample_person(vec![
            car(10_000.0, FuelType::Gasoline),
            car(20_000.0, FuelType::Gasoline),
            car(5_000.0, FuelType::Gasoline),
        ]);
        assert_eq!(person.total_car_value(), 35_000.0);
    }

    #[test]
    fn test_most_expensive_car_leftmost_tie_break() {
        let first = car(20_000.0, FuelType::Gasoline);
        let person = sample_person(vec![
            car(10_000.0, FuelType::Gasoline),
            first.clone(),
            car(20_000.0, FuelType::Diesel),
        ]);
        let found = person.find_most_expensive_car().unwrap();
        assert_eq!(found.id(), first.id());
    }

    #[test]
    fn test_most_expensive_car_empty() {
        assert!(sample_person(vec![]).find_most_expensive_car().is_none());
    }

    #[test]
    fn test_filter_cars_preserves_order() {
        let cheap = car(1_000.0, FuelType::Gasoline);
        let mid = car(2_000.0, FuelType::Electric);
        let dear = car(3_000.0, FuelType::Hybrid);
        let person = sample_person(vec![cheap, mid.clone(), dear.clone()]);

        let filtered = person.filter_cars(|c| c.price() > 1_500.0);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id(), mid.id());
        assert_eq!(filtered[1].id(), dear.id());
    }

    #[test]
    fn test_has_electric_car() {
        assert!(!sample_person(vec![car(1.0, FuelType::Diesel)]).has_electric_car());
        assert!(sample_person(vec![car(1.0, FuelType::Hybrid)]).has_electric_car());
    }

    #[test]
    fn test_address_validation_names_first_empty_field() {
        let err = Address::new("1 Main St", "", "", "62701", "USA").unwrap_err();
        assert!(err.to_string().contains("city"));
    }

    #[test]
    fn test_address_formatted() {
        let address = Address::new("1 Main St", "Springfield", "IL", "62701", "USA").unwrap();
        assert_eq!(address.formatted(), "1 Main St, Springfield, IL 62701, USA");
    }
}
