//! JSON fixture loader.
//!
//! Two fixture shapes exist. The people fixture wraps its entries in a
//! `"people"` array and carries vehicles in a reduced schema (`brand`,
//! `model`, `year`, `licensePlate`); the loader fabricates every Vehicle
//! field that schema omits. The cars fixture is a flat array of full vehicle
//! records and gets no defaulting at all.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::person::{Address, Gender, Person};
use crate::domain::vehicle::{FuelType, Vehicle};
use crate::utils::error::{FleetError, Result};

/// Stand-in for string fields the reduced vehicle schema does not carry.
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct PeopleFile {
    people: Vec<RawPerson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerson {
    name: String,
    last_name: String,
    age: i32,
    birth_date: String,
    email: String,
    #[serde(default)]
    phone_number: Option<String>,
    gender: Gender,
    #[serde(default)]
    address: Option<RawAddress>,
    #[serde(default)]
    cars: Vec<RawCar>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAddress {
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

/// Reduced vehicle schema used inside people fixtures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCar {
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    year: i32,
    #[serde(default)]
    license_plate: Option<String>,
}

/// Full vehicle schema used by the cars fixture.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullCarRecord {
    #[serde(default)]
    id: Option<Uuid>,
    make: String,
    model: String,
    color: String,
    year: i32,
    price: f64,
    vin: String,
    fuel_type: FuelType,
    horse_power: i32,
}

/// Reads and hydrates a people fixture. Any unreadable file, malformed
/// JSON, bad date or invariant violation fails the whole load.
pub fn load_people(path: impl AsRef<Path>) -> Result<Vec<Person>> {
    let json = fs::read_to_string(path)?;
    load_people_from_str(&json)
}

pub fn load_people_from_str(json: &str) -> Result<Vec<Person>> {
    let file: PeopleFile = serde_json::from_str(json)?;
    let mut people = Vec::with_capacity(file.people.len());
    for raw in file.people {
        people.push(hydrate_person(raw)?);
    }
    info!("Loaded {} people from fixture", people.len());
    Ok(people)
}

/// Reads and hydrates a cars fixture (flat array, full schema).
pub fn load_cars(path: impl AsRef<Path>) -> Result<Vec<Vehicle>> {
    let json = fs::read_to_string(path)?;
    load_cars_from_str(&json)
}

pub fn load_cars_from_str(json: &str) -> Result<Vec<Vehicle>> {
    let records: Vec<FullCarRecord> = serde_json::from_str(json)?;
    let mut cars = Vec::with_capacity(records.len());
    for record in records {
        cars.push(Vehicle::with_id(
            record.id.unwrap_or_else(Uuid::new_v4),
            record.make,
            record.model,
            record.color,
            record.year,
            record.price,
            record.vin,
            record.fuel_type,
            record.horse_power,
        )?);
    }
    info!("Loaded {} cars from fixture", cars.len());
    Ok(cars)
}

fn hydrate_person(raw: RawPerson) -> Result<Person> {
    let birth_date = parse_fixture_date(&raw.birth_date)?;
    let address = raw
        .address
        .map(|a| Address::new(a.street, a.city, a.state, a.zip_code, a.country))
        .transpose()?;
    let cars = raw
        .cars
        .into_iter()
        .map(fabricate_vehicle)
        .collect::<Result<Vec<_>>>()?;
    Person::new(
        raw.name,
        raw.last_name,
        raw.age,
        birth_date,
        raw.email,
        raw.phone_number,
        raw.gender,
        address,
        cars,
    )
}

fn parse_fixture_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FleetError::MalformedInput {
        message: format!("invalid birth date '{}': expected YYYY-MM-DD", value),
    })
}

/// Lifts a reduced-schema car into a full Vehicle. Color, price, fuel type
/// and horsepower are fabricated because the people fixture never carries
/// them; missing string fields fall back to "Unknown" so the Vehicle
/// invariants still hold. The record goes through normal validation, so a
/// missing year (defaulted to 0) fails the load.
fn fabricate_vehicle(raw: RawCar) -> Result<Vehicle> {
    debug!(
        "Fabricating vehicle fields for reduced-schema car {:?} {:?}",
        raw.brand, raw.model
    );
    Vehicle::new(
        raw.brand.unwrap_or_else(|| UNKNOWN.to_string()),
        raw.model.unwrap_or_else(|| UNKNOWN.to_string()),
        UNKNOWN,
        raw.year,
        0.0,
        raw.license_plate.unwrap_or_else(|| UNKNOWN.to_string()),
        FuelType::Gasoline,
        0,
    )
}
