use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_non_blank};

/// Fuel categories recognized by the fixture format. Tokens are upper-case
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Hydrogen,
}

impl FuelType {
    /// Yearly depreciation rate applied when estimating a vehicle's value.
    /// Exhaustive on purpose: a new fuel category must pick a rate here.
    pub fn depreciation_rate(self) -> f64 {
        match self {
            FuelType::Electric => 0.10,
            FuelType::Hybrid => 0.12,
            FuelType::Gasoline => 0.15,
            FuelType::Diesel => 0.13,
            FuelType::Hydrogen => 0.08,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            FuelType::Gasoline => "GASOLINE",
            FuelType::Diesel => "DIESEL",
            FuelType::Electric => "ELECTRIC",
            FuelType::Hybrid => "HYBRID",
            FuelType::Hydrogen => "HYDROGEN",
        };
        f.write_str(token)
    }
}

/// Immutable record of a car. Every instance has passed the field invariants;
/// there is no way to mutate one after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: Uuid,
    make: String,
    model: String,
    color: String,
    year: i32,
    price: f64,
    vin: String,
    fuel_type: FuelType,
    horse_power: i32,
}

impl Vehicle {
    /// Builds a vehicle with a freshly generated id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: i32,
        price: f64,
        vin: impl Into<String>,
        fuel_type: FuelType,
        horse_power: i32,
    ) -> Result<Self> {
        Self::with_id(
            Uuid::new_v4(),
            make,
            model,
            color,
            year,
            price,
            vin,
            fuel_type,
            horse_power,
        )
    }

    /// Builds a vehicle with a caller-supplied id. Fails with a validation
    /// error naming the offending field; no partially-built value escapes.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        id: Uuid,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: i32,
        price: f64,
        vin: impl Into<String>,
        fuel_type: FuelType,
        horse_power: i32,
    ) -> Result<Self> {
        let make = make.into();
        let model = model.into();
        let color = color.into();
        let vin = vin.into();

        validate_non_blank("make", &make)?;
        validate_non_blank("model", &model)?;
        validate_min("year", year, 1900)?;
        validate_min("price", price, 0.0)?;
        validate_non_blank("vin", &vin)?;
        validate_min("horsePower", horse_power, 0)?;

        Ok(Self {
            id,
            make,
            model,
            color,
            year,
            price,
            vin,
            fuel_type,
            horse_power,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn horse_power(&self) -> i32 {
        self.horse_power
    }

    /// One-line human-readable summary.
    pub fn full_description(&self) -> String {
        format!(
            "{} {} ({}) - {} - {} - {}HP - ${:.2}",
            self.make, self.model, self.year, self.color, self.fuel_type, self.horse_power, self.price
        )
    }

    /// True for vehicles that run on electricity, at least in part.
    pub fn is_electric(&self) -> bool {
        matches!(self.fuel_type, FuelType::Electric | FuelType::Hybrid)
    }

    /// Estimated value after depreciating from the manufacture year to
    /// `as_of_year`. A year before manufacture gives a negative age and
    /// inverts the depreciation; that is intentional.
    pub fn estimated_value(&self, as_of_year: i32) -> f64 {
        let age = as_of_year - self.year;
        self.price * (1.0 - self.fuel_type.depreciation_rate()).powi(age)
    }
}
