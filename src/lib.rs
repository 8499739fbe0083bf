pub mod domain;
pub mod loader;
pub mod utils;

pub use domain::person::{Address, Gender, Person};
pub use domain::summary::{PersonSummary, VehicleSummary, NO_ADDRESS};
pub use domain::vehicle::{FuelType, Vehicle};
pub use loader::{load_cars, load_cars_from_str, load_people, load_people_from_str};
pub use utils::error::{FleetError, Result};
