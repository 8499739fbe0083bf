// Domain layer: immutable entities and their pure query operations.

pub mod person;
pub mod summary;
pub mod vehicle;
