//! Simulated pickup logistics: assigning a collection to a pending waste
//! item and completing the pickup.
//!
//! Both operations move the collection record and its waste item together:
//! assignment sets the item to `asignado` and creates a `programada`
//! record; pickup sets the record to `recogida` and the item (if it still
//! exists) to `en_transito`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CollectionService;
