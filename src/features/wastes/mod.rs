//! Waste registry: registration, dashboard listing, removal and late
//! status changes of electronic-waste items.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/wastes` | Register a waste item |
//! | GET | `/api/wastes` | Dashboard rows, newest first |
//! | GET | `/api/wastes/{id}` | Single item |
//! | DELETE | `/api/wastes/{id}?confirm=true` | Remove an item |
//! | PATCH | `/api/wastes/{id}/status` | `en_transito -> recibido -> procesado` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WasteService;
