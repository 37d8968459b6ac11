//! Demo disposal certificates. Each download is a fresh snapshot of the
//! waste item with its own certificate id; certificates are not stored.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::CertificateService;
