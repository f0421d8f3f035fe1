//! Domain layer for Overlay Weather
//!
//! Contains the configuration model shared by the setup surface and the
//! widget, the forecast/geocoding data shapes, and the WMO code tables.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
