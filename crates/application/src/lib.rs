//! Application layer - Use cases and orchestration
//!
//! Contains the configuration codec, the setup and widget controllers and
//! the port definitions they drive. Adapters in the infrastructure layer
//! implement the ports.

pub mod error;
pub mod messages;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
