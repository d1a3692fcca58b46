pub mod config;
pub mod error;
pub mod types;

pub use config::{InitialFlags, SimulationConfig};
pub use error::{PetError, Result};
