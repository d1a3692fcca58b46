//! Simulation configuration
//!
//! The decay rule itself is fixed (see `entity::pet`); only the parts of a
//! run that sit around the pet are configurable here.

use std::time::Duration;

use crate::core::error::{PetError, Result};

/// Name given to the pet when nothing else is configured
pub const DEFAULT_PET_NAME: &str = "Fruities🍇🥑";

/// Real time the loop blocks for after each tick
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How a freshly created pet gets its mood flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialFlags {
    /// hungry=true, sleepy=false, playful=true regardless of energy.
    ///
    /// These do not match the update formulas at full energy; the mismatch
    /// lasts until the first tick.
    #[default]
    Literal,
    /// Flags computed from the starting energy with the update formulas
    Derived,
}

/// Configuration for a single pet run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Name printed in front of every mood line
    ///
    /// Must be non-empty.
    pub pet_name: String,

    /// How long each tick blocks the caller
    ///
    /// At the default of one second a ten tick run takes ten seconds of
    /// wall-clock time. Tests swap the clock instead of shrinking this.
    pub tick_interval: Duration,

    /// How the pet's starting flags are chosen
    ///
    /// `Literal` keeps the fixed hungry+playful start; `Derived` applies the
    /// update formulas to the starting energy.
    pub initial_flags: InitialFlags,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pet_name: DEFAULT_PET_NAME.to_string(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            initial_flags: InitialFlags::Literal,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.pet_name = name.into();
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_initial_flags(mut self, flags: InitialFlags) -> Self {
        self.initial_flags = flags;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.pet_name.trim().is_empty() {
            return Err(PetError::InvalidConfig("pet_name must not be empty".into()));
        }
        Ok(())
    }
}
