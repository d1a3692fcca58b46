//! TickPet - a single pet whose mood follows a decaying energy counter
//!
//! [`simulation::simulate_pet`] is the entry point the harness calls. It
//! reads `run_duration` from a [`harness::RunContext`], ticks a fresh
//! [`entity::Pet`] that many times and emits one `<name> says: <mood>` line
//! per tick.

pub mod core;
pub mod entity;
pub mod harness;
pub mod simulation;
