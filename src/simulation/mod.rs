pub mod clock;
pub mod run;

pub use clock::{Clock, RealClock, VirtualClock};
pub use run::{run_ticks, simulate_pet, RunSummary};
