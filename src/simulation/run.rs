//! Tick loop - drives one pet for a fixed number of ticks
//!
//! Each tick: update the pet, emit its description, then block on the clock.

use std::time::Duration;

use crate::core::config::SimulationConfig;
use crate::core::error::{PetError, Result};
use crate::core::types::Tick;
use crate::entity::pet::{Mood, Pet};
use crate::harness::{RunContext, RUN_DURATION};
use crate::simulation::clock::Clock;

/// State of the pet once the loop has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: Tick,
    pub final_energy: i64,
    pub final_mood: Mood,
}

/// Run `run_duration` ticks against `pet`
///
/// A negative duration is reported before anything happens: the pet is not
/// touched and nothing is emitted.
pub fn run_ticks<C, K>(
    run_duration: i64,
    pet: &mut Pet,
    ctx: &mut C,
    clock: &mut K,
    tick_interval: Duration,
) -> Result<RunSummary>
where
    C: RunContext + ?Sized,
    K: Clock + ?Sized,
{
    if run_duration < 0 {
        return Err(PetError::NegativeDuration(run_duration));
    }
    let ticks = run_duration as Tick;

    tracing::info!("Running {} for {} ticks", pet.name(), ticks);

    for tick in 0..ticks {
        pet.update();
        ctx.emit(&pet.describe())?;
        tracing::debug!(
            tick,
            energy = pet.energy(),
            mood = ?pet.mood(),
            "pet updated"
        );
        clock.sleep(tick_interval);
    }

    tracing::info!(
        "{} finished after {} ticks at energy {}",
        pet.name(),
        ticks,
        pet.energy()
    );

    Ok(RunSummary {
        ticks,
        final_energy: pet.energy(),
        final_mood: pet.mood(),
    })
}

/// Harness entry point: read `run_duration`, create a fresh pet, run it
pub fn simulate_pet<C, K>(
    ctx: &mut C,
    clock: &mut K,
    config: &SimulationConfig,
) -> Result<RunSummary>
where
    C: RunContext + ?Sized,
    K: Clock + ?Sized,
{
    config.validate()?;
    let run_duration = ctx.int_parameter(RUN_DURATION)?;
    let mut pet = Pet::with_initial_flags(config.pet_name.as_str(), config.initial_flags);
    run_ticks(run_duration, &mut pet, ctx, clock, config.tick_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::InitialFlags;
    use crate::harness::ParamValue;
    use crate::simulation::clock::VirtualClock;

    #[derive(Default)]
    struct Capture {
        run_duration: Option<ParamValue>,
        lines: Vec<String>,
    }

    impl RunContext for Capture {
        fn read_parameter(&self, name: &str) -> Result<ParamValue> {
            self.run_duration
                .clone()
                .filter(|_| name == RUN_DURATION)
                .ok_or_else(|| PetError::MissingParameter(name.to_string()))
        }

        fn emit(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    fn with_duration(n: i64) -> Capture {
        Capture {
            run_duration: Some(ParamValue::Int(n)),
            lines: Vec::new(),
        }
    }

    #[test]
    fn test_zero_ticks_leaves_pet_alone() {
        let mut pet = Pet::new("Rex");
        let before = pet.clone();
        let mut ctx = Capture::default();
        let mut clock = VirtualClock::new();

        let summary = run_ticks(0, &mut pet, &mut ctx, &mut clock, Duration::from_secs(1)).unwrap();

        assert_eq!(summary.ticks, 0);
        assert_eq!(pet, before);
        assert!(ctx.lines.is_empty());
        assert!(clock.naps().is_empty());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let mut pet = Pet::new("Rex");
        let before = pet.clone();
        let mut ctx = Capture::default();
        let mut clock = VirtualClock::new();

        let err = run_ticks(-3, &mut pet, &mut ctx, &mut clock, Duration::from_secs(1)).unwrap_err();

        assert!(matches!(err, PetError::NegativeDuration(-3)));
        assert_eq!(pet, before);
        assert!(ctx.lines.is_empty());
    }

    #[test]
    fn test_one_line_and_one_sleep_per_tick() {
        let mut pet = Pet::new("Rex");
        let mut ctx = Capture::default();
        let mut clock = VirtualClock::new();

        let summary = run_ticks(3, &mut pet, &mut ctx, &mut clock, Duration::from_secs(1)).unwrap();

        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.final_energy, 70);
        assert_eq!(summary.final_mood, Mood::Playful);
        assert_eq!(ctx.lines.len(), 3);
        assert_eq!(clock.naps(), &[Duration::from_secs(1); 3]);
        for line in &ctx.lines {
            assert!(line.starts_with("Rex says: "));
        }
    }

    #[test]
    fn test_ten_tick_transcript() {
        let mut pet = Pet::new("Rex");
        let mut ctx = Capture::default();
        let mut clock = VirtualClock::new();

        run_ticks(10, &mut pet, &mut ctx, &mut clock, Duration::from_secs(1)).unwrap();

        let expected = [
            Mood::Playful, // 90
            Mood::Playful, // 80
            Mood::Playful, // 70
            Mood::Playful, // 60
            Mood::Playful, // 50
            Mood::Hungry,  // 40
            Mood::Hungry,  // 30
            Mood::Sleepy,  // 20
            Mood::Sleepy,  // 10
            Mood::Sleepy,  // 0
        ];
        assert_eq!(ctx.lines.len(), expected.len());
        for (line, mood) in ctx.lines.iter().zip(expected) {
            assert_eq!(line, &format!("Rex says: {}", mood.message()));
        }
        assert_eq!(pet.energy(), 0);
    }

    #[test]
    fn test_simulate_pet_reads_run_duration() {
        let mut ctx = with_duration(4);
        let mut clock = VirtualClock::new();
        let config = SimulationConfig::new().with_pet_name("Rex");

        let summary = simulate_pet(&mut ctx, &mut clock, &config).unwrap();

        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.final_energy, 60);
        assert_eq!(ctx.lines.len(), 4);
        assert_eq!(
            ctx.lines[3],
            "Rex says: 🐾 Let\u{2019}s play! I\u{2019}m full of energy!"
        );
    }

    #[test]
    fn test_simulate_pet_uses_default_name_and_interval() {
        let mut ctx = with_duration(2);
        let mut clock = VirtualClock::new();

        simulate_pet(&mut ctx, &mut clock, &SimulationConfig::default()).unwrap();

        assert!(ctx.lines[0].starts_with("Fruities🍇🥑 says: "));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn test_simulate_pet_derived_flags_zero_ticks() {
        let mut ctx = with_duration(0);
        let mut clock = VirtualClock::new();
        let config = SimulationConfig::new().with_initial_flags(InitialFlags::Derived);

        let summary = simulate_pet(&mut ctx, &mut clock, &config).unwrap();

        assert_eq!(summary.final_energy, 100);
        assert_eq!(summary.final_mood, Mood::Playful);
    }

    #[test]
    fn test_simulate_pet_literal_flags_zero_ticks() {
        let mut ctx = with_duration(0);
        let mut clock = VirtualClock::new();

        let summary = simulate_pet(&mut ctx, &mut clock, &SimulationConfig::default()).unwrap();

        assert_eq!(summary.final_mood, Mood::Hungry);
    }

    #[test]
    fn test_simulate_pet_missing_parameter() {
        let mut ctx = Capture::default();
        let mut clock = VirtualClock::new();
        let err = simulate_pet(&mut ctx, &mut clock, &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, PetError::MissingParameter(ref n) if n == RUN_DURATION));
    }

    #[test]
    fn test_simulate_pet_rejects_blank_name() {
        let mut ctx = with_duration(1);
        let mut clock = VirtualClock::new();
        let config = SimulationConfig::new().with_pet_name("");
        let err = simulate_pet(&mut ctx, &mut clock, &config).unwrap_err();
        assert!(matches!(err, PetError::InvalidConfig(_)));
        assert!(ctx.lines.is_empty());
    }
}
