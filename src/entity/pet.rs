//! The pet and the rule that turns its energy into a mood

use crate::core::config::InitialFlags;

/// Energy a new pet starts with
pub const INITIAL_ENERGY: i64 = 100;
/// Energy lost on every update
pub const ENERGY_DECAY: i64 = 10;
/// Hungry while energy is strictly below this
pub const HUNGRY_BELOW: i64 = 50;
/// Sleepy while energy is strictly below this
pub const SLEEPY_BELOW: i64 = 30;
/// Playful while energy is strictly above this
pub const PLAYFUL_ABOVE: i64 = 40;

/// What the pet shows to the outside world
///
/// Derived from the flags on every read; the pet itself never stores one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Sleepy,
    Hungry,
    Playful,
    Content,
}

impl Mood {
    pub fn message(self) -> &'static str {
        match self {
            Mood::Sleepy => "😴 Zzz... I'm super sleepy!",
            Mood::Hungry => "🍽️ Feed me please! My tummy's rumbling!",
            Mood::Playful => "🐾 Let\u{2019}s play! I\u{2019}m full of energy!",
            Mood::Content => "😌 I'm chilling and feeling alright.",
        }
    }
}

/// One named pet and its mood-relevant counters
///
/// `hungry`, `sleepy` and `playful` overlap freely (energy 25 is both sleepy
/// and hungry). [`Pet::mood`] is the only place that picks between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    name: String,
    /// No floor: keeps falling below zero on long runs
    energy: i64,
    hungry: bool,
    sleepy: bool,
    playful: bool,
}

impl Pet {
    /// Full energy with the literal starting flags (hungry and playful)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            energy: INITIAL_ENERGY,
            hungry: true,
            sleepy: false,
            playful: true,
        }
    }

    /// Full energy with flags computed by the same formulas as [`Pet::update`]
    pub fn with_derived_flags(name: impl Into<String>) -> Self {
        let mut pet = Self::new(name);
        pet.recompute_flags();
        pet
    }

    pub fn with_initial_flags(name: impl Into<String>, flags: InitialFlags) -> Self {
        match flags {
            InitialFlags::Literal => Self::new(name),
            InitialFlags::Derived => Self::with_derived_flags(name),
        }
    }

    /// Advance one tick: lose energy, then recompute every flag
    pub fn update(&mut self) {
        self.energy = self.energy.saturating_sub(ENERGY_DECAY);
        self.recompute_flags();
    }

    fn recompute_flags(&mut self) {
        self.hungry = self.energy < HUNGRY_BELOW;
        self.sleepy = self.energy < SLEEPY_BELOW;
        self.playful = self.energy > PLAYFUL_ABOVE;
    }

    /// Resolve the overlapping flags: sleepy, then hungry, then playful
    pub fn mood(&self) -> Mood {
        if self.sleepy {
            Mood::Sleepy
        } else if self.hungry {
            Mood::Hungry
        } else if self.playful {
            Mood::Playful
        } else {
            Mood::Content
        }
    }

    pub fn render_mood(&self) -> &'static str {
        self.mood().message()
    }

    /// `<name> says: <mood message>`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> i64 {
        self.energy
    }

    pub fn is_hungry(&self) -> bool {
        self.hungry
    }

    pub fn is_sleepy(&self) -> bool {
        self.sleepy
    }

    pub fn is_playful(&self) -> bool {
        self.playful
    }
}

impl std::fmt::Display for Pet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} says: {}", self.name, self.render_mood())
    }
}
