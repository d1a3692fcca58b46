pub mod pet;

pub use pet::{Mood, Pet};
