//! Experiment harness around a pet run
//!
//! The simulation only ever sees a [`RunContext`]. [`Trajectory`] stores the
//! parameters and [`Environment`] invokes the run once and persists its log.

pub mod environment;
pub mod trajectory;

pub use environment::{Environment, EnvironmentConfig, RunOutcome, RunRecord};
pub use trajectory::Trajectory;

use serde::{Deserialize, Serialize};

use crate::core::error::{PetError, Result};

/// Parameter the harness reads before the run starts
pub const RUN_DURATION: &str = "run_duration";
/// Value `run_duration` takes when nobody sets it
pub const DEFAULT_RUN_DURATION: i64 = 10;

/// A single stored parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Text(_) => "string",
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Everything a simulation may ask of the harness while it runs
pub trait RunContext {
    fn read_parameter(&self, name: &str) -> Result<ParamValue>;

    /// Publish one line of observable output
    fn emit(&mut self, line: &str) -> Result<()>;

    fn int_parameter(&self, name: &str) -> Result<i64> {
        let value = self.read_parameter(name)?;
        value.as_int().ok_or_else(|| PetError::InvalidParameter {
            name: name.to_string(),
            reason: format!("expected integer, found {}", value.type_name()),
        })
    }
}
