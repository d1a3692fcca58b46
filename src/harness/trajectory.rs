//! Named parameter store, optionally loaded from TOML
//!
//! ```toml
//! name = "pet_sim"
//!
//! [parameters]
//! run_duration = 10
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::ParamValue;
use crate::core::error::{PetError, Result};

/// Trajectory name used when a TOML file does not give one
pub const DEFAULT_TRAJECTORY: &str = "pet_sim";

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    name: String,
    parameters: BTreeMap<String, ParamValue>,
}

#[derive(Deserialize)]
struct TrajectoryFile {
    name: Option<String>,
    #[serde(default)]
    parameters: BTreeMap<String, toml::Value>,
}

impl Trajectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a new parameter; names can only be added once
    pub fn add_parameter(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        if self.parameters.contains_key(name) {
            return Err(PetError::DuplicateParameter(name.to_string()));
        }
        self.parameters.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Replace the value of a parameter that was already added
    pub fn set_parameter(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        match self.parameters.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(PetError::MissingParameter(name.to_string())),
        }
    }

    pub fn parameter(&self, name: &str) -> Result<&ParamValue> {
        self.parameters
            .get(name)
            .ok_or_else(|| PetError::MissingParameter(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn parameters(&self) -> &BTreeMap<String, ParamValue> {
        &self.parameters
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TrajectoryFile = toml::from_str(content)?;
        let mut trajectory =
            Trajectory::new(file.name.unwrap_or_else(|| DEFAULT_TRAJECTORY.to_string()));

        for (name, value) in file.parameters {
            let value = match value {
                toml::Value::Integer(v) => ParamValue::Int(v),
                toml::Value::Float(v) => ParamValue::Float(v),
                toml::Value::Boolean(v) => ParamValue::Bool(v),
                toml::Value::String(v) => ParamValue::Text(v),
                other => {
                    return Err(PetError::InvalidParameter {
                        name,
                        reason: format!("unsupported TOML type {}", other.type_str()),
                    })
                }
            };
            trajectory.parameters.insert(name, value);
        }

        Ok(trajectory)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let trajectory = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded trajectory {} with {} parameters from {:?}",
            trajectory.name,
            trajectory.parameters.len(),
            path
        );
        Ok(trajectory)
    }
}
