//! Run orchestration: invoke a simulation once and persist what it emitted

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ParamValue, RunContext, Trajectory};
use crate::core::error::{PetError, Result};
use crate::core::types::RunId;

/// Where (and whether) the run log goes
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// `None` keeps the log in memory only
    pub filename: Option<PathBuf>,
    /// Replace an existing log instead of refusing to run
    pub overwrite_file: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            filename: Some(PathBuf::from("pet_data.json")),
            overwrite_file: true,
        }
    }
}

/// Persisted log of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: RunId,
    pub trajectory: String,
    pub parameters: BTreeMap<String, ParamValue>,
    pub lines: Vec<String>,
}

/// What [`Environment::run`] hands back
#[derive(Debug)]
pub struct RunOutcome<T> {
    pub value: T,
    pub record: RunRecord,
}

pub struct Environment<W: Write = io::Stdout> {
    config: EnvironmentConfig,
    trajectory: Trajectory,
    out: W,
}

impl Environment<io::Stdout> {
    /// Environment that prints to stdout
    pub fn with_trajectory(trajectory: Trajectory, config: EnvironmentConfig) -> Self {
        Self::with_output(trajectory, config, io::stdout())
    }
}

impl<W: Write> Environment<W> {
    pub fn with_output(trajectory: Trajectory, config: EnvironmentConfig, out: W) -> Self {
        Self {
            config,
            trajectory,
            out,
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn trajectory_mut(&mut self) -> &mut Trajectory {
        &mut self.trajectory
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Invoke `simulation` exactly once, then write the run log
    ///
    /// An existing log with overwrite disabled fails before `simulation`
    /// runs. A failing simulation leaves no log behind.
    pub fn run<T, F>(&mut self, simulation: F) -> Result<RunOutcome<T>>
    where
        F: FnOnce(&mut dyn RunContext) -> Result<T>,
    {
        if let Some(path) = &self.config.filename {
            if path.exists() {
                if !self.config.overwrite_file {
                    return Err(PetError::ResultExists(path.clone()));
                }
                tracing::warn!("Overwriting existing run log {:?}", path);
            }
        }

        let run_id = RunId::new();
        tracing::info!(
            "Starting run {} of trajectory {}",
            run_id,
            self.trajectory.name()
        );

        let mut ctx = EnvironmentContext {
            trajectory: &self.trajectory,
            out: &mut self.out,
            lines: Vec::new(),
        };
        let value = simulation(&mut ctx)?;
        let lines = ctx.lines;
        self.out.flush()?;

        let record = RunRecord {
            run_id,
            trajectory: self.trajectory.name().to_string(),
            parameters: self.trajectory.parameters().clone(),
            lines,
        };

        if let Some(path) = &self.config.filename {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &record)?;
            writer.flush()?;
            tracing::info!("Stored run {} in {:?}", run_id, path);
        }

        Ok(RunOutcome { value, record })
    }
}

struct EnvironmentContext<'a, W: Write> {
    trajectory: &'a Trajectory,
    out: &'a mut W,
    lines: Vec<String>,
}

impl<W: Write> RunContext for EnvironmentContext<'_, W> {
    fn read_parameter(&self, name: &str) -> Result<ParamValue> {
        self.trajectory.parameter(name).cloned()
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.lines.push(line.to_string());
        Ok(())
    }
}
