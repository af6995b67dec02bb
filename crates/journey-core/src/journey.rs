//! The journey document: an ordered list of stops with their checkpoint
//! labels.

use crate::checkpoints::CheckpointTable;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Journey {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Checkpoint label shown before the first stop is reached.
    #[serde(default)]
    pub start_label: Option<String>,
    pub stops: Vec<Stop>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Stop {
    pub id: String,
    /// Short milestone name; defaults to the title.
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Stop {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.title)
    }
}

impl Journey {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let journey: Journey = toml::from_str(raw).context("Journey document is not valid TOML")?;
        journey.validate()?;
        Ok(journey)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stops.is_empty() {
            bail!("Journey '{}' has no stops", self.title);
        }
        let mut seen = HashSet::new();
        for (idx, stop) in self.stops.iter().enumerate() {
            if stop.id.trim().is_empty() {
                bail!("Stop #{} has an empty id", idx + 1);
            }
            if !seen.insert(stop.id.as_str()) {
                bail!("Duplicate stop id '{}'", stop.id);
            }
        }
        Ok(())
    }

    pub fn checkpoint_table(&self, fallback_start_label: &str) -> CheckpointTable {
        let start = self
            .start_label
            .as_deref()
            .unwrap_or(fallback_start_label);
        self.stops
            .iter()
            .fold(CheckpointTable::new(start), |table, stop| {
                table.with_label(stop.id.clone(), stop.label())
            })
    }
}
