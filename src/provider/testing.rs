//! Scripted mechanism doubles for unit tests
//!
//! Both doubles record every call so tests can assert the skip-if-installed
//! invariant (installed entries must never reach a mechanism).

use std::collections::HashMap;

use super::{CapabilityProvider, FallbackInstaller, MechanismError};
use crate::domain::CapabilityRecord;

#[derive(Default)]
pub struct ScriptedProvider {
    pub records: Vec<CapabilityRecord>,
    /// When set, `query` fails with this text
    pub query_failure: Option<String>,
    /// Ids whose `add` fails, with the error text to return
    pub add_failures: HashMap<String, String>,
    pub add_calls: Vec<String>,
}

impl ScriptedProvider {
    pub fn with_records(records: Vec<CapabilityRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn fail_add(mut self, id: &str, message: &str) -> Self {
        self.add_failures.insert(id.to_string(), message.to_string());
        self
    }
}

impl CapabilityProvider for ScriptedProvider {
    fn query(&self) -> Result<Vec<CapabilityRecord>, MechanismError> {
        match &self.query_failure {
            Some(message) => Err(MechanismError::new(message.clone())),
            None => Ok(self.records.clone()),
        }
    }

    fn add(&mut self, id: &str) -> Result<(), MechanismError> {
        self.add_calls.push(id.to_string());
        match self.add_failures.get(id) {
            Some(message) => Err(MechanismError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct ScriptedFallback {
    /// Ids whose `run` fails, with the error text to return
    pub failures: HashMap<String, String>,
    pub calls: Vec<String>,
}

impl ScriptedFallback {
    pub fn fail(mut self, id: &str, message: &str) -> Self {
        self.failures.insert(id.to_string(), message.to_string());
        self
    }
}

impl FallbackInstaller for ScriptedFallback {
    fn run(&mut self, id: &str) -> Result<(), MechanismError> {
        self.calls.push(id.to_string());
        match self.failures.get(id) {
            Some(message) => Err(MechanismError::new(message.clone())),
            None => Ok(()),
        }
    }
}
