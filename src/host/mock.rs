// SPDX-License-Identifier: MIT

//! Scriptable in-memory dashboard used by the integration tests and the
//! demo binary where a real platform is absent. Records every write so
//! tests can assert exactly what a cascade touched.

use crate::errors::HostError;
use crate::host::{DashboardHost, FilterState, ParameterValue};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// One recorded write against the mock platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetParameter { param: String, value: String },
    ClearFilter { worksheet: String, filter: String },
}

#[derive(Default)]
struct MockState {
    filter_states: HashMap<String, FilterState>,
    parameter_values: HashMap<String, String>,
    calls: Vec<HostCall>,
}

/// In-memory `DashboardHost` with scripted contents and a write log.
#[derive(Default)]
pub struct MockDashboard {
    worksheets: Vec<String>,
    filters: Vec<String>,
    parameters: Vec<String>,
    /// (worksheet, filter) pairs that exist; clears elsewhere are rejected.
    placements: HashSet<(String, String)>,
    failing_parameters: HashSet<String>,
    state: Mutex<MockState>,
    /// When present, every `set_parameter` consumes one permit first.
    /// Tests use a zero-permit semaphore to hold a cascade in flight.
    write_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worksheet(mut self, name: impl Into<String>) -> Self {
        self.worksheets.push(name.into());
        self
    }

    /// Declare a filter and place it on every worksheet declared so far.
    pub fn with_filter(mut self, name: impl Into<String>, state: FilterState) -> Self {
        let name = name.into();
        for worksheet in &self.worksheets {
            self.placements.insert((worksheet.clone(), name.clone()));
        }
        self.state
            .get_mut()
            .unwrap()
            .filter_states
            .insert(name.clone(), state);
        self.filters.push(name);
        self
    }

    /// Declare a filter present only on the named worksheet.
    pub fn with_filter_on(
        mut self,
        worksheet: impl Into<String>,
        name: impl Into<String>,
        state: FilterState,
    ) -> Self {
        let name = name.into();
        self.placements.insert((worksheet.into(), name.clone()));
        self.state
            .get_mut()
            .unwrap()
            .filter_states
            .insert(name.clone(), state);
        self.filters.push(name);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    /// Make `set_parameter` fail for this name while still logging the
    /// attempt, mimicking a parameter the platform rejects.
    pub fn with_failing_parameter(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.failing_parameters.insert(name.clone());
        self.parameters.push(name);
        self
    }

    pub fn gate_parameter_writes(&self, gate: Arc<Semaphore>) {
        *self.write_gate.lock().unwrap() = Some(gate);
    }

    pub fn ungate_parameter_writes(&self) {
        *self.write_gate.lock().unwrap() = None;
    }

    pub fn set_filter_state(&self, filter: &str, state: FilterState) {
        self.state
            .lock()
            .unwrap()
            .filter_states
            .insert(filter.to_string(), state);
    }

    /// Every write recorded so far, in arrival order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Last successfully written value of a parameter, if any.
    pub fn parameter_value(&self, param: &str) -> Option<String> {
        self.state.lock().unwrap().parameter_values.get(param).cloned()
    }
}

#[async_trait]
impl DashboardHost for MockDashboard {
    async fn filters(&self) -> Result<Vec<String>, HostError> {
        Ok(self.filters.clone())
    }

    async fn parameters(&self) -> Result<Vec<String>, HostError> {
        Ok(self.parameters.clone())
    }

    async fn worksheets(&self) -> Result<Vec<String>, HostError> {
        Ok(self.worksheets.clone())
    }

    async fn filter_state(&self, filter: &str) -> Result<FilterState, HostError> {
        self.state
            .lock()
            .unwrap()
            .filter_states
            .get(filter)
            .cloned()
            .ok_or_else(|| HostError::UnknownFilter(filter.to_string()))
    }

    async fn set_parameter(&self, param: &str, value: &ParameterValue) -> Result<(), HostError> {
        let gate = self.write_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            // Held until the test releases a permit; the permit is spent.
            gate.acquire()
                .await
                .map_err(|_| HostError::Platform("write gate closed".to_string()))?
                .forget();
        }

        let mut state = self.state.lock().unwrap();
        state.calls.push(HostCall::SetParameter {
            param: param.to_string(),
            value: value.as_str().to_string(),
        });

        if !self.parameters.iter().any(|p| p == param) {
            return Err(HostError::ParameterNotFound(param.to_string()));
        }
        if self.failing_parameters.contains(param) {
            return Err(HostError::Platform(format!(
                "parameter '{}' rejected the write",
                param
            )));
        }
        state
            .parameter_values
            .insert(param.to_string(), value.as_str().to_string());
        Ok(())
    }

    async fn clear_filter(&self, worksheet: &str, filter: &str) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(HostCall::ClearFilter {
            worksheet: worksheet.to_string(),
            filter: filter.to_string(),
        });

        if !self
            .placements
            .contains(&(worksheet.to_string(), filter.to_string()))
        {
            return Err(HostError::FilterNotFound {
                worksheet: worksheet.to_string(),
                filter: filter.to_string(),
            });
        }
        state
            .filter_states
            .insert(filter.to_string(), FilterState::AllSelected);
        Ok(())
    }
}
