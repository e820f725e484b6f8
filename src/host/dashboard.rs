// SPDX-License-Identifier: MIT

use crate::bindings::consts::PARAMETER_ALL_VALUE;
use crate::errors::HostError;
use async_trait::async_trait;
use std::fmt;

/// Live selection state of a filter. Owned by the host platform and
/// read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterState {
    /// The filter imposes no constraint ("all" selected).
    AllSelected,
    /// The ordered values currently selected. An empty list here is an
    /// unrecognized state, not "all"; the projector refuses it.
    Selected(Vec<String>),
}

/// Value the engine writes to a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// The application sentinel meaning "no active filter constraint".
    All,
    Single(String),
}

impl ParameterValue {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterValue::All => PARAMETER_ALL_VALUE,
            ParameterValue::Single(value) => value,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seam to the host dashboard platform.
///
/// All operations are asynchronous and individually fallible; the engine
/// treats every failure as non-fatal and per-item. Names are the stable
/// identifiers the platform exposes for filters, parameters and
/// worksheets.
#[async_trait]
pub trait DashboardHost: Send + Sync {
    /// All filter names across the dashboard and its worksheets. May
    /// contain duplicates when a filter appears on several worksheets.
    async fn filters(&self) -> Result<Vec<String>, HostError>;

    /// All parameter names across the dashboard and its worksheets.
    async fn parameters(&self) -> Result<Vec<String>, HostError>;

    /// Stable names of the dashboard's worksheets.
    async fn worksheets(&self) -> Result<Vec<String>, HostError>;

    /// Read a filter's current selection state.
    async fn filter_state(&self, filter: &str) -> Result<FilterState, HostError>;

    /// Set a parameter's value by name. Fails if the parameter does not
    /// exist in the dashboard.
    async fn set_parameter(&self, param: &str, value: &ParameterValue) -> Result<(), HostError>;

    /// Clear a filter by name on one worksheet, restoring its default
    /// state. Fails for worksheets that do not carry the filter.
    async fn clear_filter(&self, worksheet: &str, filter: &str) -> Result<(), HostError>;
}
