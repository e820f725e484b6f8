// SPDX-License-Identifier: MIT

//! Errors raised inside one synchronization cycle.
//!
//! Nothing in this module escapes the engine's top-level notification
//! handler; every variant is absorbed and logged there so the host
//! platform's event dispatch is never destabilized.

use crate::errors::StoreError;
use thiserror::Error;

/// Failures reported by the host dashboard platform
#[derive(Debug, Error)]
pub enum HostError {
    /// No parameter with this name exists in the dashboard
    #[error("parameter '{0}' was not found in the dashboard")]
    ParameterNotFound(String),

    /// The named worksheet does not carry this filter
    #[error("worksheet '{worksheet}' has no filter '{filter}'")]
    FilterNotFound { worksheet: String, filter: String },

    /// No filter with this name exists in the dashboard
    #[error("filter '{0}' was not found in the dashboard")]
    UnknownFilter(String),

    /// Any other platform-side failure
    #[error("host platform call failed: {0}")]
    Platform(String),
}

/// The value projector could not derive a parameter value
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The filter reports an empty selection that is not "all selected".
    /// No value is guessed and no parameter write is attempted.
    #[error("filter selection state is neither 'all' nor a non-empty value list")]
    UnknownSelectionState,
}

/// Failure of a single synchronization cycle
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to load bindings: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("host read failed: {0}")]
    Host(#[from] HostError),
}
