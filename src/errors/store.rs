// SPDX-License-Identifier: MIT

//! Errors for loading and replacing the persisted binding sequence.

use crate::errors::BindingValidationError;
use thiserror::Error;

/// Errors that can occur while reading or writing the pair store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The settings backend could not be read or written
    #[error("settings backend failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted blob is not a valid binding sequence
    #[error("stored bindings are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A stored or proposed sequence violates the uniqueness invariant
    #[error(transparent)]
    Invalid(#[from] BindingValidationError),
}
