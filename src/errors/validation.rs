// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while validating a proposed binding sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingValidationError {
    /// The same filter appears in more than one binding
    DuplicateFilterKey {
        /// The filter name that appears more than once
        filter: String,
    },
}

impl fmt::Display for BindingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingValidationError::DuplicateFilterKey { filter } => {
                write!(
                    f,
                    "Filter '{}' is bound more than once; a filter may drive at most one parameter",
                    filter
                )
            }
        }
    }
}

impl std::error::Error for BindingValidationError {}
