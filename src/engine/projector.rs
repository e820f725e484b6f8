// SPDX-License-Identifier: MIT

use crate::errors::ProjectionError;
use crate::host::{FilterState, ParameterValue};

/// Compute the value a parameter should take for a filter's current
/// selection.
///
/// Rules, in order:
/// 1. "all selected" projects to the `All` sentinel.
/// 2. A non-empty selection projects to its **first** value. Collapsing
///    multi-value selections to their first element is a deliberate,
///    documented policy, not an accident of indexing.
/// 3. An empty selection that is not "all" is unrecognized: an error is
///    returned and no value is guessed.
pub fn project(state: &FilterState) -> Result<ParameterValue, ProjectionError> {
    match state {
        FilterState::AllSelected => Ok(ParameterValue::All),
        FilterState::Selected(values) => match values.first() {
            Some(first) => Ok(ParameterValue::Single(first.clone())),
            None => Err(ProjectionError::UnknownSelectionState),
        },
    }
}
