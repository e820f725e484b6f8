// SPDX-License-Identifier: MIT

//! Message types for change detection and cycle-level events.

use crate::errors::SyncError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A filter-changed notification arrived while a cascade was in flight
/// and was dropped.
///
/// # Log Level
/// `debug!` - expected during every cascade; the cascade's own resets
/// supersede the dropped event's information.
pub struct EventSuppressed<'a> {
    pub filter: &'a str,
}

impl Display for EventSuppressed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dropped change event for filter '{}': a cascade is in flight",
            self.filter
        )
    }
}

impl StructuredLog for EventSuppressed<'_> {
    fn log(&self) {
        tracing::debug!(filter = self.filter, "{}", self);
    }
}

/// A changed filter has no binding and the event is a no-op.
///
/// # Log Level
/// `trace!` - routine for every unbound filter on the dashboard.
pub struct FilterNotBound<'a> {
    pub filter: &'a str,
}

impl Display for FilterNotBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Filter '{}' has no bound parameter", self.filter)
    }
}

impl StructuredLog for FilterNotBound<'_> {
    fn log(&self) {
        tracing::trace!(filter = self.filter, "{}", self);
    }
}

/// The parameter write mirroring the changed filter was rejected.
///
/// # Log Level
/// `warn!` - the pair silently fails to update; the cascade continues.
pub struct ParameterUpdateFailed<'a> {
    pub filter: &'a str,
    pub param: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ParameterUpdateFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not update parameter '{}' from filter '{}': {}",
            self.param, self.filter, self.error
        )
    }
}

impl StructuredLog for ParameterUpdateFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            filter = self.filter,
            param = self.param,
            error = %self.error,
            "{}", self
        );
    }
}

/// A synchronization cycle failed before its cascade was issued.
///
/// # Log Level
/// `error!` - absorbed here; never propagated to the host event loop.
pub struct SyncCycleFailed<'a> {
    pub filter: &'a str,
    pub error: &'a SyncError,
}

impl Display for SyncCycleFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Synchronization cycle for filter '{}' failed: {}",
            self.filter, self.error
        )
    }
}

impl StructuredLog for SyncCycleFailed<'_> {
    fn log(&self) {
        tracing::error!(
            filter = self.filter,
            error = %self.error,
            "{}", self
        );
    }
}
