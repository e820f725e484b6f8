// SPDX-License-Identifier: MIT

//! Message types for downstream reset events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A cascade is about to reset every binding at `from` and after.
///
/// # Log Level
/// `info!` - one per accepted change event with downstream bindings.
pub struct CascadeStarted<'a> {
    pub filter: &'a str,
    pub from: usize,
    pub binding_count: usize,
}

impl Display for CascadeStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Filter '{}' changed: resetting {} downstream binding(s) from position {}",
            self.filter, self.binding_count, self.from
        )
    }
}

impl StructuredLog for CascadeStarted<'_> {
    fn log(&self) {
        tracing::info!(
            filter = self.filter,
            from = self.from,
            binding_count = self.binding_count,
            "{}", self
        );
    }
}

/// All downstream writes of a cascade have been issued and joined.
///
/// # Log Level
/// `debug!` - completion bookkeeping; failures were already logged
/// per item.
pub struct CascadeCompleted {
    pub from: usize,
    pub binding_count: usize,
}

impl Display for CascadeCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cascade from position {} completed: {} binding(s) reset",
            self.from, self.binding_count
        )
    }
}

impl StructuredLog for CascadeCompleted {
    fn log(&self) {
        tracing::debug!(
            from = self.from,
            binding_count = self.binding_count,
            "{}", self
        );
    }
}

/// A downstream parameter could not be reset to the sentinel value.
///
/// # Log Level
/// `warn!` - per-item; sibling resets in the same cascade proceed.
pub struct ParameterResetFailed<'a> {
    pub param: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ParameterResetFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parameter '{}' could not be reset: {}",
            self.param, self.error
        )
    }
}

impl StructuredLog for ParameterResetFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            param = self.param,
            error = %self.error,
            "{}", self
        );
    }
}

/// A filter clear was rejected by one worksheet.
///
/// # Log Level
/// `debug!` - expected for every worksheet that does not carry the
/// filter; the clear is attempted on all of them.
pub struct FilterClearFailed<'a> {
    pub worksheet: &'a str,
    pub filter: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FilterClearFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worksheet '{}' rejected clearing filter '{}': {}",
            self.worksheet, self.filter, self.error
        )
    }
}

impl StructuredLog for FilterClearFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            worksheet = self.worksheet,
            filter = self.filter,
            error = %self.error,
            "{}", self
        );
    }
}

/// The pair store snapshot at cascade start could not be read.
///
/// # Log Level
/// `error!` - the cascade is abandoned; nothing downstream was touched.
pub struct CascadeSnapshotFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for CascadeSnapshotFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not snapshot bindings at cascade start: {}",
            self.error
        )
    }
}

impl StructuredLog for CascadeSnapshotFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }
}

/// Worksheet enumeration failed; filter clears are skipped for this
/// cascade while parameter resets still run.
///
/// # Log Level
/// `warn!`
pub struct WorksheetEnumerationFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for WorksheetEnumerationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not enumerate worksheets; skipping filter clears: {}",
            self.error
        )
    }
}

impl StructuredLog for WorksheetEnumerationFailed<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }
}
