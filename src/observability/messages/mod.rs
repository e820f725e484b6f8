// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a small struct carrying the fields of one loggable
//! event. `Display` renders the human-readable line; `StructuredLog::log`
//! emits it through `tracing` with the same fields attached, at the level
//! appropriate for the event.

pub mod cascade;
pub mod engine;

/// Emit a message through `tracing` with structured fields.
pub trait StructuredLog {
    fn log(&self);
}
