// SPDX-License-Identifier: MIT

//! Structured logging for the synchronization engine.
//!
//! All diagnostic output goes through message types implementing
//! `Display` plus the `StructuredLog` trait, keeping log strings out of
//! the engine code and the field names consistent.
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - change detection and cycle-level events
//! * `messages::cascade` - downstream reset events

pub mod messages;
