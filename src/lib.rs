// SPDX-License-Identifier: MIT

pub mod authoring;     // catalog + load/save surface for the config dialog
pub mod bindings;      // pair store + persistence
pub mod engine;        // change detection, projection, cascade
pub mod errors;        // error handling
pub mod host;          // dashboard platform seam
pub mod observability;
