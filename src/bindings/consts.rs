// SPDX-License-Identifier: MIT

/// Settings key the serialized binding sequence is stored under.
pub const PAIRS_SETTINGS_KEY: &str = "pairs";

/// Sentinel parameter value meaning "no active filter constraint".
pub const PARAMETER_ALL_VALUE: &str = "All";
