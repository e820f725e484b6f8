// SPDX-License-Identifier: MIT

mod binding;
mod settings;
mod store;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use binding::{Binding, BindingSet};
pub use settings::{FileSettings, InMemorySettings, SettingsStore};
pub use store::{BindingStore, SettingsBindingStore};
