// SPDX-License-Identifier: MIT

use crate::bindings::consts::PAIRS_SETTINGS_KEY;
use crate::bindings::{Binding, BindingSet, SettingsStore};
use crate::errors::StoreError;
use async_trait::async_trait;
use std::sync::Arc;

/// The pair store: the single source of truth for the binding sequence.
///
/// Consulted fresh on every change event and at the start of every
/// cascade; implementations must never serve a cached sequence across a
/// reconfiguration.
#[async_trait]
pub trait BindingStore: Send + Sync {
    /// Load the current binding sequence. Missing configuration loads as
    /// the empty set.
    async fn load(&self) -> Result<BindingSet, StoreError>;

    /// Replace the whole sequence. Uniqueness was already enforced when
    /// the `BindingSet` was constructed, before this commit point.
    async fn replace(&self, bindings: BindingSet) -> Result<(), StoreError>;
}

/// Pair store persisting the ordered sequence as a JSON blob of
/// `{filter, param}` records under the single `pairs` settings key.
pub struct SettingsBindingStore {
    settings: Arc<dyn SettingsStore>,
}

impl SettingsBindingStore {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl BindingStore for SettingsBindingStore {
    async fn load(&self) -> Result<BindingSet, StoreError> {
        match self.settings.get(PAIRS_SETTINGS_KEY).await? {
            Some(blob) => {
                let pairs: Vec<Binding> = serde_json::from_str(&blob)?;
                Ok(BindingSet::new(pairs)?)
            }
            None => Ok(BindingSet::empty()),
        }
    }

    async fn replace(&self, bindings: BindingSet) -> Result<(), StoreError> {
        let blob = serde_json::to_string(bindings.as_slice())?;
        self.settings.set(PAIRS_SETTINGS_KEY, blob).await
    }
}
