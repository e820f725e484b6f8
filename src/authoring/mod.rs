// SPDX-License-Identifier: MIT

//! Interface for the configuration-authoring dialog.
//!
//! The dialog itself is external; this module gives it the three things
//! it needs: the catalog of filter and parameter names it can offer, the
//! current binding sequence for redisplay, and a save operation that
//! enforces the uniqueness precondition before anything is committed.

use crate::bindings::{Binding, BindingSet, BindingStore};
use crate::errors::{HostError, StoreError};
use crate::host::DashboardHost;

/// Filter and parameter names available for pairing, deduplicated across
/// the dashboard and its worksheets while preserving first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringCatalog {
    pub filters: Vec<String>,
    pub parameters: Vec<String>,
}

impl AuthoringCatalog {
    pub async fn collect(host: &dyn DashboardHost) -> Result<Self, HostError> {
        Ok(Self {
            filters: dedup_preserving_order(host.filters().await?),
            parameters: dedup_preserving_order(host.parameters().await?),
        })
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// The current binding sequence, in cascade order, for redisplay.
pub async fn load_bindings(store: &dyn BindingStore) -> Result<Vec<Binding>, StoreError> {
    Ok(store.load().await?.into_vec())
}

/// Validate and commit an authored sequence.
///
/// A duplicate filter key is rejected here, before any persisted state
/// changes; the engine downstream never sees an invalid sequence.
pub async fn save_bindings(
    store: &dyn BindingStore,
    pairs: Vec<Binding>,
) -> Result<(), StoreError> {
    let validated = BindingSet::new(pairs)?;
    store.replace(validated).await
}
