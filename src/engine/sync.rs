// SPDX-License-Identifier: MIT

//! Change detection and the top-level notification boundary.

use crate::bindings::BindingStore;
use crate::engine::cascade::reset_downstream;
use crate::engine::projector::project;
use crate::errors::SyncError;
use crate::host::DashboardHost;
use crate::observability::messages::cascade::CascadeStarted;
use crate::observability::messages::engine::{
    EventSuppressed, FilterNotBound, ParameterUpdateFailed, SyncCycleFailed,
};
use crate::observability::messages::StructuredLog;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// A host notification that the named filter's selection changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChangedEvent {
    pub filter: String,
}

impl FilterChangedEvent {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

/// The cascading synchronization engine.
///
/// One engine serves one dashboard. Change notifications enter through
/// [`SyncEngine::on_filter_changed`]; everything the engine does in
/// response is asynchronous, individually fallible and fully absorbed,
/// so the host's event dispatch can never be destabilized by a failed
/// cycle.
///
/// Reentrancy is handled by a single-permit semaphore held for the whole
/// span of a cycle, from accepting the event until every downstream
/// write has been joined. An event arriving while the permit is held is
/// dropped, not queued: the in-flight cascade resets everything
/// downstream to a known neutral state, which supersedes whatever the
/// dropped event would have reported.
pub struct SyncEngine {
    host: Arc<dyn DashboardHost>,
    store: Arc<dyn BindingStore>,
    cascade_gate: Semaphore,
}

impl SyncEngine {
    pub fn new(host: Arc<dyn DashboardHost>, store: Arc<dyn BindingStore>) -> Self {
        Self {
            host,
            store,
            cascade_gate: Semaphore::new(1),
        }
    }

    /// Handle one filter-changed notification.
    ///
    /// Never returns an error: failures are logged and absorbed here.
    /// The permit is released on every exit path when `_permit` drops,
    /// so the gate cannot remain stuck after a failed cycle.
    pub async fn on_filter_changed(&self, event: FilterChangedEvent) {
        let _permit = match self.cascade_gate.try_acquire() {
            Ok(permit) => permit,
            Err(_) => {
                EventSuppressed {
                    filter: &event.filter,
                }
                .log();
                return;
            }
        };

        if let Err(e) = self.handle(&event).await {
            SyncCycleFailed {
                filter: &event.filter,
                error: &e,
            }
            .log();
        }
    }

    /// Consume filter-changed notifications from a channel, one at a
    /// time, until the sending side closes.
    pub async fn run(&self, mut events: mpsc::UnboundedReceiver<FilterChangedEvent>) {
        while let Some(event) = events.recv().await {
            self.on_filter_changed(event).await;
        }
    }

    async fn handle(&self, event: &FilterChangedEvent) -> Result<(), SyncError> {
        // The store is the single source of truth, read fresh per event;
        // a stale sequence across a reconfiguration would cascade over
        // the wrong positions.
        let bindings = self.store.load().await?;

        let Some((position, binding)) = bindings.lookup(&event.filter) else {
            FilterNotBound {
                filter: &event.filter,
            }
            .log();
            return Ok(());
        };

        let state = self.host.filter_state(&event.filter).await?;
        let value = project(&state)?;

        if let Err(e) = self.host.set_parameter(&binding.param, &value).await {
            // The pair silently fails to update; downstream bindings are
            // still stale and must be reset regardless.
            ParameterUpdateFailed {
                filter: &event.filter,
                param: &binding.param,
                error: &e,
            }
            .log();
        }

        let from = position + 1;
        CascadeStarted {
            filter: &event.filter,
            from,
            binding_count: bindings.tail(from).len(),
        }
        .log();
        reset_downstream(self.host.as_ref(), self.store.as_ref(), from).await;

        Ok(())
    }
}
