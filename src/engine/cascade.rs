// SPDX-License-Identifier: MIT

//! Downstream reset fan-out.
//!
//! A value change at binding `i` invalidates any assumption that
//! selections downstream of it are still meaningful (a "Region" change
//! invalidates a previously selected "District"), so every binding at
//! `i+1..` is restored to its neutral state: parameter back to the `All`
//! sentinel, filter cleared on every worksheet.

use crate::bindings::{Binding, BindingStore};
use crate::host::{DashboardHost, ParameterValue};
use crate::observability::messages::cascade::{
    CascadeCompleted, CascadeSnapshotFailed, FilterClearFailed, ParameterResetFailed,
    WorksheetEnumerationFailed,
};
use crate::observability::messages::StructuredLog;
use futures::future::join_all;

/// Reset every binding at position >= `from` to its neutral state.
///
/// Takes a fresh snapshot of the pair store; the store may have changed
/// since the triggering event was observed, which is acceptable under
/// the engine's consistency model. All resets are issued as one fan-out
/// and joined before returning, so the caller's reentrancy permit spans
/// every write. Individual failures are logged and never abort sibling
/// resets; nothing is retried.
pub(crate) async fn reset_downstream(
    host: &dyn DashboardHost,
    store: &dyn BindingStore,
    from: usize,
) {
    let bindings = match store.load().await {
        Ok(bindings) => bindings,
        Err(e) => {
            CascadeSnapshotFailed { error: &e }.log();
            return;
        }
    };

    let downstream = bindings.tail(from);
    if downstream.is_empty() {
        return;
    }

    let worksheets = match host.worksheets().await {
        Ok(worksheets) => worksheets,
        Err(e) => {
            WorksheetEnumerationFailed { error: &e }.log();
            Vec::new()
        }
    };

    // Parameter resets and filter clears are independent per binding and
    // unordered across bindings; both fan-outs are joined together.
    let parameter_resets = join_all(downstream.iter().map(|b| reset_parameter(host, b)));
    let filter_clears = join_all(
        downstream
            .iter()
            .map(|b| clear_filter_everywhere(host, b, &worksheets)),
    );
    tokio::join!(parameter_resets, filter_clears);

    CascadeCompleted {
        from,
        binding_count: downstream.len(),
    }
    .log();
}

async fn reset_parameter(host: &dyn DashboardHost, binding: &Binding) {
    if let Err(e) = host.set_parameter(&binding.param, &ParameterValue::All).await {
        ParameterResetFailed {
            param: &binding.param,
            error: &e,
        }
        .log();
    }
}

/// Attempt the clear on every worksheet; worksheets without the filter
/// reject it, which is expected and only logged.
async fn clear_filter_everywhere(
    host: &dyn DashboardHost,
    binding: &Binding,
    worksheets: &[String],
) {
    for worksheet in worksheets {
        if let Err(e) = host.clear_filter(worksheet, &binding.filter).await {
            FilterClearFailed {
                worksheet,
                filter: &binding.filter,
                error: &e,
            }
            .log();
        }
    }
}
