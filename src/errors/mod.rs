// SPDX-License-Identifier: MIT

mod store;
mod sync;
mod validation;

pub use store::StoreError;
pub use sync::{HostError, ProjectionError, SyncError};
pub use validation::BindingValidationError;
