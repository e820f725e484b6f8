// SPDX-License-Identifier: MIT

mod dashboard;
mod mock;

pub use dashboard::{DashboardHost, FilterState, ParameterValue};
pub use mock::{HostCall, MockDashboard};
