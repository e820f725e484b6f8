// SPDX-License-Identifier: MIT

use std::sync::Arc;

use filter_cascade::authoring::{self, AuthoringCatalog};
use filter_cascade::bindings::{Binding, BindingStore, InMemorySettings, SettingsBindingStore};
use filter_cascade::engine::{FilterChangedEvent, SyncEngine};
use filter_cascade::host::{FilterState, HostCall, MockDashboard};
use tracing_subscriber::EnvFilter;

/// Scripted walkthrough of the engine against an in-memory dashboard:
/// author the Region -> District -> Team bindings, then replay the
/// filter changes a user would make and show every write the cascade
/// issues.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = Arc::new(
        MockDashboard::new()
            .with_worksheet("Overview")
            .with_worksheet("Detail")
            .with_filter("Region", FilterState::Selected(vec!["East".to_string()]))
            .with_filter("District", FilterState::Selected(vec!["North".to_string()]))
            .with_filter_on("Detail", "Team", FilterState::Selected(vec!["Alpha".to_string()]))
            .with_parameter("REGION")
            .with_parameter("DISTRICT")
            .with_parameter("TEAM"),
    );
    let store: Arc<dyn BindingStore> =
        Arc::new(SettingsBindingStore::new(Arc::new(InMemorySettings::new())));

    println!("🔗 filter-cascade demo");
    println!("══════════════════════");

    let catalog = AuthoringCatalog::collect(host.as_ref()).await?;
    println!("Available filters:    {:?}", catalog.filters);
    println!("Available parameters: {:?}", catalog.parameters);

    authoring::save_bindings(
        store.as_ref(),
        vec![
            Binding::new("Region", "REGION"),
            Binding::new("District", "DISTRICT"),
            Binding::new("Team", "TEAM"),
        ],
    )
    .await?;
    println!("Bindings: Region→REGION, District→DISTRICT, Team→TEAM");

    let engine = SyncEngine::new(host.clone(), store);

    run_step(&engine, &host, "User selects Region = [\"East\"]", "Region").await;

    host.set_filter_state("Region", FilterState::AllSelected);
    run_step(&engine, &host, "User selects Region = (All)", "Region").await;

    host.set_filter_state("Team", FilterState::Selected(vec!["Bravo".to_string()]));
    run_step(&engine, &host, "User selects Team = [\"Bravo\"]", "Team").await;

    println!("\n🎉 Done");
    Ok(())
}

async fn run_step(engine: &SyncEngine, host: &MockDashboard, label: &str, filter: &str) {
    println!("\n▶ {}", label);
    host.clear_calls();
    engine
        .on_filter_changed(FilterChangedEvent::new(filter))
        .await;

    for call in host.calls() {
        match call {
            HostCall::SetParameter { param, value } => {
                println!("   parameter {:10} ← \"{}\"", param, value);
            }
            HostCall::ClearFilter { worksheet, filter } => {
                println!("   clear     {:10} on worksheet '{}'", filter, worksheet);
            }
        }
    }
}
