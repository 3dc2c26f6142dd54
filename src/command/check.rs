use anyhow::Result;

use thingd::interfaces::SqliteOpener;
use thingd::thing_mgmt::{create_thing, StandardCatalog, ThingSettings};

/// Assemble the thing from the configured stores and print it as JSON
pub fn check() -> Result<()> {
    let settings = ThingSettings::from_env();
    log::debug!("Reading configuration from {settings:?}");
    let thing = create_thing(&SqliteOpener, &settings, &StandardCatalog)?;
    if !thing.credentials.is_registered() {
        log::info!("Thing '{}' has no credentials yet", thing.name);
    }
    println!("{}", serde_json::to_string_pretty(&thing)?);
    Ok(())
}
