use anyhow::{anyhow, Result};

use thingd::interfaces::SqliteOpener;
use thingd::thing_mgmt::{self, create_thing, StandardCatalog, Thing, ThingSettings};

use crate::argsets::StoreCredentialsArgs;

fn load_thing(settings: &ThingSettings) -> Result<Thing> {
    Ok(create_thing(&SqliteOpener, settings, &StandardCatalog)?)
}

pub fn store_credentials(args: StoreCredentialsArgs) -> Result<()> {
    let settings = ThingSettings::from_env();
    let mut thing = load_thing(&settings)?;
    if let Some(id) = thing.id() {
        log::warn!("Replacing credentials of thing {id}");
    }
    thing_mgmt::store_credentials(
        &SqliteOpener,
        &settings.credentials_path,
        &mut thing,
        &args.id,
        &args.token,
    )?;
    Ok(())
}

pub fn clear_credentials() -> Result<()> {
    let settings = ThingSettings::from_env();
    let mut thing = load_thing(&settings)?;
    let cleared = thing_mgmt::clear_credentials(&SqliteOpener, &settings.credentials_path, &mut thing)?;
    if !cleared.is_complete() {
        return Err(anyhow!("Credentials only partially cleared: {cleared:?}"));
    }
    log::info!("Credentials cleared");
    Ok(())
}
