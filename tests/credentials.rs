use std::path::{Path, PathBuf};

use thingd::constants::keys;
use thingd::interfaces::{ConfigStore, MemStore};
use thingd::thing_mgmt::{
    clear_credentials, create_thing, store_credentials, ConfigError, StandardCatalog, Thing,
    ThingSettings,
};

mod stubs;

use stubs::fixtures;
use stubs::flaky::FlakyOpener;

const NEW_ID: &str = "8d7c0a44-51f3-4a3e-b1a2-0c9e7d6f5b43";
const NEW_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

fn settings() -> ThingSettings {
    ThingSettings {
        device_path: PathBuf::from("device.db"),
        cloud_path: PathBuf::from("cloud.db"),
        credentials_path: PathBuf::from("credentials.db"),
    }
}

fn setup() -> (FlakyOpener, MemStore, Thing) {
    let opener = FlakyOpener::default();
    let settings = settings();
    fixtures::write_device(&opener.stores.store(&settings.device_path));
    fixtures::write_cloud(&opener.stores.store(&settings.cloud_path));
    let credentials = opener.stores.store(&settings.credentials_path);
    fixtures::write_credentials(&credentials);
    let thing = create_thing(&opener, &settings, &StandardCatalog).unwrap();
    (opener, credentials, thing)
}

fn stored(store: &MemStore, key: &str) -> Option<String> {
    store.read_string(keys::CREDENTIALS_GROUP, key).unwrap()
}

fn credentials_path() -> PathBuf {
    settings().credentials_path
}

#[test]
fn stored_credentials_are_read_back() {
    let (opener, credentials, mut thing) = setup();
    store_credentials(&opener, &credentials_path(), &mut thing, NEW_ID, NEW_TOKEN).unwrap();

    assert_eq!(stored(&credentials, keys::THING_ID).as_deref(), Some(NEW_ID));
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(NEW_TOKEN));
    let reread = create_thing(&opener, &settings(), &StandardCatalog).unwrap();
    assert_eq!(reread.id(), Some(NEW_ID));
    assert_eq!(reread.credentials, thing.credentials);
}

#[test]
fn failed_id_write_erases_token() {
    let (opener, credentials, mut thing) = setup();
    opener.failing.fail(keys::THING_ID);

    let err = store_credentials(&opener, &credentials_path(), &mut thing, NEW_ID, NEW_TOKEN)
        .unwrap_err();
    match err {
        ConfigError::WriteFailed { key, .. } => assert_eq!(key, keys::THING_ID),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(""));
    assert_eq!(stored(&credentials, keys::THING_ID).as_deref(), Some(fixtures::THING_ID));
    // the thing follows the store: old id, no token
    assert_eq!(thing.id(), Some(fixtures::THING_ID));
    assert_eq!(thing.token(), None);
    let reread = create_thing(&opener, &settings(), &StandardCatalog).unwrap();
    assert_eq!(reread.credentials, thing.credentials);
}

#[test]
fn failed_rollback_is_reported() {
    let (opener, credentials, mut thing) = setup();
    opener.failing.fail(keys::THING_ID);
    opener.failing.fail_after_next(keys::THING_TOKEN);

    let err = store_credentials(&opener, &credentials_path(), &mut thing, NEW_ID, NEW_TOKEN)
        .unwrap_err();
    assert!(
        matches!(err, ConfigError::CompensationFailed { .. }),
        "{err:?}"
    );
    // the new token could not be taken back
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(NEW_TOKEN));
    assert_eq!(thing.token(), Some(fixtures::THING_TOKEN));
}

#[test]
fn failed_token_write_leaves_store_untouched() {
    let (opener, credentials, mut thing) = setup();
    opener.failing.fail(keys::THING_TOKEN);

    let err = store_credentials(&opener, &credentials_path(), &mut thing, NEW_ID, NEW_TOKEN)
        .unwrap_err();
    assert!(matches!(err, ConfigError::WriteFailed { .. }), "{err:?}");
    assert_eq!(stored(&credentials, keys::THING_ID).as_deref(), Some(fixtures::THING_ID));
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(fixtures::THING_TOKEN));
}

#[test]
fn clear_erases_both() {
    let (opener, credentials, mut thing) = setup();
    let cleared = clear_credentials(&opener, &credentials_path(), &mut thing).unwrap();
    assert!(cleared.is_complete());
    assert_eq!(stored(&credentials, keys::THING_ID).as_deref(), Some(""));
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(""));
    assert!(!thing.credentials.is_registered());

    let reread = create_thing(&opener, &settings(), &StandardCatalog).unwrap();
    assert_eq!(reread.id(), None);
}

#[test]
fn clear_reports_each_half() {
    let (opener, credentials, mut thing) = setup();
    opener.failing.fail(keys::THING_TOKEN);

    let cleared = clear_credentials(&opener, Path::new("credentials.db"), &mut thing).unwrap();
    assert!(!cleared.token_erased);
    assert!(cleared.id_erased);
    assert_eq!(stored(&credentials, keys::THING_TOKEN).as_deref(), Some(fixtures::THING_TOKEN));
    assert_eq!(thing.token(), Some(fixtures::THING_TOKEN));
    assert_eq!(thing.id(), None);
}
