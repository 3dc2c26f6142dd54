use std::ffi::OsStr;
use std::path::Path;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use serde_json::Value;
use thingd::interfaces::{SqliteOpener, StoreOpener};

mod stubs;

use stubs::fixtures;

fn thingd(config_dir: impl AsRef<OsStr>) -> Command {
    let mut cmd = Command::cargo_bin("thingd").unwrap();
    cmd.env("THINGD_CONFIG_DIR", config_dir)
        .env_remove("THINGD_DEVICE_DB")
        .env_remove("THINGD_CLOUD_DB")
        .env_remove("THINGD_CREDENTIALS_DB");
    cmd
}

fn populate(config_dir: &Path) {
    let device = SqliteOpener.open(&config_dir.join("device.db")).unwrap();
    fixtures::write_device(&device);
    device.close().unwrap();
    let cloud = SqliteOpener.open(&config_dir.join("cloud.db")).unwrap();
    fixtures::write_cloud(&cloud);
    cloud.close().unwrap();
}

fn check_assert(config_dir: &Path) -> Assert {
    thingd(config_dir).arg("check").assert()
}

fn check_output(config_dir: &Path) -> Value {
    let assert = check_assert(config_dir).success();
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn check_prints_assembled_thing() {
    let tempdir = tempfile::tempdir().unwrap();
    populate(tempdir.path());

    let thing = check_output(tempdir.path());
    assert_eq!(thing["name"], fixtures::THING_NAME);
    assert_eq!(thing["data_items"]["2"]["schema"]["value_type"], 2);
    assert_eq!(thing["data_items"]["1"]["event"]["time_sec"], 30);
    // secrets are not printed
    assert!(thing["cloud"].get("user_token").is_none());
}

#[test]
fn check_fails_on_invalid_item() {
    let tempdir = tempfile::tempdir().unwrap();
    populate(tempdir.path());

    thingd(tempdir.path())
        .args(["kvs-set", "device", "DataItem_1", "BitSize", "16"])
        .assert()
        .success();

    check_assert(tempdir.path())
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("DataItem_1"));
}

#[test]
fn kvs_set_and_get_string_value() {
    let tempdir = tempfile::tempdir().unwrap();

    thingd(tempdir.path())
        .args(["kvs-set", "cloud", "Cloud", "BrokerUrl", "amqp://localhost"])
        .assert()
        .success();
    thingd(tempdir.path())
        .args(["kvs-get", "cloud", "Cloud", "BrokerUrl"])
        .assert()
        .success()
        .stdout("amqp://localhost");
}

#[test]
fn kvs_get_unset_value_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    thingd(tempdir.path())
        .args(["kvs-get", "device", "Thing", "Name"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No value set for key 'Thing/Name'"));
}

#[test]
fn credentials_round_trip_through_cli() {
    let tempdir = tempfile::tempdir().unwrap();
    populate(tempdir.path());

    thingd(tempdir.path())
        .args(["store-credentials", fixtures::THING_ID, fixtures::THING_TOKEN])
        .assert()
        .success();
    let thing = check_output(tempdir.path());
    assert_eq!(thing["credentials"]["thing_id"], fixtures::THING_ID);

    thingd(tempdir.path())
        .arg("clear-credentials")
        .assert()
        .success();
    let thing = check_output(tempdir.path());
    assert!(thing["credentials"]["thing_id"].is_null());
}

#[test]
fn unknown_subcommand_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    thingd(tempdir.path())
        .arg("register")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subcommand must be one of"));
}
