//! Fixture defaults and loading tests for user-double-config.
// crates/user-double-config/tests/fixture_defaults.rs
// =============================================================================
// Module: Fixture Defaults and Loading Tests
// Description: Validate default fixture behavior and file loading.
// Purpose: Ensure the empty fixture is valid and loaded state reaches the fake.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;

use user_double_config::UserFixture;
use user_double_core::RestrictionKey;
use user_double_core::UserHandle;
use user_double_core::UserId;
use user_double_core::UserService;

/// A fixture covering every section of the format.
const FULL_FIXTURE: &str = r#"
quiet_mode = true
user_switcher = true
base_restrictions = ["no_modify_accounts"]
managed_profiles = [10]
profile_ids_with_disabled = [0, 10]

[[users]]
id = 0
name = "owner"

[[profiles]]
id = 10
name = "work"
enabled = false

[[restriction_sources]]
restriction = "no_config_tethering"
user = 10
enforcers = [{ user = 0, authority = "device_owner" }]
"#;

/// Verifies the default fixture validates and builds an empty fake.
#[test]
fn default_fixture_builds_empty_fake() {
    let fixture = UserFixture::default();
    fixture.validate().unwrap();

    let fake = fixture.build();
    assert!(fake.user_info(UserId::SYSTEM).is_none());
    assert!(fake.profiles(UserId::SYSTEM).is_empty());
    assert!(!fake.is_quiet_mode_enabled(UserHandle::of(UserId::SYSTEM)));
    assert!(!fake.is_user_switcher_enabled());
}

/// Verifies the empty TOML document parses to the default fixture.
#[test]
fn empty_document_is_default_fixture() {
    let fixture: UserFixture = toml::from_str("").unwrap();
    assert_eq!(fixture, UserFixture::default());
}

/// Verifies a full fixture loads from disk and scripts the fake.
#[test]
fn full_fixture_loads_and_scripts_fake() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user-double.toml");
    fs::write(&path, FULL_FIXTURE).unwrap();

    let fixture = UserFixture::load(Some(&path)).unwrap();
    let fake = fixture.build();

    let owner = fake.user_info(UserId::SYSTEM).unwrap();
    assert_eq!(owner.name, "owner");
    assert!(owner.enabled);

    assert_eq!(fake.profile_ids(UserId::SYSTEM, true), vec![UserId::new(10)]);
    let work = fake.profiles(UserId::SYSTEM).remove(0);
    assert!(!work.enabled);

    let key = RestrictionKey::new("no_modify_accounts");
    assert!(fake.has_base_restriction(&key, UserHandle::of(UserId::new(10))));

    let tether = RestrictionKey::new("no_config_tethering");
    let sources = fake.restriction_sources(&tether, UserHandle::of(UserId::new(10)));
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].user.identifier(), UserId::SYSTEM);

    assert!(fake.is_managed_profile(UserId::new(10)));
    assert!(fake.is_quiet_mode_enabled(UserHandle::of(UserId::SYSTEM)));
    assert!(fake.is_user_switcher_enabled());
    assert_eq!(
        fake.profile_ids_with_disabled(UserId::SYSTEM),
        vec![UserId::SYSTEM, UserId::new(10)]
    );
}

/// Verifies apply leaves previously scripted state in place.
#[test]
fn apply_is_additive() {
    let fake = user_double_core::FakeUserService::new();
    fake.add_profile(user_double_core::UserRecord::new(UserId::new(3), "existing"));

    let fixture: UserFixture = toml::from_str(
        r#"
        [[profiles]]
        id = 4
        name = "added"
        "#,
    )
    .unwrap();
    fixture.validate().unwrap();
    fixture.apply(&fake);

    assert_eq!(fake.profile_ids(UserId::SYSTEM, true), vec![UserId::new(3), UserId::new(4)]);
}

/// Verifies loading a missing file reports an I/O error.
#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = UserFixture::load(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("fixture io error"));
}
