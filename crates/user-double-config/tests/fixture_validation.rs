//! Fixture validation tests for user-double-config.
// crates/user-double-config/tests/fixture_validation.rs
// =============================================================================
// Module: Fixture Validation Tests
// Description: Validate fail-closed behavior for malformed fixtures.
// Purpose: Ensure invalid fixture data never reaches the fake.
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

use user_double_config::FixtureError;
use user_double_config::UserFixture;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), FixtureError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid fixture".to_string()),
    }
}

fn parse(content: &str) -> Result<UserFixture, String> {
    toml::from_str(content).map_err(|err| err.to_string())
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "users = [[").unwrap();
    let err = UserFixture::load(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("fixture parse error"));
}

#[test]
fn oversized_file_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.toml");
    // One comment line past the 64 KiB limit.
    let padding = format!("# {}\n", "x".repeat(64 * 1024));
    fs::write(&path, padding).unwrap();
    let err = UserFixture::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("size limit"));
}

#[test]
fn duplicate_user_id_is_invalid() -> TestResult {
    let fixture = parse(
        r#"
        [[users]]
        id = 7
        name = "alice"

        [[users]]
        id = 7
        name = "bob"
        "#,
    )?;
    assert_invalid(fixture.validate(), "users contains duplicate id 7")
}

#[test]
fn duplicate_profile_id_is_invalid() -> TestResult {
    let fixture = parse(
        r#"
        [[profiles]]
        id = 3
        name = "first"

        [[profiles]]
        id = 3
        name = "again"
        "#,
    )?;
    assert_invalid(fixture.validate(), "profiles contains duplicate id 3")
}

#[test]
fn empty_restriction_key_is_invalid() -> TestResult {
    let fixture = parse(r#"base_restrictions = ["  "]"#)?;
    assert_invalid(fixture.validate(), "base_restrictions key must be non-empty")
}

#[test]
fn overlong_restriction_key_is_invalid() -> TestResult {
    let key = "k".repeat(129);
    let fixture = parse(&format!("base_restrictions = [\"{key}\"]"))?;
    assert_invalid(fixture.validate(), "base_restrictions key exceeds max length")
}

#[test]
fn duplicate_restriction_source_pair_is_invalid() -> TestResult {
    let fixture = parse(
        r#"
        [[restriction_sources]]
        restriction = "no_add_user"
        user = 10

        [[restriction_sources]]
        restriction = "no_add_user"
        user = 10
        "#,
    )?;
    assert_invalid(fixture.validate(), "duplicate pair (no_add_user, 10)")
}

#[test]
fn same_restriction_for_different_users_is_valid() -> TestResult {
    let fixture = parse(
        r#"
        [[restriction_sources]]
        restriction = "no_add_user"
        user = 10

        [[restriction_sources]]
        restriction = "no_add_user"
        user = 11
        "#,
    )?;
    fixture.validate().map_err(|err| err.to_string())
}

#[test]
fn duplicate_managed_profile_is_invalid() -> TestResult {
    let fixture = parse("managed_profiles = [10, 10]")?;
    assert_invalid(fixture.validate(), "managed_profiles contains duplicate id 10")
}

#[test]
fn overlong_user_name_is_invalid() -> TestResult {
    let name = "n".repeat(257);
    let fixture = parse(&format!(
        "[[users]]\nid = 0\nname = \"{name}\"\n"
    ))?;
    assert_invalid(fixture.validate(), "users name exceeds max length")
}

#[test]
fn unknown_authority_is_parse_failure() {
    let result = parse(
        r#"
        [[restriction_sources]]
        restriction = "no_add_user"
        user = 10
        enforcers = [{ user = 0, authority = "janitor" }]
        "#,
    );
    assert!(result.is_err());
}
