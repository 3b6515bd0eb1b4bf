// crates/user-double-config/src/fixture.rs
// ============================================================================
// Module: User Fixture
// Description: Fixture loading and validation for the user-service fake.
// Purpose: Provide strict, fail-closed fixture parsing with hard limits.
// Dependencies: user-double-core, serde, toml
// ============================================================================

//! ## Overview
//! A fixture is a TOML file describing the canned state a test wants the
//! user-service fake to answer with: user records, profiles, restrictions,
//! and feature flags. Missing fields default to empty so the empty fixture
//! is valid; anything malformed or oversized fails closed before state
//! reaches the fake.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use user_double_core::EnforcingUser;
use user_double_core::FakeUserService;
use user_double_core::RestrictionKey;
use user_double_core::UserHandle;
use user_double_core::UserId;
use user_double_core::UserRecord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default fixture filename when no path is specified.
const DEFAULT_FIXTURE_NAME: &str = "user-double.toml";
/// Environment variable used to override the fixture path.
pub(crate) const FIXTURE_ENV_VAR: &str = "USER_DOUBLE_FIXTURE";
/// Maximum fixture file size in bytes.
pub(crate) const MAX_FIXTURE_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of user entries.
pub(crate) const MAX_USERS: usize = 1024;
/// Maximum number of profile entries.
pub(crate) const MAX_PROFILES: usize = 1024;
/// Maximum number of base restriction keys.
pub(crate) const MAX_RESTRICTIONS: usize = 256;
/// Maximum number of restriction source entries.
pub(crate) const MAX_RESTRICTION_SOURCES: usize = 256;
/// Maximum number of enforcers per restriction source entry.
pub(crate) const MAX_ENFORCERS_PER_SOURCE: usize = 32;
/// Maximum length of a user or profile name.
pub(crate) const MAX_NAME_LENGTH: usize = 256;
/// Maximum length of a restriction key.
pub(crate) const MAX_RESTRICTION_KEY_LENGTH: usize = 128;

// ============================================================================
// SECTION: Fixture Model
// ============================================================================

/// Enforcing users recorded for one (restriction, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionSourceEntry {
    /// Restriction key the enforcers apply to.
    pub restriction: RestrictionKey,
    /// User the restriction is recorded against.
    pub user: UserId,
    /// Enforcing users, in the order callers should observe them.
    #[serde(default)]
    pub enforcers: Vec<EnforcingUser>,
}

/// Canned state for the user-service fake.
///
/// Every field defaults to empty or false, so `UserFixture::default()` and
/// the empty TOML document describe a freshly reset fake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    /// User records keyed by their own `id` field.
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// Global profile list in the order queries should return it.
    #[serde(default)]
    pub profiles: Vec<UserRecord>,
    /// Keys registered as base restrictions.
    #[serde(default)]
    pub base_restrictions: Vec<RestrictionKey>,
    /// Enforcing users per (restriction, user) pair.
    #[serde(default)]
    pub restriction_sources: Vec<RestrictionSourceEntry>,
    /// Users flagged as managed profiles.
    #[serde(default)]
    pub managed_profiles: Vec<UserId>,
    /// Global quiet-mode flag.
    #[serde(default)]
    pub quiet_mode: bool,
    /// Global user-switcher flag.
    #[serde(default)]
    pub user_switcher: bool,
    /// Scripted profile id list that includes disabled profiles.
    #[serde(default)]
    pub profile_ids_with_disabled: Vec<UserId>,
}

impl UserFixture {
    /// Loads a fixture from the given path or the environment default.
    ///
    /// The path resolves from the argument, then the `USER_DOUBLE_FIXTURE`
    /// environment variable, then `user-double.toml` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, FixtureError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| FixtureError::Io(err.to_string()))?;
        if bytes.len() > MAX_FIXTURE_FILE_SIZE {
            return Err(FixtureError::Invalid("fixture file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| FixtureError::Invalid("fixture file must be utf-8".to_string()))?;
        let fixture: Self =
            toml::from_str(content).map_err(|err| FixtureError::Parse(err.to_string()))?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Validates the fixture for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the fixture is invalid.
    pub fn validate(&self) -> Result<(), FixtureError> {
        self.validate_users()?;
        self.validate_profiles()?;
        self.validate_restrictions()?;
        self.validate_restriction_sources()?;
        self.validate_managed_profiles()?;
        if self.profile_ids_with_disabled.len() > MAX_PROFILES {
            return Err(FixtureError::Invalid(
                "profile_ids_with_disabled exceeds max entries".to_string(),
            ));
        }
        Ok(())
    }

    /// Scripts an existing fake with this fixture's state.
    ///
    /// Existing scripted state is left in place; call
    /// [`FakeUserService::reset`] first when a clean slate is wanted.
    pub fn apply(&self, fake: &FakeUserService) {
        for record in &self.users {
            fake.set_user_info(record.id, record.clone());
        }
        for record in &self.profiles {
            fake.add_profile(record.clone());
        }
        for key in &self.base_restrictions {
            fake.add_base_restriction(key.clone());
        }
        for entry in &self.restriction_sources {
            fake.set_restriction_sources(
                &entry.restriction,
                UserHandle::of(entry.user),
                entry.enforcers.clone(),
            );
        }
        for user in &self.managed_profiles {
            fake.add_managed_profile(*user);
        }
        fake.set_quiet_mode_enabled(self.quiet_mode);
        fake.set_user_switcher_enabled(self.user_switcher);
        fake.set_profile_ids_with_disabled(self.profile_ids_with_disabled.clone());
    }

    /// Builds a freshly scripted fake from this fixture.
    #[must_use]
    pub fn build(&self) -> FakeUserService {
        let fake = FakeUserService::new();
        self.apply(&fake);
        fake
    }

    /// Validates user entries.
    fn validate_users(&self) -> Result<(), FixtureError> {
        if self.users.len() > MAX_USERS {
            return Err(FixtureError::Invalid("users exceeds max entries".to_string()));
        }
        let mut seen: Vec<UserId> = Vec::with_capacity(self.users.len());
        for record in &self.users {
            validate_name("users", &record.name)?;
            if seen.contains(&record.id) {
                return Err(FixtureError::Invalid(format!(
                    "users contains duplicate id {}",
                    record.id
                )));
            }
            seen.push(record.id);
        }
        Ok(())
    }

    /// Validates profile entries.
    fn validate_profiles(&self) -> Result<(), FixtureError> {
        if self.profiles.len() > MAX_PROFILES {
            return Err(FixtureError::Invalid("profiles exceeds max entries".to_string()));
        }
        let mut seen: Vec<UserId> = Vec::with_capacity(self.profiles.len());
        for record in &self.profiles {
            validate_name("profiles", &record.name)?;
            if seen.contains(&record.id) {
                return Err(FixtureError::Invalid(format!(
                    "profiles contains duplicate id {}",
                    record.id
                )));
            }
            seen.push(record.id);
        }
        Ok(())
    }

    /// Validates base restriction keys.
    fn validate_restrictions(&self) -> Result<(), FixtureError> {
        if self.base_restrictions.len() > MAX_RESTRICTIONS {
            return Err(FixtureError::Invalid("base_restrictions exceeds max entries".to_string()));
        }
        for key in &self.base_restrictions {
            validate_restriction_key("base_restrictions", key)?;
        }
        Ok(())
    }

    /// Validates restriction source entries.
    fn validate_restriction_sources(&self) -> Result<(), FixtureError> {
        if self.restriction_sources.len() > MAX_RESTRICTION_SOURCES {
            return Err(FixtureError::Invalid(
                "restriction_sources exceeds max entries".to_string(),
            ));
        }
        let mut seen: Vec<(&str, UserId)> = Vec::with_capacity(self.restriction_sources.len());
        for entry in &self.restriction_sources {
            validate_restriction_key("restriction_sources", &entry.restriction)?;
            if entry.enforcers.len() > MAX_ENFORCERS_PER_SOURCE {
                return Err(FixtureError::Invalid(format!(
                    "restriction_sources entry for {} exceeds max enforcers",
                    entry.restriction
                )));
            }
            let pair = (entry.restriction.as_str(), entry.user);
            if seen.contains(&pair) {
                return Err(FixtureError::Invalid(format!(
                    "restriction_sources contains duplicate pair ({}, {})",
                    entry.restriction, entry.user
                )));
            }
            seen.push(pair);
        }
        Ok(())
    }

    /// Validates the managed-profile list.
    fn validate_managed_profiles(&self) -> Result<(), FixtureError> {
        if self.managed_profiles.len() > MAX_USERS {
            return Err(FixtureError::Invalid("managed_profiles exceeds max entries".to_string()));
        }
        let mut seen: Vec<UserId> = Vec::with_capacity(self.managed_profiles.len());
        for user in &self.managed_profiles {
            if seen.contains(user) {
                return Err(FixtureError::Invalid(format!(
                    "managed_profiles contains duplicate id {user}"
                )));
            }
            seen.push(*user);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fixture loading or validation errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// I/O failure while reading the fixture.
    #[error("fixture io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("fixture parse error: {0}")]
    Parse(String),
    /// Invalid fixture data.
    #[error("invalid fixture: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the fixture path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, FixtureError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(FIXTURE_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(FixtureError::Invalid("fixture path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_FIXTURE_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), FixtureError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(FixtureError::Invalid("fixture path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(FixtureError::Invalid("fixture path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a user or profile name against length limits.
fn validate_name(field: &str, name: &str) -> Result<(), FixtureError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(FixtureError::Invalid(format!("{field} name exceeds max length")));
    }
    Ok(())
}

/// Validates a restriction key for emptiness and length.
fn validate_restriction_key(field: &str, key: &RestrictionKey) -> Result<(), FixtureError> {
    let trimmed = key.as_str().trim();
    if trimmed.is_empty() {
        return Err(FixtureError::Invalid(format!("{field} key must be non-empty")));
    }
    if key.as_str().len() > MAX_RESTRICTION_KEY_LENGTH {
        return Err(FixtureError::Invalid(format!("{field} key exceeds max length")));
    }
    Ok(())
}
