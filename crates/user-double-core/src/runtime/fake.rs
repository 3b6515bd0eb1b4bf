// crates/user-double-core/src/runtime/fake.rs
// ============================================================================
// Module: Scriptable User-Service Fake
// Description: In-memory user-service implementation scripted by tests.
// Purpose: Provide deterministic canned answers behind the UserService trait.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides the scriptable in-memory implementation of
//! [`UserService`] used by test harnesses. Tests script state through the
//! setter methods, hand the fake (or a clone sharing the same state) to the
//! code under test, and call [`FakeUserService::reset`] between cases. It is
//! not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::core::EnforcingUser;
use crate::core::RestrictionKey;
use crate::core::UserHandle;
use crate::core::UserId;
use crate::core::UserRecord;
use crate::interfaces::UserService;

// ============================================================================
// SECTION: Scripted State
// ============================================================================

/// Mutable state scripted by tests.
#[derive(Debug, Default)]
struct FakeState {
    /// Sparse map of user records keyed by user identifier.
    users: BTreeMap<UserId, UserRecord>,
    /// Global profile list in insertion order.
    profiles: Vec<UserRecord>,
    /// Keys registered as base restrictions, in insertion order.
    base_restrictions: Vec<RestrictionKey>,
    /// Enforcing users keyed by (restriction key, user identifier).
    restriction_sources: BTreeMap<String, Vec<EnforcingUser>>,
    /// User identifiers flagged as managed profiles.
    managed_profiles: BTreeSet<UserId>,
    /// Global quiet-mode flag.
    quiet_mode_enabled: bool,
    /// Scripted profile id list that includes disabled profiles.
    profile_ids_with_disabled: Vec<UserId>,
    /// Global user-switcher flag.
    user_switcher_enabled: bool,
}

// ============================================================================
// SECTION: Fake User Service
// ============================================================================

/// Scriptable in-memory user service for tests.
///
/// Clones share the same underlying state: a test keeps one handle for
/// scripting and assertions while the code under test holds another.
#[derive(Debug, Default, Clone)]
pub struct FakeUserService {
    /// Scripted state protected by a mutex.
    state: Arc<Mutex<FakeState>>,
}

impl FakeUserService {
    /// Creates a fake with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the scripted state.
    ///
    /// Queries are infallible by contract, and scripted state stays valid
    /// even when another holder panicked, so a poisoned lock is recovered
    /// rather than propagated.
    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores or overwrites the record for a user.
    pub fn set_user_info(&self, user: UserId, record: UserRecord) {
        self.state().users.insert(user, record);
    }

    /// Appends a profile record to the global profile list.
    pub fn add_profile(&self, record: UserRecord) {
        self.state().profiles.push(record);
    }

    /// Registers a key as a base restriction.
    pub fn add_base_restriction(&self, key: RestrictionKey) {
        self.state().base_restrictions.push(key);
    }

    /// Records the enforcing users for a (key, user) pair.
    pub fn set_restriction_sources(
        &self,
        key: &RestrictionKey,
        user: UserHandle,
        enforcers: Vec<EnforcingUser>,
    ) {
        self.state().restriction_sources.insert(source_key(key, user), enforcers);
    }

    /// Flags a user as a managed profile.
    pub fn add_managed_profile(&self, user: UserId) {
        self.state().managed_profiles.insert(user);
    }

    /// Sets the global quiet-mode flag.
    pub fn set_quiet_mode_enabled(&self, enabled: bool) {
        self.state().quiet_mode_enabled = enabled;
    }

    /// Scripts the profile id list that includes disabled profiles.
    pub fn set_profile_ids_with_disabled(&self, ids: Vec<UserId>) {
        self.state().profile_ids_with_disabled = ids;
    }

    /// Sets the global user-switcher flag.
    pub fn set_user_switcher_enabled(&self, enabled: bool) {
        self.state().user_switcher_enabled = enabled;
    }

    /// Clears all collections and flags to their defaults.
    ///
    /// Test harnesses call this between cases so state never leaks from one
    /// test into the next.
    pub fn reset(&self) {
        let mut guard = self.state();
        *guard = FakeState::default();
    }
}

impl UserService for FakeUserService {
    fn user_info(&self, user: UserId) -> Option<UserRecord> {
        self.state().users.get(&user).cloned()
    }

    fn profiles(&self, _user: UserId) -> Vec<UserRecord> {
        self.state().profiles.clone()
    }

    fn profile_ids(&self, _user: UserId, _enabled_only: bool) -> Vec<UserId> {
        self.state().profiles.iter().map(|record| record.id).collect()
    }

    fn user_profiles(&self) -> Vec<UserHandle> {
        self.profile_ids(UserId::SYSTEM, true).into_iter().map(UserHandle::of).collect()
    }

    fn credential_owner_profile(&self, user: UserId) -> UserId {
        user
    }

    fn has_base_restriction(&self, key: &RestrictionKey, _user: UserHandle) -> bool {
        self.state().base_restrictions.contains(key)
    }

    fn restriction_sources(&self, key: &RestrictionKey, user: UserHandle) -> Vec<EnforcingUser> {
        self.state().restriction_sources.get(&source_key(key, user)).cloned().unwrap_or_default()
    }

    fn is_managed_profile(&self, user: UserId) -> bool {
        self.state().managed_profiles.contains(&user)
    }

    fn is_quiet_mode_enabled(&self, _user: UserHandle) -> bool {
        self.state().quiet_mode_enabled
    }

    fn profile_ids_with_disabled(&self, _user: UserId) -> Vec<UserId> {
        self.state().profile_ids_with_disabled.clone()
    }

    fn is_user_switcher_enabled(&self) -> bool {
        self.state().user_switcher_enabled
    }
}

// ============================================================================
// SECTION: Shared Service Wrapper
// ============================================================================

/// Shared user service backed by an `Arc` trait object.
///
/// This is the injection seam: test harnesses wrap whichever implementation
/// they scripted and pass the wrapper to the code under test.
#[derive(Clone)]
pub struct SharedUserService {
    /// Inner service implementation.
    inner: Arc<dyn UserService + Send + Sync>,
}

impl SharedUserService {
    /// Wraps a user service in a shared, clonable wrapper.
    #[must_use]
    pub fn from_service(service: impl UserService + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    /// Wraps an existing shared service.
    #[must_use]
    pub const fn new(service: Arc<dyn UserService + Send + Sync>) -> Self {
        Self {
            inner: service,
        }
    }
}

impl UserService for SharedUserService {
    fn user_info(&self, user: UserId) -> Option<UserRecord> {
        self.inner.user_info(user)
    }

    fn profiles(&self, user: UserId) -> Vec<UserRecord> {
        self.inner.profiles(user)
    }

    fn profile_ids(&self, user: UserId, enabled_only: bool) -> Vec<UserId> {
        self.inner.profile_ids(user, enabled_only)
    }

    fn user_profiles(&self) -> Vec<UserHandle> {
        self.inner.user_profiles()
    }

    fn credential_owner_profile(&self, user: UserId) -> UserId {
        self.inner.credential_owner_profile(user)
    }

    fn has_base_restriction(&self, key: &RestrictionKey, user: UserHandle) -> bool {
        self.inner.has_base_restriction(key, user)
    }

    fn restriction_sources(&self, key: &RestrictionKey, user: UserHandle) -> Vec<EnforcingUser> {
        self.inner.restriction_sources(key, user)
    }

    fn is_managed_profile(&self, user: UserId) -> bool {
        self.inner.is_managed_profile(user)
    }

    fn is_quiet_mode_enabled(&self, user: UserHandle) -> bool {
        self.inner.is_quiet_mode_enabled(user)
    }

    fn profile_ids_with_disabled(&self, user: UserId) -> Vec<UserId> {
        self.inner.profile_ids_with_disabled(user)
    }

    fn is_user_switcher_enabled(&self) -> bool {
        self.inner.is_user_switcher_enabled()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the composite lookup key for restriction sources.
fn source_key(key: &RestrictionKey, user: UserHandle) -> String {
    format!("{key}/{}", user.identifier())
}
