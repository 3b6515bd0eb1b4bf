// crates/user-double-core/src/interfaces/mod.rs
// ============================================================================
// Module: User Double Interfaces
// Description: Backend-agnostic query surface for the user-management service.
// Purpose: Define the contract production code uses to read user state.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The [`UserService`] trait mirrors the read surface of an operating-system
//! user-management service: user records, profile lists, restriction flags,
//! and feature toggles. Every query is total and synchronous; absent data
//! yields an empty or default value rather than an error. Code under test
//! receives an implementation by explicit injection, never through a global
//! lookup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::EnforcingUser;
use crate::core::RestrictionKey;
use crate::core::UserHandle;
use crate::core::UserId;
use crate::core::UserRecord;

// ============================================================================
// SECTION: User Service
// ============================================================================

/// Read surface of the user-management service.
///
/// Several queries accept a user argument solely for signature compatibility
/// with the real service; implementations backed by global test state are
/// free to ignore it. Which arguments are consulted is documented per query.
pub trait UserService {
    /// Returns the record stored for the given user, if any.
    fn user_info(&self, user: UserId) -> Option<UserRecord>;

    /// Returns the profiles associated with the given user.
    ///
    /// The fake keeps a single global profile list; the `user` argument is
    /// accepted for interface compatibility and not consulted.
    fn profiles(&self, user: UserId) -> Vec<UserRecord>;

    /// Returns the identifiers of the stored profiles in insertion order.
    ///
    /// `enabled_only` is accepted for interface compatibility and not
    /// consulted; disabled profiles are included either way.
    fn profile_ids(&self, user: UserId, enabled_only: bool) -> Vec<UserId>;

    /// Returns the profiles of the calling user as handles.
    fn user_profiles(&self) -> Vec<UserHandle>;

    /// Returns the profile that owns credentials for the given user.
    ///
    /// The fake treats every user as its own credential owner.
    fn credential_owner_profile(&self, user: UserId) -> UserId;

    /// Returns true when the key is registered as a base restriction.
    ///
    /// Base restrictions are global in the fake; the `user` handle is
    /// accepted for interface compatibility and not consulted.
    fn has_base_restriction(&self, key: &RestrictionKey, user: UserHandle) -> bool;

    /// Returns the enforcing users recorded for the (key, user) pair.
    ///
    /// Returns an empty vector when the pair was never scripted, never a
    /// missing value; callers iterate the result without a presence check.
    fn restriction_sources(&self, key: &RestrictionKey, user: UserHandle) -> Vec<EnforcingUser>;

    /// Returns true when the user is flagged as a managed profile.
    fn is_managed_profile(&self, user: UserId) -> bool;

    /// Returns true when quiet mode is enabled.
    ///
    /// Quiet mode is a single global flag in the fake; the `user` handle is
    /// accepted for interface compatibility and not consulted.
    fn is_quiet_mode_enabled(&self, user: UserHandle) -> bool;

    /// Returns the scripted profile id list that includes disabled profiles.
    ///
    /// Returns the raw scripted array; empty when nothing was scripted. The
    /// `user` argument is accepted for interface compatibility and not
    /// consulted.
    fn profile_ids_with_disabled(&self, user: UserId) -> Vec<UserId>;

    /// Returns true when the user switcher is enabled.
    fn is_user_switcher_enabled(&self) -> bool;
}
