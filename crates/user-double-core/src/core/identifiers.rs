// crates/user-double-core/src/core/identifiers.rs
// ============================================================================
// Module: User Double Identifiers
// Description: Canonical identifiers for users, handles, and restrictions.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout User Double.
//! Numeric user identifiers are non-negative and 0-based: user 0 is the
//! primary (system) user. Handles are opaque wrappers around a user
//! identifier, mirroring the handle-object surface of the real service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Numeric user identifier.
///
/// # Invariants
/// - Always >= 0 (non-negative, 0-based).
/// - `UserId::SYSTEM` (0) denotes the primary user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Identifier of the primary (system) user.
    pub const SYSTEM: Self = Self(0);

    /// Creates a user identifier from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Opaque handle wrapping a user identifier.
///
/// # Invariants
/// - A handle carries exactly one user identifier and nothing else; two
///   handles are equal when their identifiers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHandle(UserId);

impl UserHandle {
    /// Creates a handle for the given user identifier.
    #[must_use]
    pub const fn of(id: UserId) -> Self {
        Self(id)
    }

    /// Returns the user identifier carried by this handle.
    #[must_use]
    pub const fn identifier(self) -> UserId {
        self.0
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for UserHandle {
    fn from(value: UserId) -> Self {
        Self::of(value)
    }
}

/// Restriction key naming a policy flag that can be enforced on a user.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionKey(String);

impl RestrictionKey {
    /// Creates a new restriction key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestrictionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RestrictionKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RestrictionKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
