// crates/user-double-core/src/core/records.rs
// ============================================================================
// Module: User Double Records
// Description: User records and restriction enforcement descriptors.
// Purpose: Provide stable, serializable descriptors returned by user queries.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Records are the descriptor values handed back by the service query
//! surface. The fake stores them verbatim and never interprets their
//! contents beyond reading the identifier when deriving profile id lists.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::UserHandle;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: User Records
// ============================================================================

/// Descriptor for a single user or profile.
///
/// # Invariants
/// - One record per `id`; later writes for the same id overwrite earlier ones.
/// - Contents are returned verbatim by queries, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier this record describes.
    pub id: UserId,
    /// Human-readable user name.
    pub name: String,
    /// Whether the user is currently enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl UserRecord {
    /// Creates an enabled record with the given identifier and name.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enabled: true,
        }
    }
}

/// Serde default for [`UserRecord::enabled`].
const fn default_enabled() -> bool {
    true
}

// ============================================================================
// SECTION: Restriction Enforcement
// ============================================================================

/// Administrative authority that imposed a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionAuthority {
    /// Imposed by the system itself.
    System,
    /// Imposed by a device owner.
    DeviceOwner,
    /// Imposed by a profile owner.
    ProfileOwner,
}

/// Descriptor identifying which administrative user imposed a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcingUser {
    /// Handle of the enforcing user.
    pub user: UserHandle,
    /// Authority under which the restriction was imposed.
    pub authority: RestrictionAuthority,
}

impl EnforcingUser {
    /// Creates an enforcing-user descriptor.
    #[must_use]
    pub const fn new(user: UserHandle, authority: RestrictionAuthority) -> Self {
        Self {
            user,
            authority,
        }
    }
}
