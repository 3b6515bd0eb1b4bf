// crates/user-double-core/src/core/restrictions.rs
// ============================================================================
// Module: Well-Known Restriction Keys
// Description: Canonical keys for commonly tested user restrictions.
// Purpose: Centralize well-known restriction keys for fixtures and assertions.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Canonical keys for commonly tested user restrictions. The fake accepts
//! arbitrary keys; these constants exist so fixtures and assertions agree on
//! spelling.
//! Invariants:
//! - Keys are lowercase ASCII strings.
//! - Keys remain stable across releases.

// ============================================================================
// SECTION: Well-Known Restriction Keys
// ============================================================================

/// Restricts adding new users.
pub const RESTRICTION_ADD_USER: &str = "no_add_user";
/// Restricts removing existing users.
pub const RESTRICTION_REMOVE_USER: &str = "no_remove_user";
/// Restricts modifying accounts.
pub const RESTRICTION_MODIFY_ACCOUNTS: &str = "no_modify_accounts";
/// Restricts switching between users.
pub const RESTRICTION_USER_SWITCH: &str = "no_user_switch";
/// Restricts configuring tethering.
pub const RESTRICTION_CONFIG_TETHERING: &str = "no_config_tethering";

/// Well-known restriction keys in stable order.
pub const WELL_KNOWN_RESTRICTIONS: [&str; 5] = [
    RESTRICTION_ADD_USER,
    RESTRICTION_REMOVE_USER,
    RESTRICTION_MODIFY_ACCOUNTS,
    RESTRICTION_USER_SWITCH,
    RESTRICTION_CONFIG_TETHERING,
];

/// Returns true when the key is one of the well-known restriction keys.
#[must_use]
pub fn is_well_known_restriction(key: &str) -> bool {
    WELL_KNOWN_RESTRICTIONS.iter().any(|known| known == &key)
}
