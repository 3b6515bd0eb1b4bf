// crates/user-double-core/src/core/mod.rs
// ============================================================================
// Module: User Double Core Types
// Description: Canonical identifier and record structures for user queries.
// Purpose: Provide stable, serializable types for the user-service surface.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! User Double core types define user identifiers, handles, records, and
//! restriction descriptors. These types are the canonical source of truth
//! for the query surface and for fixture files.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod records;
pub mod restrictions;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::RestrictionKey;
pub use identifiers::UserHandle;
pub use identifiers::UserId;
pub use records::EnforcingUser;
pub use records::RestrictionAuthority;
pub use records::UserRecord;
pub use restrictions::WELL_KNOWN_RESTRICTIONS;
pub use restrictions::is_well_known_restriction;
