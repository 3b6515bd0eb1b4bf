// crates/user-double-config/src/lib.rs
// ============================================================================
// Module: User Double Config Library
// Description: Canonical fixture model and validation for the fake.
// Purpose: Single source of truth for user-double.toml semantics.
// Dependencies: user-double-core, serde, toml
// ============================================================================

//! ## Overview
//! `user-double-config` defines the fixture file format used to script the
//! user-service fake from data instead of code. Loading is strict and fails
//! closed: oversized files, malformed TOML, and inconsistent fixtures are
//! all rejected before any state reaches the fake.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixture;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fixture::*;
