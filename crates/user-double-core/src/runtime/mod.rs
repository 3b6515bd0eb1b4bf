// crates/user-double-core/src/runtime/mod.rs
// ============================================================================
// Module: User Double Runtime
// Description: Scriptable fake implementation of the user-service surface.
// Purpose: Expose the in-memory fake and its shared wrapper.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime holds the concrete fake used by test harnesses: a scriptable
//! in-memory [`crate::interfaces::UserService`] implementation plus the
//! shared wrapper used as the injection seam.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod fake;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fake::FakeUserService;
pub use fake::SharedUserService;
