// crates/user-double-core/src/lib.rs
// ============================================================================
// Module: User Double Core Library
// Description: Public API surface for the User Double core.
// Purpose: Expose core types, interfaces, and the scriptable fake runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! User Double core provides a backend-agnostic user-service query surface
//! and a deterministic, scriptable in-memory fake for test harnesses. Code
//! under test integrates through the [`UserService`] trait and explicit
//! injection rather than a global service lookup.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::UserService;
pub use runtime::FakeUserService;
pub use runtime::SharedUserService;
