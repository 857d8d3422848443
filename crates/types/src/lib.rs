// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Blink Types
//!
//! This crate is the foundational library for the blink action client,
//! containing the wire data structures, descriptor validation, and error
//! types shared by every other crate in the workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `blink-types` has minimal dependencies and is itself a
//! dependency for the client and CLI crates. An action descriptor is remote,
//! untrusted input; this crate is where it is parsed and validated into a
//! typed value, so that no partially-filled descriptor ever escapes into the
//! rest of the workspace.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ClientError> = std::result::Result<T, E>;

/// The action descriptor wire model and its validation entry point.
pub mod action;
/// A unified set of all error types used across the workspace.
pub mod error;
/// The community registry of action-hosting websites.
pub mod registry;
