// Path: crates/client/src/lib.rs
//! # Blink Client Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Blink Client
//!
//! The protocol core of the workspace: fetches action descriptors, resolves
//! their invocable links, binds user input into endpoint templates, and
//! executes the resulting endpoints. Everything here is stateless apart from
//! the reqwest connection pool; each operation reads an immutable descriptor
//! and produces a fresh value, so callers may run operations concurrently
//! without coordination.

pub mod client;
pub mod resolve;
pub mod template;

// Re-export for convenience
pub use client::ActionClient;
pub use resolve::{resolve_actions, InvocableAction};
pub use reqwest::Url;
pub use template::bind;
