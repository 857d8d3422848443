// Path: crates/cli/src/testing/mod.rs

//! Test-support utilities for exercising the client against live HTTP.

pub mod stub;

pub use stub::{serve_app, StubServer};
