//! Fakes and fixtures shared by integration tests.

pub mod common;
pub mod support;

pub use common::*;
pub use support::providers::{CountingProvider, FailingProvider};
pub use support::resources::FixtureResource;
