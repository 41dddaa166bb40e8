//! Conformance tests for the BSON value adapters.
//!
//! Each module exercises one adapter or the registry end to end through the
//! public `bsonbridge` facade.

mod common;

mod concurrency;
mod error_handling;
mod registry_dispatch;
