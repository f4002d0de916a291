//! Deterministic, pure logic for the daily-group update.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! canvas documents and return deterministic outputs suitable for tests.

pub mod journal;
pub mod region;
pub mod relocate;
