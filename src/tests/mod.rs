//! Crate-level property tests.

mod roundtrip;
