//! # calprof-tests
//!
//! Structural validation harness for encoded ICC profiles.
//!
//! This crate provides:
//! - A minimal big-endian read-back of the header and tag directory,
//!   independent of the encoder's own types
//! - Integration tests covering container integrity, transfer-function
//!   properties over randomized input, and report analysis sanity
//!
//! The read-back deliberately reimplements the byte layout from the
//! ICC container rules rather than calling encoder internals, so a
//! layout bug cannot cancel itself out in the tests.

pub mod readback;

pub use readback::{HeaderFields, TagEntry, read_header, read_tag_table};
