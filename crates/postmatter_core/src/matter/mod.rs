//! Front-matter interchange engine.
//!
//! # Responsibility
//! - Split documents into metadata block and opaque body.
//! - Decode either dialect into raw fields, normalize them into a record.
//! - Encode records back into either dialect with predictable output.
//!
//! # Invariants
//! - Every stage is a total function over its input; malformed text degrades
//!   to defaults and diagnostics, never to an error.
//! - The body is never inspected or rewritten.

pub mod dates;
pub mod decoder;
pub mod encoder;
pub mod normalizer;
pub mod splitter;
