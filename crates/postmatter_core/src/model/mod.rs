//! Front-matter domain model.
//!
//! # Responsibility
//! - Define the canonical metadata record produced by decoding.
//! - Define the tagged value type carried by extension fields.
//! - Define the two block dialects and their lexical markers.
//!
//! # Invariants
//! - The six well-known fields are strongly typed and never `Missing`.
//! - Extension fields keep the order in which they first appeared.

pub mod dialect;
pub mod record;
pub mod value;
