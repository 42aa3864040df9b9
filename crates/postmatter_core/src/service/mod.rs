//! Document-level use cases.
//!
//! # Responsibility
//! - Expose the parse/serialize facade over the matter pipeline.
//! - Render starter posts for new-post actions.
//!
//! # See also
//! - `crate::matter` for the individual pipeline stages.

pub mod document;
pub mod starter;
