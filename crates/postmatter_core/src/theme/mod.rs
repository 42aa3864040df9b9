//! Theme field schemas.
//!
//! # Responsibility
//! - Describe the front-matter fields each supported site theme expects.
//! - Supply defaults and type tags to the theme-aware parse/serialize paths.
//!
//! # Invariants
//! - The catalog is static data; nothing is registered at runtime.
//! - Key lookup is a case-sensitive exact match.

mod catalog;
pub mod registry;
pub mod schema;
