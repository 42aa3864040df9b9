//! FFI surface of the postmatter core for the desktop shell.

pub mod api;
