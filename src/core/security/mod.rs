//! Path sanitizer for the file-browsing tool.
//!
//! Directory listings are restricted to a configured root when one is set;
//! `..` traversal and symlinks leaving that root are rejected.

pub mod path_validator;

pub use path_validator::{PathSecurityError, expand_home, validate_path};
