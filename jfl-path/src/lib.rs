//! JFL Path - Core primitives for JSON flattening
//!
//! This crate provides the value types shared by the JFL engine and binder
//! with no engine dependencies. It includes:
//!
//! - Slash-delimited field paths (`Path`)
//! - Index-aware traversal paths (`PropPath`)
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod path;
pub mod prop_path;

// Re-export commonly used types
pub use error::{FlError, Result};
pub use path::Path;
pub use prop_path::PropPath;
