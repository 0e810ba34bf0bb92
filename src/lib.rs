//! Library for tidying outgoing chat messages.
//!
//! Messages get a capital letter at the start of each sentence and line, and
//! optionally a terminal period, while inline code, fenced code, URLs and file
//! names pass through untouched.

pub mod config;
pub mod exceptions;
pub mod extensions;
pub mod macros;
pub mod process;
pub mod rewrite;

pub use config::{Config, ConfigError};
pub use exceptions::{Exception, ExceptionKind, ExceptionMap, extract, restore};
pub use extensions::{ExtensionError, ExtensionOracle, ExtensionSet};
pub use process::{transform, transform_with_bundled};
