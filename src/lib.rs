//! Parse indented `key: value` diagnostics reports, such as the output of
//! macOS `system_profiler`, into ordered trees of typed values.
//!
//! ```
//! use sysprofile::{parse_str, report::get_bool};
//!
//! let tree = parse_str("Devices:\n    MyPhone:\n        Connected: Yes\n")?;
//! assert!(get_bool(&tree, &["Devices", "MyPhone", "Connected"]));
//! # Ok::<(), sysprofile::ProfileError>(())
//! ```

pub mod ast;
pub mod bluetooth;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod snapshot;
pub mod utils;

pub use ast::{Mapping, Value};
pub use error::ProfileError;
pub use parser::{coerce, parse_reader, parse_str, parse_str_with, DepthPolicy, MalformedPolicy, ParseOptions, Parser};
pub use report::Report;
pub use snapshot::Snapshot;
