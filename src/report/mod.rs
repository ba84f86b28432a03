// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::ast::{Mapping, Value};
use crate::parser::{self, ParseOptions};
use crate::utils::expand_home;
use crate::ProfileError;

mod access;
mod conversion;
mod helpers;

pub use access::{get, get_bool};

/// A parsed report together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    tree: Mapping,
    options: ParseOptions,
    raw_content: Option<String>, // kept for error line lookups
}

impl Report {
    /// Parse report text with the default options.
    ///
    /// # Example
    /// ```
    /// use sysprofile::Report;
    ///
    /// let report = Report::from_str("Devices:\n    Mouse:\n        Connected: Yes\n")?;
    /// assert!(report.get_bool(&["Devices", "Mouse", "Connected"]));
    /// # Ok::<(), sysprofile::ProfileError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        Self::from_str_with(content, ParseOptions::default())
    }

    pub fn from_str_with(content: &str, options: ParseOptions) -> Result<Self, ProfileError> {
        let tree = parser::parse_str_with(content, options)?;
        Ok(Self {
            tree,
            options,
            raw_content: Some(content.to_string()),
        })
    }

    /// Parse straight from a reader without buffering the whole text.
    ///
    /// Type errors from reports built this way carry no line numbers.
    pub fn from_reader<R: BufRead>(reader: R, options: ParseOptions) -> Result<Self, ProfileError> {
        let tree = parser::parse_reader(reader, options)?;
        Ok(Self {
            tree,
            options,
            raw_content: None,
        })
    }

    /// Load a saved report. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```no_run
    /// # use sysprofile::Report;
    /// let report = Report::from_file("~/bluetooth.txt")?;
    /// # Ok::<(), sysprofile::ProfileError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        Self::from_file_with(path, ParseOptions::default())
    }

    pub fn from_file_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, ProfileError> {
        let path = resolve_report_path(path.as_ref());

        let bytes = fs::read(&path).map_err(|e| ProfileError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        // same lossy decoding the streaming lexer applies per line
        Self::from_str_with(&String::from_utf8_lossy(&bytes), options)
    }

    /// Wrap an already built tree.
    pub fn from_tree(tree: Mapping) -> Self {
        Self {
            tree,
            options: ParseOptions::default(),
            raw_content: None,
        }
    }

    pub fn tree(&self) -> &Mapping {
        &self.tree
    }

    pub fn into_tree(self) -> Mapping {
        self.tree
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The whole report as a single mapping value.
    pub fn root(&self) -> Value {
        Value::Mapping(self.tree.clone())
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        crate::export::export_to_json(&self.tree)
    }
}

fn resolve_report_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) if s.trim_start().starts_with("~/") => expand_home(s),
        _ => path.to_path_buf(),
    }
}
