use super::*;

/// Walk `path` from the root of `tree`.
///
/// An empty path is rejected; every key but the last must name a section.
///
/// # Examples
/// ```
/// use sysprofile::{parse_str, report, Value};
///
/// let tree = parse_str("Bluetooth:\n    Power: On\n")?;
/// assert_eq!(report::get(&tree, &["Bluetooth", "Power"])?, &Value::Boolean(true));
/// assert!(report::get(&tree, &["Bluetooth", "Missing"]).is_err());
/// # Ok::<(), sysprofile::ProfileError>(())
/// ```
pub fn get<'a>(tree: &'a Mapping, path: &[&str]) -> Result<&'a Value, ProfileError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(not_found(path, "An empty path has no value; pass at least one key"));
    };

    let mut current = tree;
    for (depth, key) in parents.iter().enumerate() {
        current = match current.get(*key) {
            Some(Value::Mapping(items)) => items,
            Some(other) => {
                return Err(not_found(
                    path,
                    &format!(
                        "'{}' is a {}, not a section",
                        helpers::display_path(&path[..=depth]),
                        other.kind()
                    ),
                ));
            }
            None => {
                return Err(not_found(path, "Check the key names against the report"));
            }
        };
    }

    current
        .get(*last)
        .ok_or_else(|| not_found(path, "Check the key names against the report"))
}

/// Boolean at `path`, or `false` when it is missing or not a boolean.
pub fn get_bool(tree: &Mapping, path: &[&str]) -> bool {
    get(tree, path).ok().and_then(Value::as_bool).unwrap_or(false)
}

fn not_found(path: &[&str], hint: &str) -> ProfileError {
    ProfileError::NotFound {
        path: helpers::display_path(path),
        hint: Some(hint.to_string()),
        code: Some(304),
    }
}

impl Report {
    /// Raw `Value` at `path`.
    pub fn get_value(&self, path: &[&str]) -> Result<&Value, ProfileError> {
        get(&self.tree, path)
    }

    /// Typed value at `path`.
    ///
    /// # Examples
    /// ```
    /// # use sysprofile::Report;
    /// # use std::time::Duration;
    /// let report = Report::from_str("Mouse:\n    Battery Level: 85\n    Idle Timeout: 5 minutes\n")?;
    /// let level: u8 = report.get(&["Mouse", "Battery Level"])?;
    /// let idle: Duration = report.get(&["Mouse", "Idle Timeout"])?;
    /// assert_eq!(level, 85);
    /// assert_eq!(idle, Duration::from_secs(300));
    /// # Ok::<(), sysprofile::ProfileError>(())
    /// ```
    ///
    /// # Errors
    /// `NotFound` if the path doesn't exist, `TypeError` if the value can't
    /// be converted to `T`.
    pub fn get<T>(&self, path: &[&str]) -> Result<T, ProfileError>
    where
        T: TryFrom<Value, Error = ProfileError>,
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| self.enhance_error_with_line_info(e, path))
    }

    /// Like [`Report::get`] but a missing path is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &[&str]) -> Result<Option<T>, ProfileError>
    where
        T: TryFrom<Value, Error = ProfileError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(ProfileError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_or<T>(&self, path: &[&str], default: T) -> T
    where
        T: TryFrom<Value, Error = ProfileError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Boolean at `path`, defaulting to `false`.
    pub fn get_bool(&self, path: &[&str]) -> bool {
        get_bool(&self.tree, path)
    }

    /// Keys of the section at `path`, in report order. An empty path lists the top level.
    pub fn get_keys(&self, path: &[&str]) -> Result<Vec<String>, ProfileError> {
        if path.is_empty() {
            return Ok(self.tree.keys().cloned().collect());
        }

        match self.get_value(path)? {
            Value::Mapping(items) => Ok(items.keys().cloned().collect()),
            other => Err(self.enhance_error_with_line_info(
                ProfileError::TypeError {
                    message: format!(
                        "Path '{}' is a {}, not a section",
                        helpers::display_path(path),
                        other.kind()
                    ),
                    line: 0,
                    hint: Some("Only sections have keys".into()),
                    code: Some(410),
                },
                path,
            )),
        }
    }

    pub fn has(&self, path: &[&str]) -> bool {
        self.get_value(path).is_ok()
    }

    fn enhance_error_with_line_info(&self, e: ProfileError, path: &[&str]) -> ProfileError {
        let Some(raw) = self.raw_content.as_deref() else {
            return e;
        };

        match e {
            ProfileError::TypeError { message, hint, code, .. } => {
                let (line, snippet) = helpers::find_report_line(
                    path,
                    raw,
                    self.options.indent_width,
                    self.options.depth,
                );
                if line > 0 {
                    ProfileError::TypeError {
                        message: format!("{}\n  → {}", message, snippet),
                        line,
                        hint,
                        code,
                    }
                } else {
                    ProfileError::TypeError { message, line: 0, hint, code }
                }
            }
            other => other,
        }
    }
}
