use std::fmt;
use std::io;

/// The main error type for report parsing and querying.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Raised when a non-blank line has no `:` separator.
    MissingColon {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a line is indented deeper than any open section.
    OrphanedLine {
        key: String,
        depth: usize,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The underlying reader failed.
    IoError {
        kind: io::ErrorKind,
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ProfileError {
    /// True for errors caused by the shape of the report text itself.
    pub fn is_structural(&self) -> bool {
        matches!(self, ProfileError::MissingColon { .. } | ProfileError::OrphanedLine { .. })
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            ProfileError::MissingColon { code, .. }
            | ProfileError::OrphanedLine { code, .. }
            | ProfileError::IoError { code, .. }
            | ProfileError::FileError { code, .. }
            | ProfileError::NotFound { code, .. }
            | ProfileError::TypeError { code, .. }
            | ProfileError::ExportError { code, .. } => *code,
        }
    }

    pub(crate) fn from_io(e: &io::Error, line: usize) -> Self {
        ProfileError::IoError {
            kind: e.kind(),
            message: e.to_string(),
            line,
            hint: None,
            code: Some(101),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::MissingColon { text, line, hint, code } =>
                write!(f, "[SYSPROFILE] Missing ':' on line {}: '{}'{}",
                    line, text, suffix(hint, code)
                ),
            ProfileError::OrphanedLine { key, depth, line, hint, code } =>
                write!(f, "[SYSPROFILE] Line {} ('{}') is at depth {} with no open section above it{}",
                    line, key, depth, suffix(hint, code)
                ),
            ProfileError::IoError { kind, message, line, hint, code } =>
                write!(f, "[SYSPROFILE] Read Error ({:?}) after line {}: {}{}",
                    kind, line, message, suffix(hint, code)
                ),
            ProfileError::FileError { message, path, hint, code } =>
                write!(f, "[SYSPROFILE] File Error '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
            ProfileError::NotFound { path, hint, code } =>
                write!(f, "[SYSPROFILE] Path '{}' not found{}",
                    path, suffix(hint, code)
                ),
            ProfileError::TypeError { message, line, hint, code } =>
                if *line > 0 {
                    write!(f, "[SYSPROFILE] Type Error at line {}: {}{}",
                        line, message, suffix(hint, code)
                    )
                } else {
                    write!(f, "[SYSPROFILE] Type Error: {}{}",
                        message, suffix(hint, code)
                    )
                },
            ProfileError::ExportError { message, hint, code } =>
                write!(f, "[SYSPROFILE] Export Error: {}{}",
                    message, suffix(hint, code)
                ),
        }
    }
}

impl std::error::Error for ProfileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint_and_code() {
        let err = ProfileError::MissingColon {
            text: "garbage".into(),
            line: 3,
            hint: Some("Every line needs 'key:' or 'key: value'".into()),
            code: Some(201),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("[SYSPROFILE] Missing ':' on line 3"));
        assert!(rendered.contains("Hint: Every line needs"));
        assert!(rendered.ends_with("Code: 201"));
        assert!(err.is_structural());
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = io::Error::new(io::ErrorKind::UnexpectedEof, "pipe closed");
        let err = ProfileError::from_io(&io, 7);
        assert!(!err.is_structural());
        assert_eq!(err.code(), Some(101));
        match err {
            ProfileError::IoError { kind, line, .. } => {
                assert_eq!(kind, io::ErrorKind::UnexpectedEof);
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
