use std::io::BufRead;

use crate::ast::Mapping;
use crate::lexer::Lexer;
use crate::ProfileError;

mod document;
mod options;
mod value;

pub use options::{DepthPolicy, MalformedPolicy, ParseOptions};
pub use value::coerce;

/// Builds a typed tree from an indented report stream.
pub struct Parser<R> {
    lexer: Lexer<R>,
    options: ParseOptions,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParseOptions::default())
    }

    pub fn with_options(reader: R, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(reader, options.indent_width),
            options,
        }
    }

    /// Consume the whole stream. Either the complete tree or an error; never a partial tree.
    pub fn parse_document(mut self) -> Result<Mapping, ProfileError> {
        document::parse_document(&mut self)
    }
}

/// Parse report text with the default options.
pub fn parse_str(input: &str) -> Result<Mapping, ProfileError> {
    Parser::new(input.as_bytes()).parse_document()
}

/// Parse report text with explicit options.
pub fn parse_str_with(input: &str, options: ParseOptions) -> Result<Mapping, ProfileError> {
    Parser::with_options(input.as_bytes(), options).parse_document()
}

/// Parse a report from any buffered reader, e.g. a child process's stdout.
pub fn parse_reader<R: BufRead>(reader: R, options: ParseOptions) -> Result<Mapping, ProfileError> {
    Parser::with_options(reader, options).parse_document()
}
