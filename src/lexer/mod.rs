// Author: Dustin Pilgrim
// License: MIT

use std::io::BufRead;

use crate::ProfileError;

mod scanner;
mod tokenizer;

pub use scanner::indent_depth;

/// What a single non-blank report line contributes.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// `key:` with nothing after the colon.
    Heading { key: String },
    /// `key: value`, value trimmed and non-empty.
    Scalar { key: String, raw: String },
    /// No colon anywhere on the line.
    Malformed { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based line number in the source.
    pub number: usize,
    pub depth: usize,
    pub kind: LineKind,
}

/// Streams classified lines out of a reader, skipping blank lines.
pub struct Lexer<R> {
    reader: R,
    indent_width: usize,
    line: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R, indent_width: usize) -> Self {
        Lexer {
            reader,
            indent_width,
            line: 0,
            buf: Vec::new(),
            done: false,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Next non-blank line, `None` at end of input.
    ///
    /// A read failure is yielded once and ends the stream.
    pub fn next_line(&mut self) -> Option<Result<Line, ProfileError>> {
        while !self.done {
            let text = match scanner::read_raw_line(self) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ProfileError::from_io(&e, self.line())));
                }
            };

            if let Some(line) = tokenizer::classify(&text, self.line, self.indent_width) {
                return Some(Ok(line));
            }
        }
        None
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Line, ProfileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
