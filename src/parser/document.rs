use std::io::BufRead;

use super::*;
use super::value::coerce;
use crate::ast::Value;
use crate::lexer::{Line, LineKind};

/// A heading whose children are still being read.
struct Frame {
    key: String,
    /// Depth at which this section's children sit.
    child_depth: usize,
    items: Mapping,
}

/// Open sections, innermost last. The root container is held separately
/// so depth 0 always has somewhere to attach.
struct Sections {
    root: Mapping,
    stack: Vec<Frame>,
}

impl Sections {
    fn new() -> Self {
        Self { root: Mapping::new(), stack: Vec::new() }
    }

    /// Depth whose lines attach to the innermost open section.
    fn open_depth(&self) -> usize {
        self.stack.last().map_or(0, |f| f.child_depth)
    }

    fn current(&mut self) -> &mut Mapping {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.items,
            None => &mut self.root,
        }
    }

    /// Close every section deeper than `depth`, folding each into its parent.
    fn close_deeper(&mut self, depth: usize) {
        while let Some(frame) = self.stack.pop_if(|f| f.child_depth > depth) {
            self.current().insert(frame.key, Value::Mapping(frame.items));
        }
    }

    fn finish(mut self) -> Mapping {
        self.close_deeper(0);
        self.root
    }
}

pub(super) fn parse_document<R: BufRead>(parser: &mut Parser<R>) -> Result<Mapping, ProfileError> {
    let mut sections = Sections::new();
    let mut count = 0usize;

    while let Some(line) = parser.lexer.next_line() {
        let Line { number, depth, kind } = line?;
        count += 1;

        let (key, raw) = match kind {
            LineKind::Heading { key } => (key, None),
            LineKind::Scalar { key, raw } => (key, Some(raw)),
            LineKind::Malformed { text } => match parser.options.malformed {
                MalformedPolicy::Error => {
                    return Err(ProfileError::MissingColon {
                        text,
                        line: number,
                        hint: Some("Expected 'key:' or 'key: value'".into()),
                        code: Some(201),
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::warn!(line = number, text = %text, "skipping line without ':'");
                    continue;
                }
            },
        };

        sections.close_deeper(depth);

        let open = sections.open_depth();
        if open < depth {
            match parser.options.depth {
                DepthPolicy::Strict => {
                    return Err(ProfileError::OrphanedLine {
                        key,
                        depth,
                        line: number,
                        hint: Some(format!(
                            "The deepest open section expects depth {}; check the indentation",
                            open
                        )),
                        code: Some(202),
                    });
                }
                DepthPolicy::Nearest => {
                    tracing::warn!(
                        line = number,
                        key = %key,
                        depth,
                        attached_at = open,
                        "line skips a level, attaching to nearest open section"
                    );
                }
            }
        }

        match raw {
            None => sections.stack.push(Frame {
                key,
                child_depth: depth + 1,
                items: Mapping::new(),
            }),
            Some(raw) => {
                let value = coerce(&raw);
                sections.current().insert(key, value);
            }
        }
    }

    let tree = sections.finish();
    tracing::debug!(lines = count, sections = tree.len(), "parsed report");
    Ok(tree)
}
