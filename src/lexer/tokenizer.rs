use super::*;
use super::scanner::indent_depth;

/// Classify a raw line. Returns `None` for blank lines.
pub(super) fn classify(text: &str, number: usize, indent_width: usize) -> Option<Line> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let depth = indent_depth(text, indent_width);
    let kind = match trimmed.split_once(':') {
        Some((key, rest)) => {
            let key = key.trim().to_string();
            let rest = rest.trim();
            if rest.is_empty() {
                LineKind::Heading { key }
            } else {
                LineKind::Scalar { key, raw: rest.to_string() }
            }
        }
        None => LineKind::Malformed { text: trimmed.to_string() },
    };

    Some(Line { number, depth, kind })
}
