use std::io::{self, BufRead};

use super::*;

/// Count complete leading indentation units of `unit` spaces.
///
/// Stops at the first position that is not a full unit; tabs and partial
/// units are not counted. A zero-width unit always yields depth 0.
pub fn indent_depth(line: &str, unit: usize) -> usize {
    if unit == 0 {
        return 0;
    }

    let leading = line.bytes().take_while(|&b| b == b' ').count();
    leading / unit
}

/// Read one physical line, decoding lossily and dropping the line ending.
pub(super) fn read_raw_line<R: BufRead>(lexer: &mut Lexer<R>) -> io::Result<Option<String>> {
    lexer.buf.clear();
    let n = lexer.reader.read_until(b'\n', &mut lexer.buf)?;
    if n == 0 {
        return Ok(None);
    }
    lexer.line += 1;

    let mut bytes = lexer.buf.as_slice();
    if let Some(rest) = bytes.strip_suffix(b"\n") {
        bytes = rest;
    }
    if let Some(rest) = bytes.strip_suffix(b"\r") {
        bytes = rest;
    }

    Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
}
