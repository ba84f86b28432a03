use crate::lexer::indent_depth;
use crate::parser::DepthPolicy;

/// Human-readable form of a key path. Keys may contain dots and commas,
/// so segments are joined with `>`.
pub(super) fn display_path(path: &[&str]) -> String {
    path.join(" > ")
}

/// Find the source line that assigns `path`, returning `(line, trimmed text)`.
///
/// Sections are opened and closed by indentation exactly as the parser does,
/// including where `depth` re-homes a line that skips a level. When a key is
/// assigned more than once the last assignment wins, matching the tree.
/// Returns `(0, "<key not found>")` when nothing matches.
pub(super) fn find_report_line(
    path: &[&str],
    raw_content: &str,
    indent_width: usize,
    depth_policy: DepthPolicy,
) -> (usize, String) {
    let mut found = (0, "<key not found>".to_string());
    let Some((last, parents)) = path.split_last() else {
        return found;
    };

    // (section key, depth of its children)
    let mut scope_stack: Vec<(&str, usize)> = Vec::new();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();
        let Some((key, rest)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let depth = indent_depth(line, indent_width);

        while scope_stack.last().is_some_and(|&(_, child_depth)| child_depth > depth) {
            scope_stack.pop();
        }

        let open = scope_stack.last().map_or(0, |&(_, child_depth)| child_depth);
        if open < depth && depth_policy == DepthPolicy::Strict {
            continue;
        }

        if key == *last
            && scope_stack.len() == parents.len()
            && scope_stack.iter().zip(parents).all(|((scope, _), want)| scope == want)
        {
            found = (idx + 1, trimmed.to_string());
        }

        if rest.trim().is_empty() {
            scope_stack.push((key, depth + 1));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "Bluetooth:\n    Power: On\n    Devices:\n        Mouse:\n            Battery Level: 85\n        Keyboard:\n            Battery Level: full\n";

    #[test]
    fn test_find_report_line_scoped() {
        let (line, snippet) = find_report_line(&["Bluetooth", "Devices", "Keyboard", "Battery Level"], REPORT, 4, DepthPolicy::Strict);
        assert_eq!(line, 7);
        assert_eq!(snippet, "Battery Level: full");

        let (line, _) = find_report_line(&["Bluetooth", "Devices", "Mouse", "Battery Level"], REPORT, 4, DepthPolicy::Strict);
        assert_eq!(line, 5);
    }

    #[test]
    fn test_find_report_line_missing() {
        assert_eq!(find_report_line(&["Bluetooth", "Nope"], REPORT, 4, DepthPolicy::Strict).0, 0);
        assert_eq!(find_report_line(&[], REPORT, 4, DepthPolicy::Strict).0, 0);
        // right key, wrong section
        assert_eq!(find_report_line(&["Power"], REPORT, 4, DepthPolicy::Strict).0, 0);
    }

    #[test]
    fn test_find_report_line_rehomed_line() {
        // "Level" skips a level under "Mouse"; the parser attaches it to "Mouse" when lenient
        let report = "Devices:\n    Mouse:\n                Level: high\n    Keyboard:\n        Level: 3\n";
        let path = ["Devices", "Mouse", "Level"];

        assert_eq!(find_report_line(&path, report, 4, DepthPolicy::Strict).0, 0);
        let (line, snippet) = find_report_line(&path, report, 4, DepthPolicy::Nearest);
        assert_eq!(line, 3);
        assert_eq!(snippet, "Level: high");

        assert_eq!(find_report_line(&["Devices", "Keyboard", "Level"], report, 4, DepthPolicy::Nearest).0, 5);
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(&["Bluetooth", "Devices (Paired, Configured, etc.)"]), "Bluetooth > Devices (Paired, Configured, etc.)");
    }
}
