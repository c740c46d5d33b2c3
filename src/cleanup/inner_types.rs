/// Suffix of nested types that are regenerated elsewhere and never carried over.
pub const BUILDER_SUFFIX: &str = "builder";

/// Returns `true` for nested builder types, compared case-insensitively.
pub fn is_builder_type(simple_name: &str) -> bool {
    simple_name.to_lowercase().ends_with(BUILDER_SUFFIX)
}

/// Copies the body of a nested type verbatim.
///
/// `line` is the 1-based line of the declaration, whose opening brace is
/// assumed to be on that line. Lines after it are copied (trimmed) until the
/// brace depth drops back to zero or the source runs out; the closing brace
/// line is then dropped.
///
/// Braces on the declaration line itself are not counted. A type declared
/// entirely on one line (`enum E { X, Y }`) therefore captures the members
/// that follow it, up to the next unmatched `}`.
pub fn extract_inner_body(line: usize, lines: &[&str]) -> Vec<String> {
    let mut content = Vec::new();
    let mut depth = brace_delta("{");
    let mut index = line;

    while depth > 0 && index < lines.len() {
        let source_line = lines[index];
        depth += brace_delta(source_line);
        content.push(source_line.trim().to_string());
        index += 1;
    }

    content.pop();
    content
}

fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}
