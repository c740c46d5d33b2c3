/// Import groups in display order. The trailing `"import "` catches whatever
/// the specific groups left over.
pub const IMPORT_GROUP_ORDER: [&str; 5] = [
    "import static",
    "import java.",
    "import javax.",
    "import org.",
    "import ",
];

/// Collects import statements from raw source lines, trimmed.
pub fn recover_imports<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| line.starts_with("import "))
        .map(str::to_string)
        .collect()
}

/// Orders imports by [`IMPORT_GROUP_ORDER`], appending a blank line after each
/// non-empty group. Each import lands in the first group whose prefix it
/// matches; imports matching no group are dropped.
pub fn order_imports<'a, I>(imports: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut remaining: Vec<&str> = imports.into_iter().map(String::as_str).collect();
    let mut result = Vec::new();

    for prefix in IMPORT_GROUP_ORDER {
        let (matches, rest): (Vec<&str>, Vec<&str>) = remaining
            .into_iter()
            .partition(|line| line.starts_with(prefix));
        if !matches.is_empty() {
            result.extend(matches.into_iter().map(str::to_string));
            result.push(String::new());
        }
        remaining = rest;
    }

    result
}
