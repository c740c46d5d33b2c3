use crate::declaration::{ProgramElement, Tag};

/// Merges documentation of several related elements into display lines.
///
/// The free text comes from the first element with non-blank documentation,
/// falling back to `default_text`. Tags are `default_tags` followed by the
/// tags of every element, in order and without deduplication. When both text
/// and tags are present a blank line separates them.
pub fn extract_comment(
    default_text: Option<&str>,
    default_tags: &[Tag],
    elements: &[&dyn ProgramElement],
) -> Vec<String> {
    let comment_text = elements
        .iter()
        .filter_map(|element| element.comment_text())
        .find(|text| !text.trim().is_empty())
        .or(default_text);

    let tags: Vec<&Tag> = default_tags
        .iter()
        .chain(elements.iter().flat_map(|element| element.tags().iter()))
        .collect();

    if comment_text.is_none() && tags.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();
    if let Some(text) = comment_text {
        result.extend(text.split('\n').map(|line| line.trim().to_string()));
        if !tags.is_empty() {
            result.push(String::new());
        }
    }
    result.extend(tags.iter().map(|tag| format!("{} {}", tag.name, tag.text)));
    result
}

/// Documentation of a single element, without defaults.
pub fn element_comment(element: &dyn ProgramElement) -> Vec<String> {
    extract_comment(None, &[], &[element])
}
