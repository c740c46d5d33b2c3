use crate::declaration::{Documentation, Tag};

/// Splits a `/** ... */` comment into free text and block tags.
///
/// Returns `None` for anything that is not a javadoc comment. Continuation
/// lines of a block tag are joined onto the tag text with a single space.
pub fn parse_javadoc(comment: &str) -> Option<Documentation> {
    let trimmed = comment.trim();
    let inner = trimmed.strip_prefix("/**")?.strip_suffix("*/")?;

    let mut text_lines: Vec<&str> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();

    for raw in inner.lines() {
        let line = clean_line(raw);
        if line.starts_with('@') {
            let (name, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            tags.push(Tag::new(name, text.trim()));
        } else if let Some(tag) = tags.last_mut() {
            if !line.is_empty() {
                if !tag.text.is_empty() {
                    tag.text.push(' ');
                }
                tag.text.push_str(line);
            }
        } else {
            text_lines.push(line);
        }
    }

    let text = text_lines.join("\n").trim().to_string();
    let text = if text.is_empty() { None } else { Some(text) };
    Some(Documentation::new(text, tags))
}

/// Strips the leading `*` gutter from one comment line.
fn clean_line(line: &str) -> &str {
    let l = line.trim();
    l.strip_prefix("* ")
        .or_else(|| l.strip_prefix('*'))
        .unwrap_or(l)
        .trim()
}
