use crate::error::MissingTagError;

/// Returns the text between the first `tag_start` and the first `tag_end` after it.
///
/// The search is a plain first-index scan, not nesting aware. Content is
/// returned verbatim; surrounding newlines are part of the field.
pub fn extract_text_between_tag<'a>(
    text: &'a str,
    tag_start: &str,
    tag_end: &str,
) -> Result<&'a str, MissingTagError> {
    let start_index = text
        .find(tag_start)
        .map(|i| i + tag_start.len())
        .ok_or_else(|| MissingTagError::new(tag_start))?;
    let end_offset = text[start_index..]
        .find(tag_end)
        .ok_or_else(|| MissingTagError::new(tag_end))?;
    Ok(&text[start_index..start_index + end_offset])
}
