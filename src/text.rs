use std::sync::LazyLock;
use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.+?>").expect("valid tag pattern"));

/// Flattens the inner markup of a table cell into one line of text.
///
/// The markup is split on line breaks, each part is stripped of tags and newlines and
/// trimmed of surrounding spaces. Non-empty parts are then joined by a single space.
/// Anything that looks like a tag is removed, markup or not.
///
/// # Arguments
///
/// * 'markup' - inner markup of the cell
pub fn normalize_cell(markup: &str) -> String {
    LINE_BREAK
        .split(markup)
        .map(|line| {
            let stripped = TAG.replace_all(line, "");
            let stripped = stripped.replace(&['\n', '\r'][..], "");
            decode_entities(stripped.trim_matches(' '))
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Decodes the few entities the DOM serializer emits when writing text
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim_matches(' ')
        .to_string()
}
