//! Markdown formatting helpers. Nothing in here knows about Swagger.

use super::NONE_ITEM;

/// `header("Arguments", 4)` → `#### Arguments\n`
pub fn header(text: &str, level: usize) -> String {
    format!("{} {}\n", "#".repeat(level), text)
}

/// Indented code block line. The caller supplies the trailing newline.
pub fn code_block(text: &str) -> String {
    format!("    {text}")
}

/// Indent every line after the first so multi-line text stays inside a code block.
pub fn indent_continuation(text: &str) -> String {
    text.replace('\n', "\n    ")
}

/// Render `* **primary** - secondary` lines, or `* None` for an empty list.
///
/// `fields` yields the primary and secondary text of an item; an absent
/// primary is replaced by `placeholder`.
pub fn bulleted_list<T>(
    items: &[T],
    placeholder: &str,
    fields: impl Fn(&T) -> (Option<String>, Option<String>),
) -> String {
    if items.is_empty() {
        return NONE_ITEM.to_string();
    }

    let mut out = String::new();
    for item in items {
        let (primary, secondary) = fields(item);
        out.push_str("* ");
        match primary {
            Some(primary) => {
                out.push_str("**");
                out.push_str(&primary);
                out.push_str("**");
            }
            None => out.push_str(placeholder),
        }
        if let Some(secondary) = secondary {
            out.push_str(" - ");
            out.push_str(&secondary);
        }
        out.push('\n');
    }
    out
}

/// Upper-case the first letter of every word, leaving the rest untouched.
///
/// `"Get pet by ID"` → `"Get Pet By ID"`
pub fn titleize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
