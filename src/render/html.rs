/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Only `http`, `https`, `mailto` and site-relative URLs are rendered as
/// links; anything else collapses to `#`.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let allowed = lowered.starts_with("http://")
        || lowered.starts_with("https://")
        || lowered.starts_with("mailto:")
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));
    if allowed {
        escape(trimmed)
    } else {
        "#".to_string()
    }
}

pub fn is_external(url: &str) -> bool {
    let lowered = url.trim().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

/// `<a>` with escaped text; external targets open in a new tab.
pub fn link(url: &str, text: &str, class: &str) -> String {
    let target = if is_external(url) {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}" class="{}"{}>{}</a>"#,
        safe_href(url),
        escape(class),
        target,
        escape(text)
    )
}
