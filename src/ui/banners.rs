use crate::domain::ports::{Document, Element};

const LOADING_HTML: &str = r#"<div class="flex items-center justify-center p-4"><div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div></div>"#;

pub fn loading_html() -> &'static str {
    LOADING_HTML
}

/// Red error box around `message`.
pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="bg-red-50 border border-red-200 rounded-lg p-4 text-red-800">{}</div>"#,
        escape_html(message)
    )
}

/// Green success box around `message`.
pub fn success_html(message: &str) -> String {
    format!(
        r#"<div class="bg-green-50 border border-green-200 rounded-lg p-4 text-green-800">{}</div>"#,
        escape_html(message)
    )
}

// Banner helpers. Each one is a no-op when the element is missing.

pub fn show_loading<D: Document>(document: &mut D, element_id: &str) {
    render(document, element_id, LOADING_HTML);
}

pub fn show_error<D: Document>(document: &mut D, element_id: &str, message: &str) {
    render(document, element_id, &error_html(message));
}

pub fn show_success<D: Document>(document: &mut D, element_id: &str, message: &str) {
    render(document, element_id, &success_html(message));
}

fn render<D: Document>(document: &mut D, element_id: &str, html: &str) {
    match document.element_by_id(element_id) {
        Some(element) => element.set_inner_html(html),
        None => tracing::debug!("No element with id '{}', skipping banner", element_id),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
