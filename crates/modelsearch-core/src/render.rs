//! Results list rendering.
//!
//! The dropdown is described as a list of [`ResultItem`]s so that each front end
//! can build it with its own escaping-aware view layer. [`results_html`] is the
//! plain markup form used outside the browser.

use crate::SearchResult;

/// One dropdown entry: the header line and the description line beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Header text, and the value written to the input on selection.
    pub name: String,
    pub description: Option<String>,
    /// Tiny labels after the description: model size first, then family.
    pub labels: Vec<String>,
}

impl From<&SearchResult> for ResultItem {
    fn from(result: &SearchResult) -> Self {
        let labels = [&result.model_size, &result.family]
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        Self {
            name: result.name.clone(),
            description: result.description.clone(),
            labels,
        }
    }
}

impl ResultItem {
    fn write_html(&self, out: &mut String) {
        let name = escape_html(&self.name);
        out.push_str(&format!(
            r#"<div class="item" data-model-name="{name}"><div class="content"><div class="header">{name}</div><div class="description">"#
        ));
        if let Some(description) = &self.description {
            out.push_str(&escape_html(description));
        }
        for label in &self.labels {
            out.push_str(&format!(
                r#"<span class="ui tiny label">{}</span>"#,
                escape_html(label)
            ));
        }
        out.push_str("</div></div></div>");
    }
}

/// Markup for the dropdown. Items carry their model name in `data-model-name`
/// rather than an inline handler.
pub fn results_html(results: &[SearchResult]) -> String {
    let mut out = String::from(r#"<div class="ui relaxed divided list">"#);
    for result in results {
        ResultItem::from(result).write_html(&mut out);
    }
    out.push_str("</div>");
    out
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llama3() -> SearchResult {
        SearchResult {
            name: "llama3".to_string(),
            description: Some("A model".to_string()),
            model_size: Some("8B".to_string()),
            family: Some("llama".to_string()),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_item_labels_in_order() {
        let item = ResultItem::from(&llama3());
        assert_eq!(item.labels, vec!["8B".to_string(), "llama".to_string()]);
    }

    #[test]
    fn test_item_skips_missing_labels() {
        let result = SearchResult {
            family: Some("qwen".to_string()),
            ..SearchResult::named("qwen2")
        };
        let item = ResultItem::from(&result);
        assert_eq!(item.labels, vec!["qwen".to_string()]);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_html_contains_all_fields() {
        let html = results_html(&[llama3()]);
        assert!(html.contains(r#"<div class="header">llama3</div>"#));
        assert!(html.contains("A model"));
        assert!(html.contains(r#"<span class="ui tiny label">8B</span>"#));
        assert!(html.contains(r#"<span class="ui tiny label">llama</span>"#));
        assert!(html.contains(r#"data-model-name="llama3""#));
    }

    #[test]
    fn test_html_escapes_server_text() {
        let result = SearchResult {
            description: Some("<script>alert(1)</script>".to_string()),
            ..SearchResult::named(r#"x" onclick="evil()"#)
        };
        let html = results_html(&[result]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"data-model-name="x&quot; onclick=&quot;evil()""#));
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("llama3:8b"), "llama3:8b");
        assert_eq!(escape_html("a & b's"), "a &amp; b&#x27;s");
    }
}
