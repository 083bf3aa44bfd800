use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use modelsearch_client::SearchView;
use modelsearch_core::{ResultItem, SearchWidget};

/// Prints the dropdown whenever what it shows changes.
#[derive(Default)]
pub struct TerminalView {
    shown: Mutex<Option<Vec<ResultItem>>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchView for TerminalView {
    fn render(&self, widget: &SearchWidget) {
        let next = widget.results_visible.then(|| widget.items.clone());
        let mut shown = self.shown.lock().unwrap_or_else(PoisonError::into_inner);
        if *shown == next {
            return;
        }

        let mut stdout = io::stdout();
        match &next {
            Some(items) => {
                let _ = write!(stdout, "\n{}", format_items(items));
            }
            None if shown.is_some() => {
                let _ = writeln!(stdout, "  (results hidden)");
            }
            None => {}
        }
        let _ = write!(stdout, "> ");
        let _ = stdout.flush();
        *shown = next;
    }
}

/// Numbered listing: name, then the description and labels on one line.
pub fn format_items(items: &[ResultItem]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {:<4} {}\n", i + 1, item.name));

        let mut detail: Vec<String> = item.description.iter().cloned().collect();
        detail.extend(item.labels.iter().map(|l| format!("[{}]", l)));
        if !detail.is_empty() {
            out.push_str(&format!("       {}\n", detail.join(" ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_items() {
        let items = vec![
            ResultItem {
                name: "llama3".to_string(),
                description: Some("A model".to_string()),
                labels: vec!["8B".to_string(), "llama".to_string()],
            },
            ResultItem {
                name: "mistral".to_string(),
                description: None,
                labels: Vec::new(),
            },
        ];
        let text = format_items(&items);
        assert_eq!(
            text,
            "  1    llama3\n       A model [8B] [llama]\n  2    mistral\n"
        );
    }
}
