//! Headless autocomplete state.
//!
//! `SearchWidget` owns what the user sees (field text, dropdown visibility and
//! items) and decides what each event means. It never touches a timer or the
//! network: the browser component and the native controller own those and
//! feed the outcomes back in.

use crate::{Query, ResultItem, SearchResult};

/// What the front end must do after an input event. Any pending search timer
/// is cancelled in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Field is blank: the dropdown is already hidden, nothing is scheduled.
    Hide,
    /// Start the quiet-period timer for this query.
    Schedule(Query),
}

/// Identifies one issued search. Only the newest ticket may update the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Autocomplete state: owns the field text and the dropdown.
#[derive(Debug, Clone, Default)]
pub struct SearchWidget {
    /// Current text of the input field
    pub input: String,
    /// Whether the results container is shown
    pub results_visible: bool,
    /// Items from the last applied response
    pub items: Vec<ResultItem>,
    latest: u64,
}

impl SearchWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a keystroke. The caller cancels its pending timer, then either
    /// does nothing more (`Hide`) or schedules a search (`Schedule`).
    pub fn on_input(&mut self, raw: &str) -> InputAction {
        self.input = raw.to_string();
        self.invalidate();

        match Query::parse(raw) {
            Some(query) => InputAction::Schedule(query),
            None => {
                self.hide();
                InputAction::Hide
            }
        }
    }

    /// Called when the quiet period elapses, just before the request goes out.
    pub fn begin_search(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a successful response. Returns `false` and leaves the dropdown
    /// alone when a newer search or a user action has superseded `ticket`.
    pub fn apply_results(&mut self, ticket: RequestTicket, results: &[SearchResult]) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.show_results(results);
        true
    }

    /// Renders `results` into the dropdown. An empty list hides it.
    pub fn show_results(&mut self, results: &[SearchResult]) {
        if results.is_empty() {
            self.hide();
            return;
        }
        self.items = results.iter().map(ResultItem::from).collect();
        self.results_visible = true;
    }

    /// Puts `name` in the field and closes the dropdown. No new search starts.
    pub fn select(&mut self, name: &str) {
        self.input = name.to_string();
        self.invalidate();
        self.hide();
    }

    /// Picks the item at `index` in the current dropdown.
    pub fn select_index(&mut self, index: usize) -> Option<String> {
        let name = self.items.get(index)?.name.clone();
        self.select(&name);
        Some(name)
    }

    /// Document-wide click. Clicks outside the widget close the dropdown.
    pub fn on_document_click(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.hide();
        }
    }

    pub fn hide(&mut self) {
        self.results_visible = false;
    }

    // Outstanding requests must not reopen the dropdown after the user moved on.
    fn invalidate(&mut self) {
        self.latest += 1;
    }
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

    fn shown() -> SearchWidget {
        let mut widget = SearchWidget::new();
        widget.on_input("lla");
        let ticket = widget.begin_search();
        assert!(widget.apply_results(ticket, &[llama3()]));
        widget
    }

    #[test]
    fn test_blank_input_hides_immediately() {
        let mut widget = shown();
        assert!(widget.results_visible);
        assert_eq!(widget.on_input("   "), InputAction::Hide);
        assert!(!widget.results_visible);
    }

    #[test]
    fn test_input_schedules_trimmed_query() {
        let mut widget = SearchWidget::new();
        let action = widget.on_input(" llama ");
        assert_eq!(action, InputAction::Schedule(Query::parse("llama").unwrap()));
        assert_eq!(widget.input, " llama ");
    }

    #[test]
    fn test_results_shown() {
        let widget = shown();
        assert!(widget.results_visible);
        assert_eq!(widget.items.len(), 1);
        assert_eq!(widget.items[0].name, "llama3");
        assert_eq!(widget.items[0].description.as_deref(), Some("A model"));
    }

    #[test]
    fn test_empty_results_hide() {
        let mut widget = shown();
        widget.on_input("zzz");
        let ticket = widget.begin_search();
        assert!(widget.apply_results(ticket, &[]));
        assert!(!widget.results_visible);
    }

    #[test]
    fn test_select_fills_input_and_hides() {
        let mut widget = shown();
        widget.select("llama3");
        assert_eq!(widget.input, "llama3");
        assert!(!widget.results_visible);
    }

    #[test]
    fn test_select_index() {
        let mut widget = shown();
        assert_eq!(widget.select_index(3), None);
        assert!(widget.results_visible);
        assert_eq!(widget.select_index(0).as_deref(), Some("llama3"));
        assert_eq!(widget.input, "llama3");
        assert!(!widget.results_visible);
    }

    #[test]
    fn test_outside_click_hides() {
        let mut widget = shown();
        widget.on_document_click(true);
        assert!(widget.results_visible);
        widget.on_document_click(false);
        assert!(!widget.results_visible);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut widget = SearchWidget::new();
        widget.on_input("l");
        let first = widget.begin_search();
        widget.on_input("ll");
        let second = widget.begin_search();

        assert!(widget.apply_results(second, &[SearchResult::named("llava")]));
        assert!(!widget.apply_results(first, &[llama3()]));
        assert_eq!(widget.items[0].name, "llava");
    }

    #[test]
    fn test_response_after_selection_ignored() {
        let mut widget = SearchWidget::new();
        widget.on_input("llama");
        let ticket = widget.begin_search();
        widget.select("llama3");
        assert!(!widget.apply_results(ticket, &[llama3()]));
        assert!(!widget.results_visible);
    }
}
