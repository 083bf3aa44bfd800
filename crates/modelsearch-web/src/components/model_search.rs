use std::time::Duration;

use leptos::prelude::*;
use modelsearch_core::{InputAction, Query, ResultItem, SearchWidget, WidgetConfig};
use wasm_bindgen::JsCast;

use crate::api;

/// Selector of the widget container; clicks outside it close the dropdown.
const WIDGET_SELECTOR: &str = ".ui.search";

/// Debounced model name autocomplete.
#[component]
pub fn ModelSearch(
    /// Debounce and endpoint settings
    #[prop(optional)]
    config: Option<WidgetConfig>,
    /// Placeholder text for the input
    #[prop(optional, default = "Search models...")]
    placeholder: &'static str,
    /// Widget state owned by the host page, e.g. to read the selected name
    #[prop(optional)]
    state: Option<RwSignal<SearchWidget>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let widget = state.unwrap_or_else(|| RwSignal::new(SearchWidget::new()));
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let endpoint = StoredValue::new(config.endpoint);
    let debounce = Duration::from_millis(config.debounce_ms);

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let action = widget.try_update(|w| w.on_input(&raw));

        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        timer.set_value(None);

        let Some(InputAction::Schedule(query)) = action else {
            return;
        };

        let fire = move || run_search(widget, endpoint.get_value(), query);
        match set_timeout_with_handle(fire, debounce) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => web_sys::console::warn_2(&"Could not schedule model search:".into(), &e),
        }
    };

    let click_listener = window_event_listener(leptos::ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(WIDGET_SELECTOR).ok().flatten())
            .is_some();
        if !inside && widget.with_untracked(|w| w.results_visible) {
            widget.update(|w| w.hide());
        }
    });
    on_cleanup(move || click_listener.remove());

    let results = move || {
        widget
            .with(|w| w.items.clone())
            .into_iter()
            .map(|item| view! { <ResultRow item=item widget=widget /> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="ui search">
            <input
                id="modelNameInput"
                class="prompt"
                type="text"
                placeholder=placeholder
                prop:value=move || widget.with(|w| w.input.clone())
                on:input=on_input
            />
            <div
                id="searchResults"
                class="results"
                style:display=move || if widget.with(|w| w.results_visible) { "block" } else { "none" }
            >
                <div class="ui relaxed divided list">{results}</div>
            </div>
        </div>
    }
}

#[component]
fn ResultRow(item: ResultItem, widget: RwSignal<SearchWidget>) -> impl IntoView {
    let ResultItem {
        name,
        description,
        labels,
    } = item;
    let selected = name.clone();

    view! {
        <div class="item" on:click=move |_| widget.update(|w| w.select(&selected))>
            <div class="content">
                <div class="header">{name}</div>
                <div class="description">
                    {description}
                    {labels
                        .into_iter()
                        .map(|label| view! { <span class="ui tiny label">{label}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

fn run_search(widget: RwSignal<SearchWidget>, endpoint: String, query: Query) {
    let Some(ticket) = widget.try_update(|w| w.begin_search()) else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        match api::search_models(&endpoint, &query).await {
            Ok(models) => widget.update(|w| {
                w.apply_results(ticket, &models);
            }),
            Err(e) => web_sys::console::error_1(&format!("Model search failed: {}", e).into()),
        }
    });
}
