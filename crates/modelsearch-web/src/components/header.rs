use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Model Search"</h1>
            <span class="subtitle">"Find a model in the Ollama library"</span>
        </header>
    }
}
