use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::model_search::ModelSearch;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="content">
                <div class="form-group">
                    <label for="modelNameInput">"Model"</label>
                    <ModelSearch />
                </div>
            </main>
        </div>
    }
}
