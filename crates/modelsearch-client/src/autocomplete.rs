//! Native driver for [`SearchWidget`]: debounce timer, background searches and
//! a view that is redrawn after every state change.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use modelsearch_core::{InputAction, Query, SearchWidget, WidgetConfig};
use tracing::{debug, warn};

use crate::client::SearchClient;
use crate::debounce::Debouncer;

/// Presentation side of the widget.
pub trait SearchView: Send + Sync {
    fn render(&self, widget: &SearchWidget);
}

pub struct Autocomplete<C, V> {
    inner: Arc<Inner<C, V>>,
}

struct Inner<C, V> {
    widget: Mutex<SearchWidget>,
    client: C,
    view: V,
    debouncer: Debouncer,
}

impl<C, V> Clone for Autocomplete<C, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C, V> Autocomplete<C, V>
where
    C: SearchClient + 'static,
    V: SearchView + 'static,
{
    pub fn new(client: C, view: V, config: &WidgetConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                widget: Mutex::new(SearchWidget::new()),
                client,
                view,
                debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            }),
        }
    }

    /// Input event with the full field content.
    pub fn input(&self, raw: &str) {
        let action = self.update(|w| w.on_input(raw));
        self.inner.debouncer.cancel();

        let InputAction::Schedule(query) = action else {
            return;
        };

        let this = self.clone();
        self.inner.debouncer.schedule(move || {
            tokio::spawn(async move { this.run_search(query).await });
        });
    }

    /// Issues one search and applies its outcome. Failures are logged and
    /// leave the dropdown as it was.
    pub async fn run_search(&self, query: Query) {
        let ticket = self.widget().begin_search();

        let models = match self.inner.client.search(&query).await {
            Ok(models) => models,
            Err(e) => {
                warn!("Model search for '{}' failed: {}", query, e);
                return;
            }
        };

        let applied = self.update(|w| w.apply_results(ticket, &models));
        if !applied {
            debug!("Dropping superseded results for '{}'", query);
        }
    }

    pub fn select(&self, name: &str) {
        self.update(|w| w.select(name));
    }

    /// Selects the `index`th visible item, returning its name.
    pub fn select_index(&self, index: usize) -> Option<String> {
        self.update(|w| w.select_index(index))
    }

    pub fn document_click(&self, inside_widget: bool) {
        self.update(|w| w.on_document_click(inside_widget));
    }

    pub fn is_pending(&self) -> bool {
        self.inner.debouncer.is_pending()
    }

    pub fn snapshot(&self) -> SearchWidget {
        self.widget().clone()
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    fn widget(&self) -> MutexGuard<'_, SearchWidget> {
        self.inner
            .widget
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn update<T>(&self, f: impl FnOnce(&mut SearchWidget) -> T) -> T {
        let mut widget = self.widget();
        let out = f(&mut *widget);
        self.inner.view.render(&*widget);
        out
    }
}
