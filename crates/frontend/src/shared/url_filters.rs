//! Binds a `FilterController` to the router location.
//!
//! User changes go through `set_filter`/`clear_filter`, which commit the state
//! and write the URL in the same call. Back/forward and direct navigation are
//! picked up by a read-only effect.

use std::rc::Rc;

use contracts::shared::filters::{
    CategoryTable, FilterController, FilterField, FilterState, UrlUpdate, UrlWriter,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Router-backed URL writer
#[derive(Clone)]
pub struct RouterUrlWriter {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterUrlWriter {
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |url: &str, options: NavigateOptions| navigate(url, options)),
        }
    }
}

impl UrlWriter for RouterUrlWriter {
    fn replace(&self, url: &str) {
        (self.navigate)(
            url,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    }

    fn navigate(&self, url: &str) {
        (self.navigate)(url, NavigateOptions::default());
    }
}

#[derive(Clone, Copy)]
pub struct UrlFilters {
    controller: RwSignal<FilterController>,
    writer: StoredValue<RouterUrlWriter, LocalStorage>,
}

impl UrlFilters {
    /// Current filters (tracked)
    pub fn state(&self) -> FilterState {
        self.controller.with(|c| c.state().clone())
    }

    pub fn active_category(&self) -> String {
        self.controller.with(|c| c.state().active_category.clone())
    }

    pub fn set_filter(&self, field: FilterField, value: &str) {
        let update = self
            .controller
            .try_maybe_update(|c| {
                let update = c.apply(field, value);
                (update != UrlUpdate::Unchanged, update)
            })
            .unwrap_or(UrlUpdate::Unchanged);
        self.writer.with_value(|writer| update.write_to(writer));
    }

    pub fn clear_filter(&self, field: FilterField) {
        self.set_filter(field, "");
    }

    pub fn select_category(&self, label: &str) {
        self.set_filter(FilterField::ActiveCategory, label);
    }
}

pub fn use_url_filters(table: CategoryTable) -> UrlFilters {
    let location = use_location();
    let controller = RwSignal::new(FilterController::init_from_url(
        table,
        &location.search.get_untracked(),
        &location.pathname.get_untracked(),
    ));
    let writer = StoredValue::new_local(RouterUrlWriter::from_router());

    Effect::new(move |_| {
        let search = location.search.get();
        let pathname = location.pathname.get();
        controller.maybe_update(|c| c.sync_from_url(&search, &pathname));
    });

    UrlFilters { controller, writer }
}
