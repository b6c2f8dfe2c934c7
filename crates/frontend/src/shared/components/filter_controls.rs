use contracts::enums::RecordStatus;
use contracts::shared::filters::FilterField;
use leptos::prelude::*;

use crate::shared::url_filters::UrlFilters;

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Date and status filters of a listing page, each with its own clear button
#[component]
pub fn FilterControls(filters: UrlFilters) -> impl IntoView {
    let date = move || filters.state().date.unwrap_or_default();
    let status = move || filters.state().status.unwrap_or_default();

    view! {
        <div class="filter-controls">
            <div class="filter-controls__item">
                <label for="date-filter">"Data:"</label>
                <input
                    type="date"
                    id="date-filter"
                    prop:value=date
                    on:change=move |ev| filters.set_filter(FilterField::Date, &event_target_value(&ev))
                />
                <Show when=move || !date().is_empty()>
                    <button class="button button--danger" on:click=move |_| filters.clear_filter(FilterField::Date)>
                        "Limpar"
                    </button>
                </Show>
            </div>

            <div class="filter-controls__item">
                <label for="status-filter">"Status:"</label>
                <select
                    id="status-filter"
                    prop:value=status
                    on:change=move |ev| filters.set_filter(FilterField::Status, &event_target_value(&ev))
                >
                    <option value="">"Todos"</option>
                    {RecordStatus::all()
                        .into_iter()
                        .map(|s| {
                            let label = s.display_name();
                            view! { <option value=label>{capitalize(label)}</option> }
                        })
                        .collect_view()}
                </select>
                <Show when=move || !status().is_empty()>
                    <button class="button button--danger" on:click=move |_| filters.clear_filter(FilterField::Status)>
                        "Limpar"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("em análise"), "Em análise");
        assert_eq!(capitalize(""), "");
    }
}
