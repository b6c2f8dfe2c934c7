use contracts::domain::a001_support_record::Record;
use contracts::enums::RecordStatus;
use leptos::prelude::*;

use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;

/// Picks a new display status for `record`; `on_save` receives the label.
#[component]
pub fn StatusEditModal(
    record: Record,
    on_close: Callback<()>,
    on_save: Callback<(Record, String)>,
) -> impl IntoView {
    let toasts = use_toasts();
    let current = record.status.label().to_string();
    let (selected, set_selected) = signal(
        record
            .status
            .known()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default(),
    );
    let record_for_save = StoredValue::new(record.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let status = selected.get_untracked();
        if status.is_empty() {
            toasts.error("Por favor, selecione um status.");
            return;
        }
        on_save.run((record_for_save.get_value(), status));
        on_close.run(());
    };

    view! {
        <Modal title="Editar Status do Item".to_string() on_close=on_close>
            <div class="modal-summary">
                <p class="modal-summary__title">"Item: " {record.title.clone()}</p>
                <p>"Tipo: " {record.category().display_name()}</p>
                <p>"Status Atual: " {current}</p>
            </div>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="status-select">"Novo Status:"</label>
                    <select
                        id="status-select"
                        required
                        prop:value=move || selected.get()
                        on:change=move |ev| set_selected.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Selecione um status"</option>
                        {RecordStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.display_name()>{s.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary">"Salvar Status"</button>
                </div>
            </form>
        </Modal>
    }
}
