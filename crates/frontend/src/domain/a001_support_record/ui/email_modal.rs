use contracts::domain::a001_support_record::{ForwardEmailDraft, Record};
use leptos::prelude::*;

use crate::shared::modal::Modal;

/// What the forward dialog hands back to the page
#[derive(Debug, Clone)]
pub struct ForwardForm {
    pub record: Record,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// E-mail forward dialog, pre-filled from the record
#[component]
pub fn EmailModal(
    record: Record,
    on_close: Callback<()>,
    on_send: Callback<ForwardForm>,
) -> impl IntoView {
    let draft = ForwardEmailDraft::for_record(&record);
    let (to, set_to) = signal(String::new());
    let (subject, set_subject) = signal(draft.subject);
    let (body, set_body) = signal(draft.body);
    let record = StoredValue::new(record);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_send.run(ForwardForm {
            record: record.get_value(),
            to: to.get_untracked(),
            subject: subject.get_untracked(),
            body: body.get_untracked(),
        });
    };

    view! {
        <Modal title="Encaminhar por Email".to_string() on_close=on_close>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="recipient">"Email do Destinatário:"</label>
                    <input
                        type="email"
                        id="recipient"
                        required
                        placeholder="destinatario@exemplo.com"
                        prop:value=move || to.get()
                        on:input=move |ev| set_to.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="subject">"Assunto:"</label>
                    <input
                        type="text"
                        id="subject"
                        required
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="body">"Mensagem:"</label>
                    <textarea
                        id="body"
                        rows="10"
                        required
                        prop:value=move || body.get()
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary">"Enviar Email"</button>
                </div>
            </form>
        </Modal>
    }
}
