use contracts::domain::a001_support_record::Record;
use contracts::enums::{RecordCategory, RecordStatus, SupportKind};
use leptos::prelude::*;

use crate::shared::date_utils::format_naive_date;

pub fn status_class(status: Option<RecordStatus>) -> &'static str {
    match status {
        Some(RecordStatus::Received) => "badge badge--received",
        Some(RecordStatus::InReview) => "badge badge--in-review",
        Some(RecordStatus::Forwarded) => "badge badge--forwarded",
        Some(RecordStatus::Completed) => "badge badge--completed",
        None => "badge badge--neutral",
    }
}

fn category_class(category: RecordCategory) -> &'static str {
    match category {
        RecordCategory::Complaint => "badge badge--complaint",
        RecordCategory::SupportRequest => "badge badge--support",
        RecordCategory::Unknown => "badge badge--neutral",
    }
}

fn support_class(kind: SupportKind) -> &'static str {
    match kind {
        SupportKind::Psychological => "badge badge--psychological",
        SupportKind::Legal => "badge badge--legal",
    }
}

/// One complaint or support request; `children` holds page-specific actions.
#[component]
pub fn RecordCard(record: Record, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let category = record.category();
    let support = record.kind.support_kind();
    let location = record.kind.location().map(str::to_string);
    let status_label = record.status.label().to_string();
    let status_css = status_class(record.status.known());
    let date = format_naive_date(record.occurred_date);

    view! {
        <div class="record-card">
            <div>
                <div class="record-card__badges">
                    <span class=category_class(category)>{category.display_name()}</span>
                    {support.map(|kind| view! {
                        <span class=support_class(kind)>{kind.display_name()}</span>
                    })}
                    <span class=status_css>{status_label}</span>
                </div>
                <h2 class="record-card__title">{record.title.clone()}</h2>
                <p class="record-card__description">{record.description.clone()}</p>
                <div class="record-card__meta">
                    <span>"Data: " {date}</span>
                </div>
                {location.map(|l| view! {
                    <div class="record-card__meta">
                        <span>"Local: " {l}</span>
                    </div>
                })}
            </div>
            <div class="record-card__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
