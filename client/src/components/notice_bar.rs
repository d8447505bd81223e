//! Snackbar rendering the current notice, if any.

use leptos::prelude::*;

use crate::util::notice::NoticeState;

/// Bottom-of-page notice with a manual dismiss button.
#[component]
pub fn NoticeBar(notices: RwSignal<NoticeState>) -> impl IntoView {
    let text = move || notices.with(|s| s.text().map(str::to_owned));
    let on_dismiss = move |_| {
        let id = notices.with_untracked(|s| s.current.as_ref().map(|n| n.id));
        if let Some(id) = id {
            notices.update(|s| {
                s.dismiss(id);
            });
        }
    };

    view! {
        <Show when=move || text().is_some()>
            <div class="notice-bar" role="status">
                <span class="notice-bar__text">{move || text().unwrap_or_default()}</span>
                <button class="btn notice-bar__close" on:click=on_dismiss>"Close"</button>
            </div>
        </Show>
    }
}
