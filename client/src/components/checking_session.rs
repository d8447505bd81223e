//! Placeholder shown while the startup resolution is still in flight.

use leptos::prelude::*;

#[component]
pub fn CheckingSession() -> impl IntoView {
    view! {
        <div class="checking-session">
            <div class="checking-session__spinner"></div>
            <p>"Checking authentication..."</p>
        </div>
    }
}
