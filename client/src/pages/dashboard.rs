//! Dashboard: welcome card plus profile and order summaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Both summaries are best effort: a failed call
//! reads as "no profile" or zero orders rather than an error screen. A 401
//! still ends the session through the interceptor.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::routing::table::{ORDERS, PROFILE};
use crate::state::session::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub has_profile: bool,
    pub order_count: usize,
}

/// Load both summaries, collapsing failures to defaults.
pub async fn load_stats<T: Transport>(api: &ApiClient<T>) -> DashboardStats {
    let has_profile = match api.get_profile().await {
        Ok(profile) => profile.is_some(),
        Err(err) => {
            log::debug!("dashboard profile lookup failed: {err}");
            false
        }
    };
    let order_count = match api.list_orders().await {
        Ok(orders) => orders.len(),
        Err(err) => {
            log::debug!("dashboard order lookup failed: {err}");
            0
        }
    };
    DashboardStats { has_profile, order_count }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let stats = RwSignal::new(DashboardStats::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::app::PortalApi>();
        leptos::task::spawn_local(async move {
            stats.set(load_stats(&api).await);
        });
    }

    let greeting = {
        let session = session.clone();
        move || session.identity().map(|i| i.greeting_name().to_owned()).unwrap_or_default()
    };
    let email = move || session.identity().map(|i| i.email().to_owned()).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <section class="card card--welcome">
                <h2>"Welcome, " {greeting} "!"</h2>
                <p class="card__subtitle">{email}</p>
            </section>
            <div class="dashboard-page__grid">
                <section class="card">
                    <h3>"Profile"</h3>
                    <p>
                        {move || {
                            if stats.get().has_profile { "Profile created" } else { "No profile yet" }
                        }}
                    </p>
                    <a class="btn" href=PROFILE.path()>
                        {move || if stats.get().has_profile { "View Profile" } else { "Create Profile" }}
                    </a>
                </section>
                <section class="card">
                    <h3>"Orders"</h3>
                    <p class="card__metric">{move || stats.get().order_count}</p>
                    <a class="btn" href=ORDERS.path()>"View Orders"</a>
                </section>
            </div>
        </div>
    }
}
