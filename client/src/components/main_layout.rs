//! Authenticated shell: navigation, signed-in user and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered as the view of the protected parent route, so every child page
//! appears inside its `<Outlet/>`. Only mounted once the gate has admitted the
//! session.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::config::BffConfig;
use crate::net::bff;
use crate::routing::table;
use crate::state::session::SessionStore;

const NAV_ITEMS: [(&str, table::RouteEntry); 3] =
    [("Dashboard", table::DASHBOARD), ("Profile", table::PROFILE), ("Orders", table::ORDERS)];

#[component]
pub fn MainLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<BffConfig>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(true);

    let username = {
        let session = session.clone();
        move || {
            session
                .identity()
                .map(|identity| identity.username().to_owned())
                .unwrap_or_default()
        }
    };

    let on_logout = move |_| bff::end_session(&config, &session);

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || !menu_open.get()>
            <header class="app-shell__toolbar">
                <button
                    class="btn app-shell__menu-toggle"
                    title="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
                <span class="app-shell__title">"SEC Microservice"</span>
                <span class="app-shell__spacer"></span>
                <span class="app-shell__user">{username}</span>
                <button class="btn app-shell__logout" on:click=on_logout>"Logout"</button>
            </header>
            <div class="app-shell__body">
                <nav class="app-shell__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, route)| {
                            view! {
                                <a
                                    href=route.path()
                                    class="app-shell__nav-link"
                                    class:app-shell__nav-link--active=move || {
                                        table::classify(&pathname.get()) == Some(&route)
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
