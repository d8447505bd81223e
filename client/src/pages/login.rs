//! Login page: resolve an existing session or hand off to the BFF.
//!
//! SYSTEM CONTEXT
//! ==============
//! The BFF owns the identity-provider handshake. This page only asks the
//! resolver whether a session already exists; if so it forwards to the
//! dashboard, otherwise it offers the full-page sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::BffConfig;
use crate::net::bff;
use crate::routing::table::REGISTER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    Checking,
    SignedOut,
    Redirecting,
}

impl LoginPhase {
    pub fn after_resolve(resolved: bool) -> Self {
        if resolved { Self::Redirecting } else { Self::SignedOut }
    }

    pub fn shows_sign_in(self) -> bool {
        matches!(self, Self::SignedOut)
    }

    pub fn status_text(self) -> &'static str {
        match self {
            Self::Checking => "Checking authentication...",
            Self::SignedOut => "",
            Self::Redirecting => "Signed in. Redirecting...",
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<BffConfig>();
    let phase = RwSignal::new(LoginPhase::Checking);

    #[cfg(feature = "hydrate")]
    {
        let resolver = expect_context::<crate::app::PortalResolver>();
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            let resolved = resolver.resolve().await.is_ok();
            phase.set(LoginPhase::after_resolve(resolved));
            if resolved {
                let options = leptos_router::NavigateOptions { replace: true, ..Default::default() };
                navigate(crate::routing::table::HOME_PATH, options);
            }
        });
    }

    let on_sign_in = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        bff::begin_login(&config);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SEC Microservice"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <Show
                    when=move || phase.get().shows_sign_in()
                    fallback=move || view! { <p class="login-message">{move || phase.get().status_text()}</p> }
                >
                    <button class="btn btn--primary login-button" on:click=on_sign_in.clone()>
                        "Sign in"
                    </button>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">
                        "No account yet? "
                        <a href=REGISTER.path()>"Register"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
