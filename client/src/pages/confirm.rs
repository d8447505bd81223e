//! Email confirmation landing page (`/confirm?token=...`).

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::error::ApiError;
use crate::routing::table::{LOGIN_PATH, REGISTER};

pub const MISSING_TOKEN: &str = "Invalid confirmation link. No token provided.";
pub const CONFIRM_FALLBACK: &str = "Failed to confirm email. The link may have expired.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Pending,
    Confirmed,
    Failed(String),
}

impl ConfirmOutcome {
    pub fn from_result<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Confirmed,
            Err(err) => Self::Failed(err.user_message(CONFIRM_FALLBACK)),
        }
    }
}

/// The token to confirm, or the failure to show without making a request.
pub fn confirm_token(raw: Option<String>) -> Result<String, ConfirmOutcome> {
    raw.map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ConfirmOutcome::Failed(MISSING_TOKEN.to_owned()))
}

#[component]
pub fn ConfirmPage() -> impl IntoView {
    let query = use_query_map();
    let outcome = RwSignal::new(ConfirmOutcome::Pending);

    match confirm_token(query.with_untracked(|q| q.get("token"))) {
        Err(failed) => outcome.set(failed),
        Ok(token) => {
            #[cfg(feature = "hydrate")]
            {
                let api = expect_context::<crate::app::PortalApi>();
                leptos::task::spawn_local(async move {
                    let result = api.confirm(&token).await;
                    if let Err(err) = &result {
                        log::warn!("email confirmation failed: {err}");
                    }
                    outcome.set(ConfirmOutcome::from_result(&result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = token;
        }
    }

    view! {
        <div class="confirm-page">
            <div class="confirm-card">
                {move || match outcome.get() {
                    ConfirmOutcome::Pending => {
                        view! {
                            <div class="confirm-status">
                                <h3>"Confirming your email..."</h3>
                            </div>
                        }
                            .into_any()
                    }
                    ConfirmOutcome::Confirmed => {
                        view! {
                            <div class="confirm-status confirm-status--success">
                                <h3>"Email Confirmed!"</h3>
                                <p>"Your email has been verified successfully."</p>
                                <p class="confirm-status__hint">
                                    "Please check your email for a link to set your password."
                                </p>
                                <a class="btn btn--primary" href=LOGIN_PATH>"Go to Login"</a>
                            </div>
                        }
                            .into_any()
                    }
                    ConfirmOutcome::Failed(message) => {
                        view! {
                            <div class="confirm-status confirm-status--error">
                                <h3>"Confirmation Failed"</h3>
                                <p>{message}</p>
                                <a class="btn btn--primary" href=REGISTER.path()>"Try Again"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
