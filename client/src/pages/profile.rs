//! Profile page: show, create or delete the caller's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile service answers 404 until a profile exists, which this page
//! treats as "offer the create form". The form is prefilled from the signed-in
//! identity so most users only pick gender and age.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_field::FormField;
use crate::components::notice_bar::NoticeBar;
use crate::net::types::{Gender, NewProfile, UserProfile};
use crate::state::session::{Identity, SessionStore};
use crate::util::format::split_display_name;
use crate::util::notice::{NOTICE_TTL_MS, NoticeState, notify};

const DEFAULT_AGE: &str = "25";

/// Create-form input, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub age: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            gender: Gender::Male,
            age: DEFAULT_AGE.to_owned(),
        }
    }
}

impl ProfileDraft {
    /// Blank draft seeded from the identity: subject id, email and the
    /// display name split into first and last name.
    pub fn prefilled(identity: Option<&Identity>) -> Self {
        let mut draft = Self::default();
        if let Some(identity) = identity {
            draft.user_id = identity.subject_id().to_owned();
            draft.email = identity.email().to_owned();
            let (first, last) = split_display_name(identity.display_name());
            draft.first_name = first;
            draft.last_name = last;
        }
        draft
    }

    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<NewProfile, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err("Please fill in all required fields.");
        }
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| (1..=150).contains(age))
            .ok_or("Age must be between 1 and 150.")?;
        Ok(NewProfile {
            user_id: self.user_id.clone(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            gender: self.gender,
            age,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ProfileView {
    Loading,
    Missing,
    Loaded(UserProfile),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let profile = RwSignal::new(ProfileView::Loading);
    let draft = RwSignal::new(ProfileDraft::prefilled(session.read_untracked().identity()));
    let saving = RwSignal::new(false);
    let confirming_delete = RwSignal::new(false);
    let notices = RwSignal::new(NoticeState::default());
    #[cfg(feature = "hydrate")]
    let api = StoredValue::new(expect_context::<crate::app::PortalApi>());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api.get_value().get_profile().await {
            Ok(Some(found)) => profile.set(ProfileView::Loaded(found)),
            Ok(None) => profile.set(ProfileView::Missing),
            Err(err) => {
                log::warn!("profile load failed: {err}");
                profile.set(ProfileView::Missing);
                notify(notices, "Failed to load profile", NOTICE_TTL_MS);
            }
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let new_profile = match draft.with_untracked(ProfileDraft::validate) {
            Ok(new_profile) => new_profile,
            Err(message) => {
                notify(notices, message, NOTICE_TTL_MS);
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.create_profile(&new_profile).await {
                    Ok(created) => {
                        profile.set(ProfileView::Loaded(created));
                        notify(notices, "Profile created successfully", NOTICE_TTL_MS);
                    }
                    Err(err) => {
                        log::warn!("profile create failed: {err}");
                        notify(notices, "Failed to create profile", NOTICE_TTL_MS);
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = new_profile;
    };

    let on_delete_confirmed = {
        let session = session.clone();
        Callback::new(move |()| {
            confirming_delete.set(false);
            #[cfg(feature = "hydrate")]
            {
                let api = api.get_value();
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match api.delete_profile().await {
                        Ok(()) => {
                            profile.set(ProfileView::Missing);
                            draft.set(ProfileDraft::prefilled(session.read_untracked().identity()));
                            notify(notices, "Profile deleted successfully", NOTICE_TTL_MS);
                        }
                        Err(err) => {
                            log::warn!("profile delete failed: {err}");
                            notify(notices, "Failed to delete profile", NOTICE_TTL_MS);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &session;
        })
    };

    let draft_field = move |read: fn(&ProfileDraft) -> &String, write: fn(&mut ProfileDraft, String)| {
        (
            Signal::derive(move || draft.with(|d| read(d).clone())),
            Callback::new(move |value: String| draft.update(|d| write(d, value))),
        )
    };
    let (first_name, set_first_name) = draft_field(|d| &d.first_name, |d, v| d.first_name = v);
    let (last_name, set_last_name) = draft_field(|d| &d.last_name, |d, v| d.last_name = v);
    let (email, set_email) = draft_field(|d| &d.email, |d, v| d.email = v);
    let (age, set_age) = draft_field(|d| &d.age, |d, v| d.age = v);

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || match profile.get() {
                ProfileView::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                ProfileView::Loaded(p) => {
                    view! {
                        <section class="card">
                            <h2>{format!("{} {}", p.first_name, p.last_name)}</h2>
                            <p class="card__subtitle">{p.email.clone()}</p>
                            <div class="profile-details">
                                <p><strong>"User ID: "</strong>{p.user_id.clone()}</p>
                                <p><strong>"Gender: "</strong>{p.gender.label()}</p>
                                <p><strong>"Age: "</strong>{p.age}</p>
                            </div>
                            <div class="card__actions">
                                <button class="btn btn--danger" on:click=move |_| confirming_delete.set(true)>
                                    "Delete Profile"
                                </button>
                            </div>
                        </section>
                    }
                        .into_any()
                }
                ProfileView::Missing => {
                    view! {
                        <section class="card">
                            <h2>"Create Profile"</h2>
                            <p class="card__subtitle">"Fill in your details to create a profile"</p>
                            <form class="profile-form" on:submit=on_create>
                                <FormField label="First Name" value=first_name on_input=set_first_name/>
                                <FormField label="Last Name" value=last_name on_input=set_last_name/>
                                <FormField label="Email" kind="email" value=email on_input=set_email/>
                                <label class="form-field">
                                    <span class="form-field__label">"Gender"</span>
                                    <select
                                        class="form-field__input"
                                        on:change=move |ev| {
                                            if let Some(gender) = Gender::from_wire(&event_target_value(&ev)) {
                                                draft.update(|d| d.gender = gender);
                                            }
                                        }
                                    >
                                        {Gender::ALL
                                            .into_iter()
                                            .map(|g| {
                                                view! {
                                                    <option
                                                        value=g.as_wire()
                                                        selected=move || draft.with(|d| d.gender == g)
                                                    >
                                                        {g.label()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </label>
                                <FormField label="Age" kind="number" value=age on_input=set_age/>
                                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Create Profile" }}
                                </button>
                            </form>
                        </section>
                    }
                        .into_any()
                }
            }}
            <Show when=move || confirming_delete.get()>
                <ConfirmDialog
                    title="Delete Profile"
                    message="Are you sure you want to delete your profile? This action cannot be undone."
                    confirm_label="Delete"
                    on_confirm=on_delete_confirmed
                    on_cancel=Callback::new(move |()| confirming_delete.set(false))
                />
            </Show>
            <NoticeBar notices=notices/>
        </div>
    }
}
