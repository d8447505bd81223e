//! Self-service registration against the public profile endpoint.
//!
//! The account is created disabled; the user confirms through the emailed
//! link, which lands on the confirm page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::notice_bar::NoticeBar;
use crate::net::types::{Gender, RegisterRequest};
use crate::routing::table::LOGIN_PATH;
use crate::util::notice::{NOTICE_TTL_LONG_MS, NoticeState, notify};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// Raw form input, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub gender: Gender,
    pub age: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            password: String::new(),
            gender: Gender::Male,
            age: "25".to_owned(),
        }
    }
}

/// Free-text inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    MobileNumber,
    Password,
    Age,
}

impl RegisterForm {
    pub fn value(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::MobileNumber => &self.mobile_number,
            TextField::Password => &self.password,
            TextField::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::MobileNumber => &mut self.mobile_number,
            TextField::Password => &mut self.password,
            TextField::Age => &mut self.age,
        };
        *slot = value;
    }

    /// Build the request body. The email doubles as the username.
    ///
    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err("Please fill in all required fields.");
        }
        if !email.contains('@') {
            return Err("Enter a valid email address.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters.");
        }
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| (1..=150).contains(age))
            .ok_or("Age must be between 1 and 150.")?;
        let mobile = self.mobile_number.trim();

        Ok(RegisterRequest {
            username: email.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            mobile_number: (!mobile.is_empty()).then(|| mobile.to_owned()),
            gender: self.gender,
            age,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let submitting = RwSignal::new(false);
    let registered_email = RwSignal::new(None::<String>);
    let show_password = RwSignal::new(false);
    let notices = RwSignal::new(NoticeState::default());
    #[cfg(feature = "hydrate")]
    let api = StoredValue::new(expect_context::<crate::app::PortalApi>());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match form.with_untracked(RegisterForm::validate) {
            Ok(request) => request,
            Err(message) => {
                notify(notices, message, NOTICE_TTL_LONG_MS);
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.register(&request).await {
                    Ok(resp) => registered_email.set(Some(resp.email)),
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        notify(
                            notices,
                            err.user_message(REGISTER_FALLBACK),
                            NOTICE_TTL_LONG_MS,
                        );
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let text_input = move |label: &'static str, kind: &'static str, field: TextField| {
        let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
        let on_input = Callback::new(move |v: String| form.update(|f| f.set(field, v)));
        view! { <FormField label=label kind=kind value=value on_input=on_input/> }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create Account"</h1>
                <Show
                    when=move || registered_email.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="register-success">
                                <h3>"Registration Successful!"</h3>
                                <p>"Please check your email to confirm your registration."</p>
                                <p class="register-success__hint">
                                    "A confirmation link has been sent to "
                                    <strong>{move || registered_email.get().unwrap_or_default()}</strong>
                                </p>
                                <a class="btn btn--primary" href=LOGIN_PATH>"Back to Login"</a>
                            </div>
                        }
                    }
                >
                    <p class="register-card__subtitle">"Fill in your details to register"</p>
                    <form class="register-form" on:submit=on_submit>
                        {text_input("First Name", "text", TextField::FirstName)}
                        {text_input("Last Name", "text", TextField::LastName)}
                        {text_input("Email", "email", TextField::Email)}
                        {text_input("Mobile Number (Optional)", "tel", TextField::MobileNumber)}
                        <label class="form-field">
                            <span class="form-field__label">"Password"</span>
                            <input
                                class="form-field__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set(TextField::Password, value));
                                }
                            />
                            <button
                                class="btn form-field__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                            <span class="form-field__hint">"Minimum 8 characters"</span>
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Gender"</span>
                            <select
                                class="form-field__input"
                                on:change=move |ev| {
                                    if let Some(gender) = Gender::from_wire(&event_target_value(&ev)) {
                                        form.update(|f| f.gender = gender);
                                    }
                                }
                            >
                                {Gender::ALL
                                    .into_iter()
                                    .map(|g| {
                                        view! {
                                            <option value=g.as_wire() selected=move || form.with(|f| f.gender == g)>
                                                {g.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        {text_input("Age", "number", TextField::Age)}
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Registering..." } else { "Register" }}
                        </button>
                        <p class="register-form__footer">
                            "Already have an account? "
                            <a href=LOGIN_PATH>"Sign in"</a>
                        </p>
                    </form>
                </Show>
            </div>
            <NoticeBar notices=notices/>
        </div>
    }
}
