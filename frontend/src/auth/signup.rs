use chrono::Utc;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{AuthProvider, LocalSessionAuth, User, UserMetadata};
use crate::Route;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountType {
    #[default]
    Individual,
    Organization,
    Research,
    Shipping,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Individual,
        AccountType::Organization,
        AccountType::Research,
        AccountType::Shipping,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            AccountType::Individual => "individual",
            AccountType::Organization => "organization",
            AccountType::Research => "research",
            AccountType::Shipping => "shipping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Individual => "Individual Developer",
            AccountType::Organization => "Organization / Enterprise",
            AccountType::Research => "Research Institution",
            AccountType::Shipping => "Shipping Company",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    /// `?product=` from the contact and solutions pages. The buoy network is
    /// sold to organizations, the ship-mounted unit to shipping companies.
    pub fn from_product(product: &str) -> Option<Self> {
        match product {
            "network" => Some(AccountType::Organization),
            "suam" => Some(AccountType::Shipping),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms to continue")]
    TermsNotAccepted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub account_type: AccountType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.first_name.trim().is_empty() {
            return Err(FormError::Required("First name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(FormError::Required("Last name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Required("Email"));
        }
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accepted_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(())
    }

    /// The session user this form signs in as.
    pub fn to_user(&self, id: String) -> User {
        let now = Utc::now();
        let company = self.company.trim();
        User {
            id,
            email: self.email.trim().to_string(),
            metadata: UserMetadata {
                first_name: Some(self.first_name.trim().to_string()),
                last_name: Some(self.last_name.trim().to_string()),
                company: (!company.is_empty()).then(|| company.to_string()),
                account_type: Some(self.account_type.value().to_string()),
            },
            created_at: now,
            last_sign_in_at: Some(now),
        }
    }
}

fn text_input(form: &UseStateHandle<SignupForm>, apply: fn(&mut SignupForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component]
pub fn Signup() -> Html {
    let product = use_search_param("product".to_string());
    let form = use_state(|| SignupForm {
        account_type: product
            .as_deref()
            .and_then(AccountType::from_product)
            .unwrap_or_default(),
        ..Default::default()
    });
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                error.set(Some(err.to_string()));
                return;
            }
            let user = form.to_user(format!("usr_{:016x}", rand::random::<u64>()));
            match LocalSessionAuth.sign_in(&user) {
                Ok(()) => {
                    error.set(None);
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::AppHome);
                    }
                }
                Err(err) => {
                    log::warn!("Sign in failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let on_account_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(account_type) = AccountType::from_value(&select.value()) {
                let mut next = (*form).clone();
                next.account_type = account_type;
                form.set(next);
            }
        })
    };

    let on_terms = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.accepted_terms = input.checked();
            form.set(next);
        })
    };

    html! {
        <div class="page signup-page">
            <div class="page-header">
                <h1>{"Create Your Account"}</h1>
                <p>{"Join the Moby Labs network and start accessing real-time whale detection data"}</p>
            </div>
            if let Some(message) = (*error).as_ref() {
                <div class="error-banner">{message}</div>
            }
            <form class="card form" onsubmit={onsubmit}>
                <label>
                    {"Account Type"}
                    <select onchange={on_account_type}>
                        { for AccountType::ALL.iter().map(|t| html! {
                            <option value={t.value()} selected={*t == form.account_type}>{t.label()}</option>
                        })}
                    </select>
                </label>
                <div class="form-row">
                    <label>
                        {"First Name"}
                        <input type="text" placeholder="John" value={form.first_name.clone()}
                            oninput={text_input(&form, |f, v| f.first_name = v)} />
                    </label>
                    <label>
                        {"Last Name"}
                        <input type="text" placeholder="Doe" value={form.last_name.clone()}
                            oninput={text_input(&form, |f, v| f.last_name = v)} />
                    </label>
                </div>
                <label>
                    {"Email Address"}
                    <input type="email" placeholder="john.doe@example.com" value={form.email.clone()}
                        oninput={text_input(&form, |f, v| f.email = v)} />
                </label>
                <label>
                    {"Company / Organization"}
                    <input type="text" placeholder="Acme Corporation" value={form.company.clone()}
                        oninput={text_input(&form, |f, v| f.company = v)} />
                </label>
                <div class="form-row">
                    <label>
                        {"Password"}
                        <input type="password" placeholder="••••••••" value={form.password.clone()}
                            oninput={text_input(&form, |f, v| f.password = v)} />
                    </label>
                    <label>
                        {"Confirm Password"}
                        <input type="password" placeholder="••••••••" value={form.confirm_password.clone()}
                            oninput={text_input(&form, |f, v| f.confirm_password = v)} />
                    </label>
                </div>
                <label class="checkbox">
                    <input type="checkbox" checked={form.accepted_terms} onchange={on_terms} />
                    {"I agree to the Terms of Service and Privacy Policy"}
                </label>
                <div class="included">
                    <h3>{"What's Included:"}</h3>
                    <ul>
                        <li>{"Access to real-time whale detection API"}</li>
                        <li>{"1,000 API requests per hour"}</li>
                        <li>{"Custom alert webhooks"}</li>
                        <li>{"Dashboard and analytics"}</li>
                    </ul>
                </div>
                <button type="submit" class="btn btn-primary btn-block">{"Create Account"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupForm {
        SignupForm {
            account_type: AccountType::Research,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            password: "whalesong".into(),
            confirm_password: "whalesong".into(),
            accepted_terms: true,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn rules_fire_in_order() {
        let mut f = valid();
        f.first_name = "  ".into();
        assert_eq!(f.validate(), Err(FormError::Required("First name")));

        let mut f = valid();
        f.email = "ada.example.com".into();
        assert_eq!(f.validate(), Err(FormError::InvalidEmail));

        let mut f = valid();
        f.password = "short".into();
        f.confirm_password = "short".into();
        assert_eq!(f.validate(), Err(FormError::PasswordTooShort));

        let mut f = valid();
        f.confirm_password = "whalesongs".into();
        assert_eq!(f.validate(), Err(FormError::PasswordMismatch));

        let mut f = valid();
        f.accepted_terms = false;
        assert_eq!(f.validate(), Err(FormError::TermsNotAccepted));
    }

    #[test]
    fn product_preselects_account_type() {
        assert_eq!(AccountType::from_product("network"), Some(AccountType::Organization));
        assert_eq!(AccountType::from_product("suam"), Some(AccountType::Shipping));
        assert_eq!(AccountType::from_product("other"), None);
        assert_eq!(AccountType::from_value("research"), Some(AccountType::Research));
    }

    #[test]
    fn user_carries_trimmed_metadata() {
        let mut f = valid();
        f.first_name = " Ada ".into();
        let user = f.to_user("usr_1".into());
        assert_eq!(user.metadata.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.metadata.company, None);
        assert_eq!(user.metadata.account_type.as_deref(), Some("research"));
        assert_eq!(user.last_sign_in_at, Some(user.created_at));
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(FormError::Required("Email").to_string(), "Email is required");
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
