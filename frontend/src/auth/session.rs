use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub const SESSION_KEY: &str = "mobylabs_session";

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Browser storage is unavailable")]
    StorageUnavailable,
    #[error("Failed to save session: {0}")]
    Serialize(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub metadata: UserMetadata,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Metadata value, or `fallback` when missing or blank.
pub fn display_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

/// Long US date, e.g. `January 15, 2024`, or `N/A`.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub trait AuthProvider {
    fn current_user(&self) -> Option<User>;
    fn sign_in(&self, user: &User) -> Result<(), AuthError>;
    fn sign_out(&self);
}

/// Keeps the signed-in user in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionAuth;

impl LocalSessionAuth {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl AuthProvider for LocalSessionAuth {
    fn current_user(&self) -> Option<User> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding unreadable session: {}", e);
                None
            }
        }
    }

    fn sign_in(&self, user: &User) -> Result<(), AuthError> {
        let storage = Self::storage().ok_or(AuthError::StorageUnavailable)?;
        let json = serde_json::to_string(user).map_err(|e| AuthError::Serialize(e.to_string()))?;
        storage
            .set_item(SESSION_KEY, &json)
            .map_err(|_| AuthError::StorageUnavailable)?;
        log::info!("Signed in {}", user.id);
        Ok(())
    }

    fn sign_out(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
        log::info!("Signed out");
    }
}

/// Gate for `/app` pages: the user, or where to send a visitor without one.
pub fn require_session(user: Option<User>) -> Result<User, Route> {
    user.ok_or(Route::Signup)
}

/// The signed-in user, or `None` after queueing a redirect to signup.
#[hook]
pub fn use_require_auth() -> Option<User> {
    let gate = use_state(|| require_session(LocalSessionAuth.current_user()));
    let navigator = use_navigator();
    {
        let redirect = gate.as_ref().err().cloned();
        use_effect_with_deps(
            move |redirect: &Option<Route>| {
                if let Some(route) = redirect {
                    log::info!("No session, redirecting to {:?}", route);
                    if let Some(nav) = navigator {
                        nav.push(route);
                    }
                }
                || ()
            },
            redirect,
        );
    }
    gate.as_ref().ok().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> User {
        User {
            id: "u_1".to_string(),
            email: "ada@example.com".to_string(),
            metadata: UserMetadata {
                first_name: Some("Ada".to_string()),
                ..Default::default()
            },
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            last_sign_in_at: None,
        }
    }

    #[test]
    fn display_or_falls_back_on_blank() {
        let u = user();
        assert_eq!(display_or(&u.metadata.first_name, "Developer"), "Ada");
        assert_eq!(display_or(&u.metadata.last_name, ""), "");
        assert_eq!(display_or(&Some("  ".to_string()), "Developer"), "Developer");
    }

    #[test]
    fn dates_render_long_form_or_na() {
        let u = user();
        assert_eq!(format_date(Some(&u.created_at)), "January 15, 2024");
        assert_eq!(format_date(u.last_sign_in_at.as_ref()), "N/A");
    }

    #[test]
    fn session_json_uses_camel_case_metadata() {
        let json = serde_json::to_value(user()).unwrap();
        assert_eq!(json["metadata"]["firstName"], "Ada");
        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user());
    }

    #[test]
    fn app_without_session_goes_to_signup() {
        assert_eq!(require_session(None), Err(Route::Signup));
        assert_eq!(require_session(Some(user())), Ok(user()));
    }

    #[test]
    fn missing_metadata_deserializes_to_default() {
        let raw = r#"{"id":"x","email":"a@b.c","created_at":"2024-01-15T09:30:00Z","last_sign_in_at":null}"#;
        let u: User = serde_json::from_str(raw).unwrap();
        assert_eq!(u.metadata, UserMetadata::default());
    }
}
