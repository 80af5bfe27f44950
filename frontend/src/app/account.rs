use chrono::Local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::layout::Session;
use crate::auth::session::{display_or, format_date, User};
use crate::components::copy_button::CopyButton;
use crate::data::api_keys::ApiKeyStore;

#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileDraft {
    first_name: String,
    last_name: String,
    company: String,
}

impl ProfileDraft {
    fn from_user(user: &User) -> Self {
        let m = &user.metadata;
        Self {
            first_name: display_or(&m.first_name, "").to_string(),
            last_name: display_or(&m.last_name, "").to_string(),
            company: display_or(&m.company, "").to_string(),
        }
    }

    /// Copy of `user` carrying the edited fields. Blank inputs clear the field.
    fn apply(&self, user: &User) -> User {
        let opt = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        let mut next = user.clone();
        next.metadata.first_name = opt(&self.first_name);
        next.metadata.last_name = opt(&self.last_name);
        next.metadata.company = opt(&self.company);
        next
    }
}

fn draft_input(draft: &UseStateHandle<ProfileDraft>, apply: fn(&mut ProfileDraft, String)) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
struct ProfileFormProps {
    session: Session,
}

#[function_component]
fn ProfileForm(props: &ProfileFormProps) -> Html {
    let draft = use_state(|| ProfileDraft::from_user(&props.session.user));
    let saved = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let draft = draft.clone();
        let saved = saved.clone();
        let error = error.clone();
        let session = props.session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match session.update.emit(draft.apply(&session.user)) {
                Ok(()) => {
                    log::info!("Profile updated");
                    error.set(None);
                    saved.set(true);
                }
                Err(err) => {
                    saved.set(false);
                    error.set(Some(err));
                }
            }
        })
    };

    html! {
        <section class="card">
            <h2>{"Profile"}</h2>
            if *saved {
                <div class="success-banner">{"Profile updated successfully!"}</div>
            }
            if let Some(e) = (*error).clone() {
                <div class="error-banner">{e}</div>
            }
            <form class="form" onsubmit={onsubmit}>
                <div class="form-row">
                    <label>
                        {"First Name"}
                        <input type="text" placeholder="John" value={draft.first_name.clone()}
                            oninput={draft_input(&draft, |d, v| d.first_name = v)} />
                    </label>
                    <label>
                        {"Last Name"}
                        <input type="text" placeholder="Doe" value={draft.last_name.clone()}
                            oninput={draft_input(&draft, |d, v| d.last_name = v)} />
                    </label>
                </div>
                <label>
                    {"Email "}<span class="muted">{"(cannot be changed)"}</span>
                    <input type="email" value={props.session.user.email.clone()} disabled=true />
                </label>
                <label>
                    {"Company"}
                    <input type="text" placeholder="Acme Corporation" value={draft.company.clone()}
                        oninput={draft_input(&draft, |d, v| d.company = v)} />
                </label>
                <button type="submit" class="btn btn-primary">{"Save Changes"}</button>
            </form>
        </section>
    }
}

#[function_component]
fn ApiKeyManager() -> Html {
    let store = use_state(ApiKeyStore::default);
    let creating = use_state(|| false);
    let new_name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let open = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    let close = {
        let creating = creating.clone();
        let new_name = new_name.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            creating.set(false);
            new_name.set(String::new());
            error.set(None);
        })
    };

    let on_name = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let create = {
        let store = store.clone();
        let creating = creating.clone();
        let new_name = new_name.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*store).clone();
            let today = Local::now().date_naive();
            if let Err(e) = next.create(&new_name, today, &mut rand::thread_rng()) {
                error.set(Some(e.to_string()));
                return;
            }
            store.set(next);
            creating.set(false);
            new_name.set(String::new());
            error.set(None);
        })
    };

    let toggle = |id: u32| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*store).clone();
            match next.toggle_visibility(id) {
                Ok(_) => store.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let delete = |id: u32| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*store).clone();
            match next.delete(id) {
                Ok(()) => {
                    log::info!("Deleted API key {}", id);
                    store.set(next);
                }
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{"API Keys"}</h2>
                <button type="button" class="btn btn-primary" onclick={open}>{"+ New Key"}</button>
            </div>

            if store.keys().is_empty() {
                <p class="empty-state">{"No API keys yet."}</p>
            }
            <ul class="key-list">
                { for store.keys().iter().map(|k| html! {
                    <li class="key-item">
                        <div class="key-meta">
                            <p class="key-name">{k.name.clone()}</p>
                            <code class="api-key">{k.display()}</code>
                            <p class="key-dates">
                                {format!("Created {} • Last used {}", k.created.format("%Y-%m-%d"), k.last_used_label())}
                            </p>
                        </div>
                        <div class="key-actions">
                            <button type="button" class="icon-button" onclick={toggle(k.id)}
                                title={if k.visible { "Hide" } else { "Show" }}>
                                { if k.visible { "🙈" } else { "👁" } }
                            </button>
                            <CopyButton text={k.key.clone()} />
                            <button type="button" class="icon-button danger" title="Delete" onclick={delete(k.id)}>
                                {"🗑"}
                            </button>
                        </div>
                    </li>
                })}
            </ul>

            if *creating {
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>{"Generate New API Key"}</h3>
                        <label>
                            {"Key Name"}
                            <input type="text" placeholder="e.g., Production Server"
                                value={(*new_name).clone()} oninput={on_name} />
                        </label>
                        if let Some(e) = (*error).clone() {
                            <p class="error-text">{e}</p>
                        }
                        <div class="modal-actions">
                            <button type="button" class="btn btn-outline" onclick={close}>{"Cancel"}</button>
                            <button type="button" class="btn btn-primary" onclick={create}>{"Generate"}</button>
                        </div>
                    </div>
                </div>
            }
        </section>
    }
}

#[function_component]
pub fn Account() -> Html {
    let session = use_context::<Session>();
    let Some(session) = session else {
        return html! {};
    };
    let user = session.user.clone();

    html! {
        <div class="page app-page account-page">
            <div class="page-header">
                <h1>{"Account Settings"}</h1>
            </div>

            <ProfileForm session={session} />
            <ApiKeyManager />

            <section class="card">
                <h2>{"Account Details"}</h2>
                <dl class="details">
                    <dt>{"Email"}</dt>
                    <dd>{user.email.clone()}</dd>
                    <dt>{"Account type"}</dt>
                    <dd>{display_or(&user.metadata.account_type, "N/A")}</dd>
                    <dt>{"Member since"}</dt>
                    <dd>{format_date(Some(&user.created_at))}</dd>
                    <dt>{"Last sign in"}</dt>
                    <dd>{format_date(user.last_sign_in_at.as_ref())}</dd>
                </dl>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::UserMetadata;
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: "usr_1".to_string(),
            email: "jo@example.com".to_string(),
            metadata: UserMetadata {
                first_name: Some("Jo".to_string()),
                company: Some("Old Co".to_string()),
                account_type: Some("research".to_string()),
                ..Default::default()
            },
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            last_sign_in_at: None,
        }
    }

    #[test]
    fn draft_starts_from_metadata_with_blank_gaps() {
        let draft = ProfileDraft::from_user(&user());
        assert_eq!(draft.first_name, "Jo");
        assert_eq!(draft.last_name, "");
        assert_eq!(draft.company, "Old Co");
    }

    #[test]
    fn apply_trims_and_clears_blank_fields() {
        let draft = ProfileDraft {
            first_name: "  Joanna ".to_string(),
            last_name: "Smith".to_string(),
            company: "   ".to_string(),
        };
        let next = draft.apply(&user());
        assert_eq!(next.metadata.first_name.as_deref(), Some("Joanna"));
        assert_eq!(next.metadata.last_name.as_deref(), Some("Smith"));
        assert_eq!(next.metadata.company, None);
        assert_eq!(next.metadata.account_type.as_deref(), Some("research"));
        assert_eq!(next.email, "jo@example.com");
    }
}
