use yew::prelude::*;

use crate::auth::session::{use_require_auth, AuthProvider, LocalSessionAuth, User};
use crate::components::app_nav::AppNav;

/// Signed-in user plus a way to persist edits to it.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub update: Callback<User, Result<(), String>>,
}

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps every `/app` page. Renders nothing while the signup redirect is pending.
#[function_component]
pub fn AppShell(props: &AppShellProps) -> Html {
    let stored = use_require_auth();
    let edited = use_state(|| None::<User>);

    let update = {
        let edited = edited.clone();
        Callback::from(move |user: User| {
            LocalSessionAuth.sign_in(&user).map_err(|e| e.to_string())?;
            edited.set(Some(user));
            Ok(())
        })
    };

    let Some(user) = (*edited).clone().or(stored) else {
        return html! {};
    };

    let session = Session {
        user: user.clone(),
        update,
    };

    html! {
        <ContextProvider<Session> context={session}>
            <div class="app-shell">
                <AppNav user={user} />
                <main class="app-main">
                    { for props.children.iter() }
                </main>
            </div>
        </ContextProvider<Session>>
    }
}
