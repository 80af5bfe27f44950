use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{display_or, AuthProvider, LocalSessionAuth, User};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AppNavProps {
    pub user: User,
}

/// Top bar for the signed-in area.
#[function_component]
pub fn AppNav(props: &AppNavProps) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let sign_out = Callback::from(move |_: MouseEvent| {
        LocalSessionAuth.sign_out();
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });

    let link = |to: Route, label: &'static str| {
        let active = route.as_ref() == Some(&to);
        html! {
            <Link<Route> to={to} classes={classes!("app-nav-link", active.then_some("active"))}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="app-nav">
            <div class="nav-content">
                <Link<Route> to={Route::AppHome} classes="nav-logo">{"🐋 Moby Labs"}</Link<Route>>
                <div class="nav-right">
                    {link(Route::AppHome, "Dashboard")}
                    {link(Route::AppMap, "Map")}
                    {link(Route::AppLogs, "Logs")}
                    {link(Route::AppDocs, "Docs")}
                    {link(Route::AppAccount, "Account")}
                    <span class="nav-user">{display_or(&props.user.metadata.first_name, &props.user.email)}</span>
                    <button class="nav-logout-button" onclick={sign_out}>{"Sign out"}</button>
                </div>
            </div>
        </nav>
    }
}
