use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for has drifted out to sea."}</p>
            <div class="cta-buttons">
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
                <Link<Route> to={Route::Blog} classes="btn btn-outline">{"Browse the Blog"}</Link<Route>>
            </div>
        </div>
    }
}
