use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"🐋 Moby Labs"}</h3>
                    <p>{"AI-powered whale detection technology preventing cetacean deaths through real-time monitoring."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::LiveMap}>{"Live Map"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Resources"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ApiDocs}>{"API Documentation"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Signup}>{"Get an API Key"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{"📧 info@mobylabs.com"}</li>
                        <li>{"🌐 Leesburg, VA"}</li>
                        <li>
                            <Link<Route> to={Route::Contact} classes="btn btn-light">{"Get in Touch"}</Link<Route>>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Moby Labs. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
