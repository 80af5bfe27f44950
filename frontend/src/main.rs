use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod counter;
mod scroll {
    pub mod fade;
    pub mod process;
    pub mod progress;
    pub mod visibility;
}
mod data {
    pub mod activity;
    pub mod api_keys;
    pub mod buoys;
    pub mod logs;
    pub mod source;
    pub mod usage;
    pub mod whales;
}
mod auth {
    pub mod session;
    pub mod signup;
}
mod contact {
    pub mod form;
}
mod blog {
    pub mod content;
    pub mod posts;
}
mod components {
    pub mod animated_counter;
    pub mod app_nav;
    pub mod copy_button;
    pub mod footer;
    pub mod impact_section;
    pub mod process_section;
    pub mod scroll_prompt;
    pub mod timeline_stat;
    pub mod usage_graph;
    pub mod world_map;
}
mod pages {
    pub mod about;
    pub mod api_docs;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod live_map;
    pub mod not_found;
}
mod app {
    pub mod account;
    pub mod dashboard;
    pub mod docs;
    pub mod layout;
    pub mod logs;
    pub mod map;
}

use app::{
    account::Account, dashboard::Dashboard, docs::AppDocs, layout::AppShell, logs::AppLogs,
    map::AppMap,
};
use auth::signup::Signup;
use components::footer::Footer;
use pages::{
    about::About,
    api_docs::ApiDocs,
    blog::{BlogList, BlogPostPage},
    contact::Contact,
    home::Home,
    live_map::LiveMap,
    not_found::NotFound,
};
use scroll::progress::{use_scroll_progress, use_scroll_y};

/// Past the hero the nav switches to its solid style.
const NAV_SOLID_AFTER_PX: f64 = 80.0;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/signup")]
    Signup,
    #[at("/live-map")]
    LiveMap,
    #[at("/api-docs")]
    ApiDocs,
    #[at("/app")]
    AppHome,
    #[at("/app/account")]
    AppAccount,
    #[at("/app/docs")]
    AppDocs,
    #[at("/app/logs")]
    AppLogs,
    #[at("/app/map")]
    AppMap,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn marketing(page: Html) -> Html {
    html! {
        <>
            <Nav />
            <main class="site-main">{page}</main>
            <Footer />
        </>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            marketing(html! { <Home /> })
        }
        Route::About => {
            info!("Rendering About page");
            marketing(html! { <About /> })
        }
        Route::Blog => {
            info!("Rendering Blog page");
            marketing(html! { <BlogList /> })
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            marketing(html! { <BlogPostPage slug={slug} /> })
        }
        Route::Contact => {
            info!("Rendering Contact page");
            marketing(html! { <Contact /> })
        }
        Route::Signup => {
            info!("Rendering Signup page");
            marketing(html! { <Signup /> })
        }
        Route::LiveMap => {
            info!("Rendering Live Map page");
            marketing(html! { <LiveMap /> })
        }
        Route::ApiDocs => {
            info!("Rendering API Docs page");
            marketing(html! { <ApiDocs /> })
        }
        Route::AppHome => {
            info!("Rendering App dashboard");
            html! { <AppShell><Dashboard /></AppShell> }
        }
        Route::AppAccount => {
            info!("Rendering App account");
            html! { <AppShell><Account /></AppShell> }
        }
        Route::AppDocs => {
            info!("Rendering App docs");
            html! { <AppShell><AppDocs /></AppShell> }
        }
        Route::AppLogs => {
            info!("Rendering App logs");
            html! { <AppShell><AppLogs /></AppShell> }
        }
        Route::AppMap => {
            info!("Rendering App map");
            html! { <AppShell><AppMap /></AppShell> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            marketing(html! { <NotFound /> })
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_y = use_scroll_y();
    let progress = use_scroll_progress();
    let is_scrolled = scroll_y > NAV_SOLID_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let link = |to: Route, label: &'static str, class: &'static str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={to} classes={class}>{label}</Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"🐋 Moby Labs"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {link(Route::About, "About", "nav-link")}
                    {link(Route::LiveMap, "Live Map", "nav-link")}
                    {link(Route::ApiDocs, "API Docs", "nav-link")}
                    {link(Route::Blog, "Blog", "nav-link")}
                    {link(Route::Signup, "Sign Up", "nav-link")}
                    {link(Route::Contact, "Contact", "nav-login-button")}
                </div>
            </div>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", progress)}></div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/live-map"), Some(Route::LiveMap));
        assert_eq!(
            Route::recognize("/blog/humpback-song"),
            Some(Route::BlogPost {
                slug: "humpback-song".to_string()
            })
        );
        assert_eq!(Route::recognize("/app/logs"), Some(Route::AppLogs));
    }

    #[test]
    fn not_found_route_is_declared() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn route_paths_render_back() {
        assert_eq!(Route::AppAccount.to_path(), "/app/account");
        assert_eq!(Route::ApiDocs.to_path(), "/api-docs");
    }
}
