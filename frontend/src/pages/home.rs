use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::impact_section::ImpactTimeline;
use crate::components::process_section::ProcessSection;
use crate::components::scroll_prompt::ScrollPrompt;
use crate::Route;

const AWARDS: [(&str, &str); 10] = [
    ("/assets/awards/isef.png", "ISEF Award"),
    ("/assets/awards/hor.jpg", "US House of Representatives"),
    ("/assets/awards/nasa.png", "NASA GSFC"),
    ("/assets/awards/acl.png", "ACL"),
    ("/assets/awards/rsef.png", "RSEF"),
    ("/assets/awards/vssef.png", "VSSEF"),
    ("/assets/awards/osm.jpg", "OSM"),
    ("/assets/awards/loudoun-now.jpg", "Loudoun Now"),
    ("/assets/awards/lcps.png", "LCPS"),
    ("/assets/awards/agu.png", "AGU"),
];

struct Comparison {
    method: &'static str,
    accuracy: &'static str,
    cost: &'static str,
    real_time: &'static str,
    coverage: &'static str,
}

const COMPARISON: [Comparison; 5] = [
    Comparison { method: "Moby Labs", accuracy: "97.84 %", cost: "< $200 (one-time)", real_time: "✓ Yes", coverage: "Wide" },
    Comparison { method: "Whale Tagging", accuracy: "Single whale", cost: "$2,400/whale", real_time: "Limited", coverage: "1 whale" },
    Comparison { method: "Aerial Imagery", accuracy: "Surface only", cost: "Moderate", real_time: "✗ No", coverage: "Limited" },
    Comparison { method: "Civilian Reports", accuracy: "Unreliable", cost: "Free", real_time: "Delayed", coverage: "Sparse" },
    Comparison { method: "Cornell Benchmark", accuracy: "72.14 %", cost: "—", real_time: "—", coverage: "—" },
];

#[function_component]
fn Hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-gradient"></div>
            <div class="hero-content">
                <h1>{"Every whale matters."}</h1>
                <p>
                    {"We track and protect whales with acoustic-based systems."}
                    <span class="hero-callout">{"Whale-Watchers, Join our Waitlist!"}</span>
                </p>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Contact} classes="btn btn-light">{"Get Started →"}</Link<Route>>
                    <Link<Route> to={Route::LiveMap} classes="btn btn-ghost">{"View Live Map"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    badge: AttrValue,
    name: AttrValue,
    pitch: AttrValue,
    features: Vec<&'static str>,
    best_for: AttrValue,
    product: AttrValue,
    accent: AttrValue,
}

#[function_component]
fn ProductCard(props: &ProductCardProps) -> Html {
    let signup = format!("/signup?product={}", props.product);
    html! {
        <div class={classes!("product-card", props.accent.to_string())}>
            <span class="product-badge">{props.badge.clone()}</span>
            <h3>{props.name.clone()}</h3>
            <p>{props.pitch.clone()}</p>
            <ul>
                { for props.features.iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>
            <div class="best-for">
                <span>{"BEST FOR"}</span>
                <p>{props.best_for.clone()}</p>
            </div>
            <a href={signup} class="btn btn-primary btn-block">{"Get Started"}</a>
        </div>
    }
}

#[function_component]
fn SolutionSection() -> Html {
    html! {
        <section id="solution" class="solution-section">
            <div class="section-header">
                <h2>{"Our Solutions"}</h2>
                <p>{"Two products. One for conservation, one for vessels."}</p>
            </div>
            <div class="product-grid">
                <ProductCard
                    badge="FOR ORGANIZATIONS"
                    name="MobyGlobal Network"
                    pitch="Provides whale tracking for conservation efforts and routes."
                    features={vec![
                        "Low-cost comparable to expensive market buoys.",
                        "Durable and weather-resistant design. Solar-powered.",
                        "Custom real-time API with historical database access",
                    ]}
                    best_for="Shipping companies, coastal management, research institutions"
                    product="network"
                    accent="blue"
                />
                <ProductCard
                    badge="FOR INDIVIDUAL VESSELS"
                    name="Moby Labs SUAM"
                    pitch="Single Unit Acoustic Monitor for whale detection on your vessel."
                    features={vec![
                        "Real-time readings with localized directions",
                        "Integrates into existing vessel navigation systems",
                        "No pre-existing infrastructure dependency",
                    ]}
                    best_for="Commercial vessels, fishing boats, recreational boaters"
                    product="suam"
                    accent="cyan"
                />
            </div>
        </section>
    }
}

#[function_component]
fn WhyMobyLabs() -> Html {
    html! {
        <section id="technology" class="why-section">
            <h2>{"Why Moby Labs?"}</h2>
            <div class="table-wrap">
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th>{"Method"}</th>
                            <th>{"Accuracy"}</th>
                            <th>{"Cost"}</th>
                            <th>{"Real-Time"}</th>
                            <th>{"Coverage"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for COMPARISON.iter().enumerate().map(|(i, row)| html! {
                            <tr class={classes!((i == 0).then_some("highlight"))}>
                                <td class="method">{row.method}</td>
                                <td>{row.accuracy}</td>
                                <td>{row.cost}</td>
                                <td>{row.real_time}</td>
                                <td>{row.coverage}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[function_component]
fn AwardsStrip() -> Html {
    // Two copies so the CSS marquee loops without a gap.
    let logos = || {
        AWARDS
            .iter()
            .map(|(src, alt)| html! { <div class="award"><img src={*src} alt={*alt} loading="lazy" /></div> })
            .collect::<Html>()
    };
    html! {
        <section class="awards-strip">
            <h3>{"Recognized by Leading Organizations"}</h3>
            <div class="awards-viewport">
                <div class="awards-track">
                    <div class="awards-set">{logos()}</div>
                    <div class="awards-set" aria-hidden="true">{logos()}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="home">
            <Hero />
            <ScrollPrompt />
            <ProcessSection />
            <ImpactTimeline />
            <SolutionSection />
            <WhyMobyLabs />
            <AwardsStrip />
        </div>
    }
}
