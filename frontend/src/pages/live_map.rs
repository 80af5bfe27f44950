use yew::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::world_map::WorldMap;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📍",
        "Real-Time Locations",
        "Track whale pods as they move through monitored waters with live buoy updates.",
    ),
    (
        "📊",
        "Detection Analytics",
        "Each buoy reports a whale-presence probability from its acoustic classifier.",
    ),
    (
        "🔔",
        "Alert System",
        "Vessels in high-probability zones are warned so they can slow down or reroute.",
    ),
];

#[function_component]
pub fn LiveMap() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page live-map-page">
            <div class="page-header">
                <h1>{"Live Whale Detection Map"}</h1>
                <p>{"Real-time monitoring of whale activity and detection events"}</p>
            </div>

            <WorldMap />

            <div class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                })}
            </div>
        </div>
    }
}
