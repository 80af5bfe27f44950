use serde_json::{json, Value};
use yew::prelude::*;

use crate::browser::scroll_to_top;

pub const BASE_URL: &str = "https://api.mobylabs.com";

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub key: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub params: Vec<Param>,
    pub response: Value,
}

impl Endpoint {
    pub fn pretty_response(&self) -> String {
        serde_json::to_string_pretty(&self.response).unwrap_or_default()
    }
}

fn param(name: &'static str, kind: &'static str, required: bool, description: &'static str) -> Param {
    Param {
        name,
        kind,
        required,
        description,
    }
}

pub fn endpoints() -> Vec<Endpoint> {
    let location = json!({ "latitude": 37.8199, "longitude": -122.4783 });
    let detection = json!({
        "id": "det_9k2j3h4k5l6m",
        "buoy_id": "buoy_001_sf_bay",
        "timestamp": "2025-12-28T14:32:15Z",
        "species": "humpback",
        "confidence": 0.9784,
        "location": location,
        "acoustic_signature": "https://cdn.mobylabs.com/signatures/det_9k2j3h4k5l6m.wav",
    });
    let mut detailed = detection.clone();
    detailed["metadata"] = json!({
        "water_temperature": 14.2,
        "depth": 85.5,
        "ambient_noise_level": 42.1,
    });

    vec![
        Endpoint {
            key: "detections",
            method: "GET",
            path: "/api/v1/detections",
            description: "Retrieve recent whale detections from the buoy network",
            params: vec![
                param("limit", "integer", false, "Number of results to return (default: 50, max: 500)"),
                param("buoy_id", "string", false, "Filter by specific buoy ID"),
                param("species", "string", false, "Filter by whale species (e.g., 'humpback', 'blue', 'gray')"),
                param("since", "timestamp", false, "Get detections since this timestamp (ISO 8601)"),
            ],
            response: json!({
                "detections": [detection],
                "count": 1,
                "next_cursor": "eyJpZCI6ImRldF85azJqM2g0azVsNm0ifQ==",
            }),
        },
        Endpoint {
            key: "detectionById",
            method: "GET",
            path: "/api/v1/detections/{id}",
            description: "Get detailed information about a specific detection",
            params: vec![param("id", "string", true, "Detection ID")],
            response: detailed,
        },
        Endpoint {
            key: "buoys",
            method: "GET",
            path: "/api/v1/buoys",
            description: "List all active buoys in your network",
            params: vec![param("status", "string", false, "Filter by status ('active', 'maintenance', 'offline')")],
            response: json!({
                "buoys": [
                    {
                        "id": "buoy_001_sf_bay",
                        "name": "San Francisco Bay - North",
                        "status": "active",
                        "location": { "latitude": 37.8199, "longitude": -122.4783 },
                        "last_detection": "2025-12-28T14:32:15Z",
                        "battery_level": 87,
                        "uptime_percent": 99.2,
                    },
                    {
                        "id": "buoy_002_sf_bay",
                        "name": "San Francisco Bay - South",
                        "status": "active",
                        "location": { "latitude": 37.7749, "longitude": -122.4194 },
                        "last_detection": "2025-12-28T13:15:42Z",
                        "battery_level": 92,
                        "uptime_percent": 98.8,
                    },
                ],
                "count": 2,
            }),
        },
        Endpoint {
            key: "alerts",
            method: "POST",
            path: "/api/v1/alerts",
            description: "Create a custom alert for whale detections in a specific area",
            params: vec![
                param("name", "string", true, "Alert name"),
                param("area", "object", true, "Geographic area (lat/lng bounds)"),
                param("species", "array", false, "Species to alert on (empty = all)"),
                param("webhook_url", "string", true, "URL to receive webhook notifications"),
            ],
            response: json!({
                "id": "alert_xyz789",
                "name": "Shipping Lane Monitor",
                "status": "active",
                "created_at": "2025-12-28T14:32:15Z",
            }),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct EndpointDetailProps {
    pub endpoint: Endpoint,
}

#[function_component]
pub fn EndpointDetail(props: &EndpointDetailProps) -> Html {
    let ep = &props.endpoint;
    html! {
        <div class="endpoint-detail">
            <div class="endpoint-title">
                <span class={classes!("method", ep.method.to_lowercase())}>{ep.method}</span>
                <code>{ep.path}</code>
            </div>
            <p>{ep.description}</p>
            <h4>{"AUTHENTICATION"}</h4>
            <p>{"Bearer Token"}</p>
            <h4>{"PARAMETERS"}</h4>
            <table class="params-table">
                <tbody>
                    { for ep.params.iter().map(|p| html! {
                        <tr>
                            <td><code>{p.name}</code></td>
                            <td>{p.kind}</td>
                            <td>{ if p.required { "required" } else { "optional" } }</td>
                            <td>{p.description}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            <h4>{"EXAMPLE RESPONSE"}</h4>
            <pre class="code-block">{ep.pretty_response()}</pre>
        </div>
    }
}

#[function_component]
pub fn ApiDocs() -> Html {
    let all = endpoints();
    let selected = use_state(|| "detections");

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let current = all
        .iter()
        .find(|e| e.key == *selected)
        .or_else(|| all.first())
        .cloned();

    html! {
        <div class="page api-docs-page">
            <div class="page-header">
                <h1>{"Moby Labs API Documentation"}</h1>
                <p>{"Access real-time whale detection data from any buoys in our global network."}</p>
            </div>

            <section class="card">
                <h2>{"Getting Started"}</h2>
                <h3>{"Base URL"}</h3>
                <pre class="code-block">{BASE_URL}</pre>
                <h3>{"Authentication"}</h3>
                <p>{"Include your API key in the Authorization header:"}</p>
                <pre class="code-block">{"Authorization: Bearer YOUR_API_KEY"}</pre>
            </section>

            <section class="card endpoints">
                <h2>{"Endpoints"}</h2>
                <div class="endpoint-layout">
                    <div class="endpoint-list">
                        { for all.iter().map(|ep| {
                            let key = ep.key;
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(key))
                            };
                            html! {
                                <button class={classes!("endpoint-item", (*selected == key).then_some("selected"))} onclick={onclick}>
                                    <span class={classes!("method", ep.method.to_lowercase())}>{ep.method}</span>
                                    <code>{ep.path}</code>
                                </button>
                            }
                        })}
                    </div>
                    if let Some(endpoint) = current {
                        <EndpointDetail endpoint={endpoint} />
                    }
                </div>
            </section>

            <section class="card">
                <h2>{"Rate Limits"}</h2>
                <p>{"Standard tier: 1,000 requests/hour • Enterprise tier: 10,000 requests/hour"}</p>
            </section>

            <section class="card">
                <h2>{"Official SDKs"}</h2>
                <div class="sdk-grid">
                    <div><h3>{"Python"}</h3><p>{"Full SDK with async support"}</p></div>
                    <div><h3>{"JavaScript"}</h3><p>{"Node.js and browser support"}</p></div>
                    <div><h3>{"Go"}</h3><p>{"Lightweight and performant"}</p></div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keys_are_unique() {
        let all = endpoints();
        let mut keys: Vec<_> = all.iter().map(|e| e.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), all.len());
    }

    #[test]
    fn detail_response_extends_list_item() {
        let all = endpoints();
        let list = &all[0].response["detections"][0];
        let detail = &all[1].response;
        assert_eq!(list["id"], detail["id"]);
        assert_eq!(detail["metadata"]["depth"], 85.5);
        assert!(list.get("metadata").is_none());
    }

    #[test]
    fn pretty_response_is_valid_json() {
        for ep in endpoints() {
            let text = ep.pretty_response();
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, ep.response);
        }
    }
}
