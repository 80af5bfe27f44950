use yew::prelude::*;

use crate::pages::api_docs::{endpoints, EndpointDetail, BASE_URL};

const ERRORS: [(u16, &str, &str); 6] = [
    (400, "invalid_request", "Invalid parameters or malformed request"),
    (401, "unauthorized", "Missing or invalid API key"),
    (403, "forbidden", "Insufficient permissions"),
    (404, "not_found", "Resource does not exist"),
    (429, "rate_limited", "Too many requests"),
    (500, "server_error", "Internal server error"),
];

const RATE_LIMITS: [(&str, &str); 3] = [
    ("1,000", "requests/hour"),
    ("10,000", "requests/month"),
    ("10", "concurrent"),
];

/// Condensed reference for signed-in developers.
#[function_component]
pub fn AppDocs() -> Html {
    html! {
        <div class="page app-page docs-page">
            <div class="page-header">
                <span class="badge">{"v1.0.0"}</span>
                <h1>{"API Docs"}</h1>
            </div>

            <section class="card">
                <dl class="details inline">
                    <dt>{"Base URL"}</dt><dd><code>{BASE_URL}</code></dd>
                    <dt>{"Version"}</dt><dd>{"v1"}</dd>
                    <dt>{"Format"}</dt><dd>{"JSON"}</dd>
                    <dt>{"Authorization"}</dt><dd><code>{"Bearer YOUR_API_KEY"}</code></dd>
                </dl>
            </section>

            { for endpoints().into_iter().map(|endpoint| html! {
                <section class="card">
                    <EndpointDetail endpoint={endpoint} />
                </section>
            })}

            <section class="card">
                <h2>{"Error Handling"}</h2>
                <table class="params-table">
                    <thead>
                        <tr><th>{"Status"}</th><th>{"Code"}</th><th>{"Description"}</th></tr>
                    </thead>
                    <tbody>
                        { for ERRORS.iter().map(|(status, code, text)| html! {
                            <tr>
                                <td>{*status}</td>
                                <td><code>{*code}</code></td>
                                <td>{*text}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </section>

            <section class="card">
                <h2>{"Rate Limits"}</h2>
                <div class="stats-grid">
                    { for RATE_LIMITS.iter().map(|(value, unit)| html! {
                        <div class="stat-card">
                            <p class="stat-value">{*value}</p>
                            <p class="stat-label">{*unit}</p>
                        </div>
                    })}
                </div>
            </section>
        </div>
    }
}
